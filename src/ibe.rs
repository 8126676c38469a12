//! Boneh-Franklin FullIdent encryption of the 32 byte symmetric seed.
//!
//! FullIdent (rather than BasicIdent) is what makes wrong-key rejection
//! deterministic: decryption re-derives the blinding scalar from the
//! recovered seed and rejects the key unless the ephemeral element checks
//! out, before any use of the seed.

use crate::hash_to_field::{h2, h3, h4, xor};
use crate::param::SEED_LEN;
use crate::tlock_err::*;
use crate::{TlockG1, TlockG2, TlockScalar};
use ark_bls12_381::Bls12_381;
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::{CurveGroup, Group};
use ark_serialize::CanonicalSerialize;

/// The IBE header of a tlock ciphertext, with
///
/// * `u = r·P2`
/// * `v = sigma (+) H_2(e(Q_id, P_pub)^r)`
/// * `w = seed (+) H_4(sigma)`
#[derive(Debug, Clone, PartialEq)]
pub struct IbeCiphertext {
    u: TlockG2,
    v: Vec<u8>,
    w: Vec<u8>,
}

impl IbeCiphertext {
    /// Constructing an IbeCiphertext object.
    pub(crate) fn construct(u: TlockG2, v: Vec<u8>, w: Vec<u8>) -> Self {
        IbeCiphertext { u, v, w }
    }

    /// Returns the ephemeral element `r·P2`.
    pub fn u(&self) -> TlockG2 {
        self.u
    }

    /// Returns the masked commitment `sigma`.
    pub fn v(&self) -> &[u8] {
        &self.v
    }

    /// Returns the masked seed.
    pub fn w(&self) -> &[u8] {
        &self.w
    }
}

/// The pairing, with the argument order fixed to this scheme's orientation:
/// identity hashes and signatures in G1, public keys and ephemerals in G2.
pub(crate) fn pairing(g1: TlockG1, g2: TlockG2) -> PairingOutput<Bls12_381> {
    Bls12_381::pairing(g1.into_affine(), g2.into_affine())
}

/// Encrypt a 32 byte seed towards an identity element under the beacon's
/// public key:
///
/// C = <U, V, W> = <r·P2, sigma (+) H_2(g_id^r), seed (+) H_4(sigma)>
///
/// where sigma = H_4(t) for the blinding factor t, r = H_3(sigma, seed) and
/// g_id = e(Q_id, P_pub).
pub fn encrypt(
    p_pub: TlockG2,
    q_id: TlockG1,
    seed: &[u8; SEED_LEN],
    t: TlockScalar,
) -> Result<IbeCiphertext, String> {
    let mut t_bytes = Vec::new();
    t.serialize_compressed(&mut t_bytes)
        .map_err(|_| ERR_SERIAL.to_owned())?;
    let sigma = h4(&t_bytes);
    // r = H3(sigma, seed)
    let r = h3(&sigma, seed);
    // U = r·P2
    let u = TlockG2::generator() * r;
    // g_id^r = e(Q_id, r·P_pub)
    let g_id = pairing(q_id, p_pub * r);
    // V = sigma (+) H2(g_id^r)
    let v = xor(&sigma, &h2(g_id));
    // W = seed (+) H4(sigma)
    let w = xor(seed, &h4(&sigma));
    Ok(IbeCiphertext { u, v, w })
}

/// Decrypt the seed from an IBE header with a decryption key, i.e. the
/// beacon signature for the identity the header was encrypted towards.
///
/// Recovers sigma and the seed, re-derives r = H_3(sigma, seed) and rejects
/// the key unless `r·P2` equals the U the encryptor committed to. A key for
/// any other identity fails this check deterministically.
pub fn decrypt(ciphertext: &IbeCiphertext, key: TlockG1) -> Result<Vec<u8>, String> {
    if ciphertext.v.len() != SEED_LEN || ciphertext.w.len() != SEED_LEN {
        return Err(ERR_DECRYPTION.to_owned());
    }
    // sigma = V (+) H2(e(key, U))
    let sigma = xor(&ciphertext.v, &h2(pairing(key, ciphertext.u)));
    // seed = W (+) H4(sigma)
    let seed = xor(&ciphertext.w, &h4(&sigma));
    // U == rP must hold for the honest r
    let r = h3(&sigma, &seed);
    if TlockG2::generator() * r != ciphertext.u {
        return Err(ERR_DECRYPTION.to_owned());
    }
    Ok(seed)
}
