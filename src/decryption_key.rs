//! The decryption key of a round: the beacon's BLS signature over the round
//! identity.

use crate::identity::Identity;
use crate::membership::MembershipTesting;
use crate::param::{CIPHERSUITE, SIG_LEN, VALID_CIPHERSUITE};
use crate::public_key::MasterPublicKey;
use crate::serdes::TlockSerDes;
use crate::tlock_err::*;
use crate::{TlockG1, TlockG2};
use ark_bls12_381::Bls12_381;
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::{CurveGroup, Group};
use ark_ff::Zero;

/// A decryption key is the beacon signature for an elapsed round, a wrapper
/// of a `TlockG1` element together with the ciphersuite it belongs to. The
/// core never produces one; the caller fetches it from the beacon network
/// once the round has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct DecryptionKey {
    /// ciphersuite id
    ciphersuite: u8,
    /// the signature element
    point: TlockG1,
}

impl DecryptionKey {
    /// Constructing a DecryptionKey object.
    pub fn construct(ciphersuite: u8, point: TlockG1) -> Self {
        DecryptionKey { ciphersuite, point }
    }

    /// Parse a key from its 48 byte compressed encoding, the form beacon
    /// APIs return. Rejects malformed encodings, points outside the prime
    /// order subgroup and the point at infinity.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        if bytes.len() != SIG_LEN {
            return Err(ERR_DESERIAL.to_owned());
        }
        let mut reader = bytes;
        let point = <TlockG1 as TlockSerDes>::deserialize(&mut reader)
            .map_err(|e| e.to_string())?;
        Ok(DecryptionKey {
            ciphersuite: CIPHERSUITE,
            point,
        })
    }

    /// Parse a key from the hex encoding beacon APIs return.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let bytes = hex::decode(s).map_err(|_| ERR_HEX.to_owned())?;
        Self::from_bytes(&bytes)
    }

    /// The compressed encoding of the wrapped element.
    pub fn to_bytes(&self) -> Result<Vec<u8>, String> {
        let mut buf = Vec::with_capacity(SIG_LEN);
        self.point
            .serialize(&mut buf)
            .map_err(|_| ERR_SERIAL.to_owned())?;
        Ok(buf)
    }

    /// Returns the signature element this structure contains.
    pub fn point(&self) -> TlockG1 {
        self.point
    }

    /// Returns the ciphersuite of the key.
    pub fn ciphersuite(&self) -> u8 {
        self.ciphersuite
    }

    /// Re-check the wrapped element; a directly constructed key may carry an
    /// invalid ciphersuite or a point outside the prime order subgroup.
    pub fn validate(&self) -> bool {
        VALID_CIPHERSUITE.contains(&self.ciphersuite)
            && !self.point.is_zero()
            && self.point.is_in_prime_group()
    }

    /// Verify that this key really is the beacon signature for `round` under
    /// the given master public key, i.e. that e(key, P2) == e(Q_round, pk).
    ///
    /// To use a single Miller loop we compute
    ///  e(key, -P2) · e(Q_round, pk) == 1
    /// negating the generator rather than the signature, since the negation
    /// is computed once per call either way and the generator is public.
    ///
    /// Decryption does not require this check (a wrong key fails the
    /// FullIdent consistency check on its own), but callers fetching
    /// signatures from untrusted relays can reject garbage early.
    pub fn verify(&self, round: u64, pk: &MasterPublicKey) -> bool {
        if !self.validate() || !pk.validate() {
            return false;
        }
        let q_id = match Identity::from_round(round).to_curve() {
            Ok(p) => p,
            Err(_) => return false,
        };
        let neg_p2 = -TlockG2::generator();
        let looped = Bls12_381::multi_miller_loop(
            [self.point.into_affine(), q_id.into_affine()],
            [neg_p2.into_affine(), pk.pk().into_affine()],
        );
        match Bls12_381::final_exponentiation(looped) {
            Some(product) => product == PairingOutput::<Bls12_381>::zero(),
            None => false,
        }
    }
}
