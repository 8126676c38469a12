//! This module implements the deterministic randomness used by encryption.
//! Every value an encryption call needs (the symmetric seed, the IBE
//! blinding factor, the body cipher nonce) is expanded from the caller's
//! ephemeral secret with HKDF-SHA512, so that encrypting the same inputs
//! twice yields byte-identical ciphertexts.

use crate::domain_sep::DOM_SEP_PRNG_SALT;
use crate::param::SEED_LEN;
use crate::TlockScalar;
use ark_ff::PrimeField;
use hkdf::Hkdf;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A Prng is a wrapper of a 64 byte seed, extracted once from the ephemeral
/// secret at the start of an encryption call. Sampling does not mutate the
/// seed; distinct values are separated by their info strings. The seed is
/// zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Prng([u8; 64]);

impl Prng {
    /// Instantiate a Prng by extracting the randomness from an ephemeral
    /// secret with HKDF-Extract under a fixed salt.
    pub fn init(esk: &[u8; SEED_LEN]) -> Self {
        let (prk, _) = Hkdf::<Sha512>::extract(Some(DOM_SEP_PRNG_SALT.as_bytes()), esk);
        let mut seed = [0u8; 64];
        seed.copy_from_slice(&prk);
        Self(seed)
    }

    /// Sample a field element for the given info string.
    ///
    /// Within sample():
    ///  m = HKDF-Expand(seed, info, 64)
    ///  r = OS2IP(m) % p
    pub fn sample(&self, info: &str) -> TlockScalar {
        let hk = Hkdf::<Sha512>::from_prk(&self.0)
            .expect("the seed length matches the hash output length");
        let mut okm = [0u8; 64];
        hk.expand(info.as_bytes(), &mut okm)
            .expect("64 bytes is within the hkdf output limit");
        let r = TlockScalar::from_be_bytes_mod_order(&okm);
        okm.zeroize();
        r
    }

    /// Sample N bytes for the given info string.
    pub fn sample_bytes<const N: usize>(&self, info: &str) -> [u8; N] {
        let hk = Hkdf::<Sha512>::from_prk(&self.0)
            .expect("the seed length matches the hash output length");
        let mut okm = [0u8; N];
        hk.expand(info.as_bytes(), &mut okm)
            .expect("the output length is within the hkdf limit");
        okm
    }
}
