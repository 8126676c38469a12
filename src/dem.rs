//! The data encapsulation mechanism: AES-256-GCM keyed through HKDF-SHA256
//! from the 32 byte seed the IBE header transports. The ciphertext metadata
//! (ciphersuite and round) is bound as associated data, so edited metadata
//! fails authentication exactly like an edited body.

use crate::domain_sep::DOM_SEP_DEM_KEY;
use crate::param::{NONCE_LEN, SEED_LEN, TAG_LEN};
use crate::tlock_err::*;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

/// Derive the body cipher key from the symmetric seed.
fn derive_key(seed: &[u8; SEED_LEN]) -> [u8; 32] {
    let hk = Hkdf::<Sha256>::new(None, seed);
    let mut key = [0u8; 32];
    hk.expand(DOM_SEP_DEM_KEY.as_bytes(), &mut key)
        .expect("32 bytes is within the hkdf output limit");
    key
}

/// Encrypt a message of arbitrary length (empty included), authenticating
/// the associated data alongside it. The returned body carries the
/// authentication tag in its last 16 bytes.
pub fn seal(
    seed: &[u8; SEED_LEN],
    nonce: &[u8; NONCE_LEN],
    aad: &[u8],
    message: &[u8],
) -> Result<Vec<u8>, String> {
    let mut key = derive_key(seed);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
    let out = cipher
        .encrypt(Nonce::from_slice(nonce), Payload { msg: message, aad })
        .map_err(|_| ERR_ENCRYPTION.to_owned());
    key.zeroize();
    out
}

/// Decrypt and authenticate a body. Fails with one uniform error whether the
/// seed is wrong, the body was tampered with or the associated data does not
/// match, and returns no output on failure.
pub fn open(
    seed: &[u8; SEED_LEN],
    nonce: &[u8; NONCE_LEN],
    aad: &[u8],
    body: &[u8],
) -> Result<Vec<u8>, String> {
    if body.len() < TAG_LEN {
        return Err(ERR_DECRYPTION.to_owned());
    }
    let mut key = derive_key(seed);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
    let out = cipher
        .decrypt(Nonce::from_slice(nonce), Payload { msg: body, aad })
        .map_err(|_| ERR_DECRYPTION.to_owned());
    key.zeroize();
    out
}
