//! The timelock encryption and decryption entry points.

use crate::ciphertext::Ciphertext;
use crate::decryption_key::DecryptionKey;
use crate::dem;
use crate::domain_sep::{DOM_SEP_BLIND, DOM_SEP_NONCE, DOM_SEP_SEED};
use crate::ibe;
use crate::identity::Identity;
use crate::param::{CIPHERSUITE, NONCE_LEN, SEED_LEN, VALID_CIPHERSUITE};
use crate::prng::Prng;
use crate::public_key::MasterPublicKey;
use crate::tlock_err::*;
use zeroize::Zeroize;

/// The metadata bound into the body cipher as associated data:
/// `| ciphersuite | round |`. An edited ciphersuite or round on the wire
/// fails authentication even though neither enters the IBE header.
fn associated_data(ciphersuite: u8, round: u64) -> [u8; 9] {
    let mut aad = [0u8; 9];
    aad[0] = ciphersuite;
    aad[1..].copy_from_slice(&round.to_be_bytes());
    aad
}

/// Timelock-encrypt a message towards a beacon round.
///
/// The computation is a pure function of its inputs: the ephemeral secret
/// seeds a prng from which the symmetric seed, the IBE blinding factor and
/// the body cipher nonce are all drawn, so encrypting the same inputs twice
/// yields byte-identical ciphertexts. The ephemeral secret must be uniformly
/// random and stay private for as long as the message should; with the
/// secret in hand anyone can recover the plaintext early via
/// [`tld_with_secret`].
///
/// Returns an error if the public key fails validation or if any internal
/// step fails.
pub fn tle(
    pk: &MasterPublicKey,
    round: u64,
    message: &[u8],
    esk: &[u8; SEED_LEN],
) -> Result<Ciphertext, String> {
    if !pk.validate() {
        return Err(ERR_PUBLIC_KEY.to_owned());
    }

    let prng = Prng::init(esk);
    let mut seed: [u8; SEED_LEN] = prng.sample_bytes(DOM_SEP_SEED);
    let t = prng.sample(DOM_SEP_BLIND);
    let nonce: [u8; NONCE_LEN] = prng.sample_bytes(DOM_SEP_NONCE);

    let q_id = Identity::from_round(round).to_curve()?;
    let header = ibe::encrypt(pk.pk(), q_id, &seed, t)?;
    let aad = associated_data(CIPHERSUITE, round);
    let body = dem::seal(&seed, &nonce, &aad, message);
    seed.zeroize();

    Ok(Ciphertext::construct(
        CIPHERSUITE,
        round,
        header,
        nonce,
        body?,
    ))
}

/// Timelock-decrypt a ciphertext with the beacon signature for the round it
/// embeds.
///
/// Fails with one uniform error whenever the key does not open the
/// ciphertext: a signature for a different round, a structurally valid but
/// wrong element, or a tampered body are indistinguishable from the
/// outside. No partial plaintext is ever returned.
pub fn tld(ciphertext: &Ciphertext, key: &DecryptionKey) -> Result<Vec<u8>, String> {
    if !VALID_CIPHERSUITE.contains(&ciphertext.ciphersuite()) {
        return Err(ERR_CIPHERSUITE.to_owned());
    }
    if !key.validate() {
        return Err(ERR_MEMBERSHIP.to_owned());
    }

    let recovered = ibe::decrypt(ciphertext.header(), key.point())?;
    if recovered.len() != SEED_LEN {
        return Err(ERR_DECRYPTION.to_owned());
    }
    let mut seed = [0u8; SEED_LEN];
    seed.copy_from_slice(&recovered);

    let aad = associated_data(ciphertext.ciphersuite(), ciphertext.round());
    let out = dem::open(&seed, ciphertext.nonce(), &aad, ciphertext.body());
    seed.zeroize();
    out
}

/// Recover the plaintext with the ephemeral secret alone, without a beacon
/// signature: the encryptor can always open their own ciphertext before the
/// round elapses.
pub fn tld_with_secret(ciphertext: &Ciphertext, esk: &[u8; SEED_LEN]) -> Result<Vec<u8>, String> {
    if !VALID_CIPHERSUITE.contains(&ciphertext.ciphersuite()) {
        return Err(ERR_CIPHERSUITE.to_owned());
    }

    let prng = Prng::init(esk);
    let mut seed: [u8; SEED_LEN] = prng.sample_bytes(DOM_SEP_SEED);
    let aad = associated_data(ciphertext.ciphersuite(), ciphertext.round());
    let out = dem::open(&seed, ciphertext.nonce(), &aad, ciphertext.body());
    seed.zeroize();
    out
}
