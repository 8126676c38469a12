//! Tests against the production drand quicknet beacon
//! (chain 52db9ba70e0cc0f6eaf7803dd07447a1f5477735fd3f661792ba94600c84e971).

use crate::ciphertext::Ciphertext;
use crate::decryption_key::DecryptionKey;
use crate::hash_to_field::sha256;
use crate::identity::Identity;
use crate::public_key::MasterPublicKey;
use crate::tlock::{tld, tld_with_secret, tle};
use crate::tlock_err::ERR_DECRYPTION;
use hex_literal::hex;

/// The quicknet public key, as served by api.drand.sh.
const QUICKNET_PK: [u8; 96] = hex!(
    "83cf0f2896adee7eb8b5f01fcad3912212c437e0073e911fb90022d3e760183c
     8c4b450b6a0a6c3ac6a5776a2d1064510d1fec758c921cc22b0e17e63aaf4bcb
     5ed66304de9cf809bd274ca73bab4af5a6e9c76a4bc09e76eae8991ef5ece45a"
);

/// The quicknet signature for round 1000.
const ROUND_1000_SIG: [u8; 48] = hex!(
    "b44679b9a59af2ec876b1a6b1ad52ea9b1615fc3982b19576350f93447cb1125
     e342b73a8dd2bacbe47e4b6b63ed5e39"
);

const ROUND: u64 = 1000;
const EPHEMERAL_SECRET: [u8; 32] =
    hex!("0102030401020304010203040102030401020304010203040102030401020304");

#[test]
fn vectors_quicknet_public_key_parses() {
    let pk = MasterPublicKey::from_bytes(&QUICKNET_PK).unwrap();
    assert!(pk.validate());

    let from_hex = MasterPublicKey::from_hex(&hex::encode(QUICKNET_PK)).unwrap();
    assert_eq!(pk, from_hex);
    assert_eq!(pk.to_bytes().unwrap(), QUICKNET_PK.to_vec());
}

#[test]
fn vectors_round_identity_digest() {
    let id = Identity::from_round(ROUND);
    assert_eq!(id.as_bytes().to_vec(), sha256(&ROUND.to_be_bytes()));
}

#[test]
fn vectors_quicknet_signature_verifies() {
    let pk = MasterPublicKey::from_bytes(&QUICKNET_PK).unwrap();
    let key = DecryptionKey::from_bytes(&ROUND_1000_SIG).unwrap();

    assert!(key.verify(ROUND, &pk));
    assert!(!key.verify(ROUND + 1, &pk));
}

#[test]
fn vectors_quicknet_round_trip() {
    let pk = MasterPublicKey::from_bytes(&QUICKNET_PK).unwrap();
    let key = DecryptionKey::from_bytes(&ROUND_1000_SIG).unwrap();
    let plaintext = b"Hello, Timelock!";

    let ct = tle(&pk, ROUND, plaintext, &EPHEMERAL_SECRET).unwrap();
    assert_eq!(ct.round(), ROUND);
    assert_eq!(
        ct.to_bytes().unwrap().len(),
        Ciphertext::estimate_size(plaintext.len())
    );

    // the real beacon signature opens it
    let recovered = tld(&ct, &key).unwrap();
    assert_eq!(recovered, plaintext.to_vec());

    // and survives a serialization round trip
    let reparsed = Ciphertext::from_bytes(&ct.to_bytes().unwrap()).unwrap();
    assert_eq!(tld(&reparsed, &key).unwrap(), plaintext.to_vec());

    // the encryptor can open it early with the ephemeral secret
    assert_eq!(
        tld_with_secret(&ct, &EPHEMERAL_SECRET).unwrap(),
        plaintext.to_vec()
    );
}

#[test]
fn vectors_round_1000_signature_does_not_open_other_rounds() {
    let pk = MasterPublicKey::from_bytes(&QUICKNET_PK).unwrap();
    let key = DecryptionKey::from_bytes(&ROUND_1000_SIG).unwrap();

    let ct = tle(&pk, ROUND + 1, b"Hello, Timelock!", &EPHEMERAL_SECRET).unwrap();
    assert_eq!(tld(&ct, &key), Err(ERR_DECRYPTION.to_owned()));
}
