use crate::ibe::{decrypt, encrypt, IbeCiphertext};
use crate::identity::Identity;
use crate::param::SEED_LEN;
use crate::{TlockG1, TlockG2, TlockScalar};
use ark_ec::Group;
use ark_std::{test_rng, UniformRand};

fn setup() -> (TlockScalar, TlockG2, TlockG1) {
    let mut rng = test_rng();
    let msk = TlockScalar::rand(&mut rng);
    let p_pub = TlockG2::generator() * msk;
    let q_id = Identity::new([2u8; 32]).to_curve().unwrap();
    (msk, p_pub, q_id)
}

#[test]
fn ibe_encrypt_and_decrypt() {
    let (msk, p_pub, q_id) = setup();
    let seed = [2u8; SEED_LEN];
    let t = TlockScalar::rand(&mut test_rng());

    let ct = encrypt(p_pub, q_id, &seed, t).unwrap();

    // the extract of the encrypted-to identity opens the header
    let d_id = q_id * msk;
    let recovered = decrypt(&ct, d_id).unwrap();
    assert_eq!(recovered, seed.to_vec());
}

#[test]
fn ibe_decryption_fails_with_bad_key() {
    let (_msk, p_pub, q_id) = setup();
    let seed = [2u8; SEED_LEN];
    let t = TlockScalar::rand(&mut test_rng());

    let ct = encrypt(p_pub, q_id, &seed, t).unwrap();

    // the generator is a well formed element but not the extract
    let res = decrypt(&ct, TlockG1::generator());
    assert!(res.is_err());
}

#[test]
fn ibe_decryption_fails_with_wrong_identity_key() {
    let (msk, p_pub, q_id) = setup();
    let seed = [2u8; SEED_LEN];
    let t = TlockScalar::rand(&mut test_rng());

    let ct = encrypt(p_pub, q_id, &seed, t).unwrap();

    // a valid extract, for a different identity
    let other = Identity::new([3u8; 32]).to_curve().unwrap();
    let res = decrypt(&ct, other * msk);
    assert!(res.is_err());
}

#[test]
fn ibe_decryption_fails_with_bad_ciphertext() {
    let (msk, _p_pub, q_id) = setup();

    let ct = IbeCiphertext::construct(TlockG2::generator(), vec![], vec![]);
    let res = decrypt(&ct, q_id * msk);
    assert!(res.is_err());
}

#[test]
fn ibe_blinding_factor_separates_ciphertexts() {
    let (_msk, p_pub, q_id) = setup();
    let seed = [2u8; SEED_LEN];
    let mut rng = test_rng();

    let ct1 = encrypt(p_pub, q_id, &seed, TlockScalar::rand(&mut rng)).unwrap();
    let ct2 = encrypt(p_pub, q_id, &seed, TlockScalar::rand(&mut rng)).unwrap();
    assert_ne!(ct1, ct2);
}
