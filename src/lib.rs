// this is a native Rust implementation of timelock encryption to drand
// beacon rounds, a.k.a. tlock

//! Timelock encryption over curve BLS12-381.
//!
//! A message is encrypted towards a future round of a randomness beacon
//! (drand "quicknet" scheme): once the beacon publishes its BLS signature for
//! that round, anyone holding the signature can decrypt. Until then the
//! ciphertext hides the message under the hardness of the bilinear
//! Diffie-Hellman problem.
//!
//! The construction is hybrid: a Boneh-Franklin FullIdent header transports a
//! 32 byte symmetric seed, and an AES-256-GCM body carries the actual
//! message under a key derived from that seed. See [`tle`] and [`tld`] for
//! the two entry points.

pub mod ciphertext;
pub mod decryption_key;
pub mod domain_sep;
pub mod ibe;
pub mod identity;
pub mod membership;
pub mod param;
pub mod public_key;
pub mod serdes;
pub mod tlock;
pub mod tlock_err;

mod dem;
mod hash_to_field;
mod prng;

#[cfg(test)]
mod test;

/// Group where beacon signatures and identity hashes live (BLS G1).
//
// Written in the fully-resolved `Projective<g1::Config>` form rather than the
// `ark_bls12_381::G1Projective` alias: the latter expands to the associated-type
// projection `Projective<<Config as Bls12Config>::G1Config>`, which the coherence
// checker fails to distinguish from the G2 projection, producing a spurious
// overlap between the G1 and G2 trait impls. This names the identical type.
pub type TlockG1 = ark_ec::short_weierstrass::Projective<ark_bls12_381::g1::Config>;

/// Group where master public keys and IBE ephemerals live (BLS G2).
pub type TlockG2 = ark_ec::short_weierstrass::Projective<ark_bls12_381::g2::Config>;

/// The scalar field shared by both groups.
pub type TlockScalar = ark_bls12_381::Fr;

pub use ciphertext::Ciphertext;
pub use decryption_key::DecryptionKey;
pub use identity::Identity;
pub use public_key::MasterPublicKey;
pub use serdes::TlockSerDes;
pub use tlock::{tld, tld_with_secret, tle};
