//! The random oracles of the FullIdent scheme: H2 maps target group elements
//! to byte masks, H3 maps byte strings to scalars, H4 masks byte strings.

use crate::TlockScalar;
use ark_ff::PrimeField;
use ark_serialize::CanonicalSerialize;
use sha2::{Digest, Sha256};

/// sha256 hasher
pub fn sha256(b: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(b);
    hasher.finalize().to_vec()
}

/// H_2: a map from a (target) group element to {0, 1}^32, by hashing the
/// compressed serialization of the element.
pub fn h2<G: CanonicalSerialize>(g: G) -> Vec<u8> {
    let mut out = Vec::new();
    g.serialize_compressed(&mut out)
        .expect("serializing into a vec cannot fail");
    sha256(&out)
}

/// H_3: {0, 1}^n x {0, 1}^m -> Z_p, big-endian reduction of sha256(a | b).
pub fn h3(a: &[u8], b: &[u8]) -> TlockScalar {
    let mut input = Vec::new();
    input.extend_from_slice(a);
    input.extend_from_slice(b);
    let hash = sha256(&input);
    TlockScalar::from_be_bytes_mod_order(&hash)
}

/// H_4: {0, 1}^n -> {0, 1}^n for n <= 32, truncated sha256.
pub fn h4(a: &[u8]) -> Vec<u8> {
    let o = sha256(a);
    o[..a.len()].to_vec()
}

/// Byte-wise xor of two equal-length strings.
pub fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}
