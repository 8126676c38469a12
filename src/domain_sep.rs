//! This module lists the domain separators in tlock.

/// Ciphersuite ID of the quicknet beacon scheme
/// (`bls-unchained-g1-rfc9380`), used verbatim as the RFC 9380 domain
/// separation tag so that identities hash to the exact G1 points the beacon
/// signs. Protocol constant; changing it breaks beacon interoperability.
pub const DST_G1: &[u8] = b"BLS_SIG_BLS12381G1_XMD:SHA-256_SSWU_RO_NUL_";

// salt for extracting the prng seed from an ephemeral secret
pub const DOM_SEP_PRNG_SALT: &str = "tlock prng seed extract";

// info strings for the values drawn from the prng during encryption
pub const DOM_SEP_SEED: &str = "tlock symmetric seed";
pub const DOM_SEP_BLIND: &str = "tlock ibe blinding factor";
pub const DOM_SEP_NONCE: &str = "tlock dem nonce";

// info for deriving the body cipher key from the symmetric seed
pub const DOM_SEP_DEM_KEY: &str = "tlock dem key";
