//! Ciphersuite registry and serialized sizes for the tlock wire format.

/// Ciphersuite 0x01: BLS12-381 with signatures in G1 and public keys in G2
/// (the drand quicknet orientation), RFC 9380 hash-to-curve for identities,
/// HKDF-SHA256 key derivation and an AES-256-GCM body.
///
/// The ciphersuite byte doubles as the wire format version: any change to the
/// curve suite, the KDF or the body cipher allocates a new byte.
pub const CIPHERSUITE: u8 = 0x01;

/// Ciphersuite identifiers this build understands.
pub const VALID_CIPHERSUITE: [u8; 1] = [CIPHERSUITE];

/// Compressed size of a master public key element (G2).
pub const PK_LEN: usize = 96;

/// Compressed size of a beacon signature, a.k.a. a decryption key (G1).
pub const SIG_LEN: usize = 48;

/// Length of the caller's ephemeral secret and of the symmetric seed the IBE
/// header transports.
pub const SEED_LEN: usize = 32;

/// AES-256-GCM nonce length.
pub const NONCE_LEN: usize = 12;

/// AES-256-GCM authentication tag length; the tag sits in the last bytes of
/// the ciphertext body.
pub const TAG_LEN: usize = 16;

/// Serialized length of the IBE header: `| U | V | W |`.
pub const HEADER_LEN: usize = PK_LEN + SEED_LEN + SEED_LEN;

/// Bytes of framing in front of the body: ciphersuite, round, IBE header,
/// nonce and the body length prefix.
pub const CT_PREFIX_LEN: usize = 1 + 8 + HEADER_LEN + NONCE_LEN + 4;
