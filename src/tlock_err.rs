/// A list of error messages.

pub const ERR_CIPHERSUITE: &str = "Invalid ciphersuite ID";
pub const ERR_SERIAL: &str = "Fail to convert the element to a blob";
pub const ERR_DESERIAL: &str = "Fail to convert a blob to the element";
pub const ERR_HEX: &str = "Fail to decode the hex string";
pub const ERR_INFINITY: &str = "The point at infinity is not valid here";
pub const ERR_MEMBERSHIP: &str = "The point is not in the prime order subgroup";
pub const ERR_PUBLIC_KEY: &str = "Invalid master public key";
pub const ERR_HASH_TO_CURVE: &str = "Fail to hash the identity to the curve";
pub const ERR_ENCRYPTION: &str = "Encryption failed";
pub const ERR_DECRYPTION: &str = "Decryption failed";
pub const ERR_BODY_LEN: &str = "The ciphertext body length is inconsistent";
pub const ERR_TRAILING: &str = "Unexpected bytes after the ciphertext";
