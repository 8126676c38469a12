//! The composite tlock ciphertext.

use crate::ibe::IbeCiphertext;
use crate::param::{CT_PREFIX_LEN, NONCE_LEN, TAG_LEN};
use crate::serdes::TlockSerDes;
use crate::tlock_err::*;

/// A tlock ciphertext is fully self-describing: decryption needs nothing
/// beyond it and the beacon signature for the round it embeds.
///
/// * the ciphersuite byte the blob was produced under
/// * the beacon round the message is locked to
/// * the IBE header transporting the symmetric seed
/// * the body cipher nonce
/// * the body (AES-GCM ciphertext with its tag in the last 16 bytes)
#[derive(Debug, Clone, PartialEq)]
pub struct Ciphertext {
    ciphersuite: u8,
    round: u64,
    header: IbeCiphertext,
    nonce: [u8; NONCE_LEN],
    body: Vec<u8>,
}

impl Ciphertext {
    /// Constructing a Ciphertext object.
    pub(crate) fn construct(
        ciphersuite: u8,
        round: u64,
        header: IbeCiphertext,
        nonce: [u8; NONCE_LEN],
        body: Vec<u8>,
    ) -> Self {
        Ciphertext {
            ciphersuite,
            round,
            header,
            nonce,
            body,
        }
    }

    /// Returns the ciphersuite of the ciphertext.
    pub fn ciphersuite(&self) -> u8 {
        self.ciphersuite
    }

    /// Returns the beacon round this ciphertext is locked to; the caller
    /// fetches the signature for exactly this round to decrypt.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Returns the IBE header.
    pub fn header(&self) -> &IbeCiphertext {
        &self.header
    }

    /// Returns the body cipher nonce.
    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    /// Returns the encrypted body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// This function returns the storage requirement for this ciphertext.
    pub fn size(&self) -> usize {
        CT_PREFIX_LEN + self.body.len()
    }

    /// Storage requirement for a ciphertext over a message of the given
    /// length, useful for pre-allocating buffers before encrypting.
    pub fn estimate_size(message_len: usize) -> usize {
        CT_PREFIX_LEN + message_len + TAG_LEN
    }

    /// Serialize into a fresh blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, String> {
        let mut buf = Vec::with_capacity(self.size());
        self.serialize(&mut buf).map_err(io_err_msg)?;
        Ok(buf)
    }

    /// Parse a blob that contains exactly one ciphertext; trailing bytes are
    /// rejected, as is everything `deserialize` rejects.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        let mut reader = bytes;
        let ct = <Self as TlockSerDes>::deserialize(&mut reader).map_err(io_err_msg)?;
        if !reader.is_empty() {
            return Err(ERR_TRAILING.to_owned());
        }
        Ok(ct)
    }
}

/// Flatten an io error into the message constants the crypto layer uses;
/// running out of input is a plain deserialization failure.
fn io_err_msg(e: std::io::Error) -> String {
    if e.kind() == std::io::ErrorKind::UnexpectedEof {
        ERR_DESERIAL.to_owned()
    } else {
        e.to_string()
    }
}
