//! Serialization support for tlock structures.

use crate::ciphertext::Ciphertext;
use crate::ibe::IbeCiphertext;
use crate::param::{NONCE_LEN, PK_LEN, SEED_LEN, SIG_LEN, TAG_LEN, VALID_CIPHERSUITE};
use crate::tlock_err::*;
use crate::{TlockG1, TlockG2};
use ark_ff::Zero;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use std::io::{Error, ErrorKind, Read, Result, Write};

/// Serialization support for tlock structures.
///
/// Group elements always travel in their compressed encoding (the encoding
/// beacon networks publish keys and signatures in). Deserialization
/// validates the curve equation and the prime order subgroup and rejects
/// the point at infinity, before anything downstream touches the element.
pub trait TlockSerDes: Sized {
    /// Serialize a struct to a writer.
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()>;

    /// Deserialize a struct from a reader.
    fn deserialize<R: Read>(reader: &mut R) -> Result<Self>;
}

impl TlockSerDes for TlockG1 {
    /// Convert a TlockG1 point to a 48 byte compressed blob.
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut buf = Vec::with_capacity(SIG_LEN);
        CanonicalSerialize::serialize_compressed(self, &mut buf)
            .map_err(|_| Error::new(ErrorKind::InvalidData, ERR_SERIAL))?;
        writer.write_all(&buf)
    }

    /// Deserialize a TlockG1 element from a blob.
    /// Returns an error if the bytes are not a valid compressed point, the
    /// point is outside the prime order subgroup, or it is the infinity.
    fn deserialize<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; SIG_LEN];
        reader.read_exact(&mut buf)?;
        let g = TlockG1::deserialize_compressed(&buf[..])
            .map_err(|_| Error::new(ErrorKind::InvalidData, ERR_DESERIAL))?;
        if g.is_zero() {
            return Err(Error::new(ErrorKind::InvalidData, ERR_INFINITY));
        }
        Ok(g)
    }
}

impl TlockSerDes for TlockG2 {
    /// Convert a TlockG2 point to a 96 byte compressed blob.
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut buf = Vec::with_capacity(PK_LEN);
        CanonicalSerialize::serialize_compressed(self, &mut buf)
            .map_err(|_| Error::new(ErrorKind::InvalidData, ERR_SERIAL))?;
        writer.write_all(&buf)
    }

    /// Deserialize a TlockG2 element from a blob.
    /// Returns an error if the bytes are not a valid compressed point, the
    /// point is outside the prime order subgroup, or it is the infinity.
    fn deserialize<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; PK_LEN];
        reader.read_exact(&mut buf)?;
        let g = TlockG2::deserialize_compressed(&buf[..])
            .map_err(|_| Error::new(ErrorKind::InvalidData, ERR_DESERIAL))?;
        if g.is_zero() {
            return Err(Error::new(ErrorKind::InvalidData, ERR_INFINITY));
        }
        Ok(g)
    }
}

impl TlockSerDes for IbeCiphertext {
    /// Convert an IBE header into a blob:
    ///
    /// `| U | V | W |` => bytes
    ///
    /// where U is a 96 byte compressed G2 point and V and W are 32 bytes
    /// each.
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.v().len() != SEED_LEN || self.w().len() != SEED_LEN {
            return Err(Error::new(ErrorKind::InvalidData, ERR_SERIAL));
        }
        self.u().serialize(writer)?;
        writer.write_all(self.v())?;
        writer.write_all(self.w())
    }

    /// Convert a blob into an IBE header:
    ///
    /// bytes => `| U | V | W |`
    fn deserialize<R: Read>(reader: &mut R) -> Result<Self> {
        let u = TlockG2::deserialize(reader)?;
        let mut v = [0u8; SEED_LEN];
        reader.read_exact(&mut v)?;
        let mut w = [0u8; SEED_LEN];
        reader.read_exact(&mut w)?;
        Ok(IbeCiphertext::construct(u, v.to_vec(), w.to_vec()))
    }
}

impl TlockSerDes for Ciphertext {
    /// Convert a ciphertext into a blob:
    ///
    /// `| ciphersuite | round | U | V | W | nonce | body_len | body |` => bytes
    ///
    /// where ...
    /// * ciphersuite is 1 byte
    /// * round is 8 bytes, big-endian (the encoding the beacon hashes)
    /// * the IBE header is 160 bytes per its own layout
    /// * nonce is 12 bytes
    /// * body_len is 4 bytes, big-endian
    /// * body is body_len bytes, at least the 16 byte tag
    ///
    /// Returns an error if the ciphersuite id is invalid or the body is
    /// shorter than a tag or longer than the length prefix can express.
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        // check the cipher suite id
        if !VALID_CIPHERSUITE.contains(&self.ciphersuite()) {
            return Err(Error::new(ErrorKind::InvalidData, ERR_CIPHERSUITE));
        }
        if self.body().len() < TAG_LEN || self.body().len() > u32::MAX as usize {
            return Err(Error::new(ErrorKind::InvalidData, ERR_BODY_LEN));
        }

        // first byte is the ciphersuite id,
        // the next 8 bytes store the round
        let mut buf: Vec<u8> = vec![self.ciphersuite()];
        buf.extend_from_slice(&self.round().to_be_bytes());

        // the next chunk of data stores the IBE header
        self.header().serialize(&mut buf)?;

        // followed by the nonce and the length-prefixed body
        buf.extend_from_slice(self.nonce());
        buf.extend_from_slice(&(self.body().len() as u32).to_be_bytes());
        buf.extend_from_slice(self.body());

        // format the output
        writer.write_all(&buf)
    }

    /// Convert a blob into a ciphertext:
    ///
    /// bytes => `| ciphersuite | round | U | V | W | nonce | body_len | body |`
    ///
    /// Returns an error if the ciphersuite id is unknown (distinct from
    /// corruption, so callers can tell "produced by a newer format" from
    /// "damaged"), if any field is malformed, or if the input runs out
    /// before body_len bytes of body.
    fn deserialize<R: Read>(reader: &mut R) -> Result<Self> {
        // constants stores the ciphersuite id
        let mut constants: [u8; 1] = [0u8; 1];
        reader.read_exact(&mut constants)?;

        // check the ciphersuite id in the blob
        if !VALID_CIPHERSUITE.contains(&constants[0]) {
            return Err(Error::new(ErrorKind::InvalidData, ERR_CIPHERSUITE));
        }

        let mut round: [u8; 8] = [0u8; 8];
        reader.read_exact(&mut round)?;
        let round = u64::from_be_bytes(round);

        // read into the IBE header
        let header = IbeCiphertext::deserialize(reader)?;

        let mut nonce = [0u8; NONCE_LEN];
        reader.read_exact(&mut nonce)?;

        let mut body_len: [u8; 4] = [0u8; 4];
        reader.read_exact(&mut body_len)?;
        let body_len = u32::from_be_bytes(body_len);
        if (body_len as usize) < TAG_LEN {
            return Err(Error::new(ErrorKind::InvalidData, ERR_BODY_LEN));
        }

        // bounded read: a forged length prefix must not drive allocation
        // past what the input actually contains
        let mut body = Vec::new();
        reader
            .by_ref()
            .take(u64::from(body_len))
            .read_to_end(&mut body)?;
        if body.len() != body_len as usize {
            return Err(Error::new(ErrorKind::InvalidData, ERR_BODY_LEN));
        }

        // finished
        Ok(Ciphertext::construct(
            constants[0],
            round,
            header,
            nonce,
            body,
        ))
    }
}
