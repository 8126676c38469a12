//! The beacon's long term public key.

use crate::membership::MembershipTesting;
use crate::param::{CIPHERSUITE, PK_LEN, VALID_CIPHERSUITE};
use crate::serdes::TlockSerDes;
use crate::tlock_err::*;
use crate::TlockG2;
use ark_ff::Zero;

/// The master public key of a timelock context is the beacon's long term
/// public key: a wrapper of a `TlockG2` element together with the
/// ciphersuite it belongs to. Supplied once by the caller and used only for
/// encryption.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterPublicKey {
    /// ciphersuite id
    ciphersuite: u8,
    /// the actual public key element
    pk: TlockG2,
}

impl MasterPublicKey {
    /// Constructing a MasterPublicKey object.
    pub fn construct(ciphersuite: u8, pk: TlockG2) -> Self {
        MasterPublicKey { ciphersuite, pk }
    }

    /// Parse a key from its 96 byte compressed encoding, the form beacon
    /// networks publish. Rejects malformed encodings, points outside the
    /// prime order subgroup and the point at infinity, before the element
    /// reaches any arithmetic.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        if bytes.len() != PK_LEN {
            return Err(ERR_DESERIAL.to_owned());
        }
        let mut reader = bytes;
        let pk = <TlockG2 as TlockSerDes>::deserialize(&mut reader)
            .map_err(|e| e.to_string())?;
        Ok(MasterPublicKey {
            ciphersuite: CIPHERSUITE,
            pk,
        })
    }

    /// Parse a key from the hex encoding beacon APIs return.
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let bytes = hex::decode(s).map_err(|_| ERR_HEX.to_owned())?;
        Self::from_bytes(&bytes)
    }

    /// The compressed encoding of the wrapped element.
    pub fn to_bytes(&self) -> Result<Vec<u8>, String> {
        let mut buf = Vec::with_capacity(PK_LEN);
        self.pk
            .serialize(&mut buf)
            .map_err(|_| ERR_SERIAL.to_owned())?;
        Ok(buf)
    }

    /// Returns the public key element this structure contains.
    pub fn pk(&self) -> TlockG2 {
        self.pk
    }

    /// Returns the ciphersuite of the key.
    pub fn ciphersuite(&self) -> u8 {
        self.ciphersuite
    }

    /// Re-check the wrapped element; a directly constructed key may carry an
    /// invalid ciphersuite or a point outside the prime order subgroup.
    pub fn validate(&self) -> bool {
        VALID_CIPHERSUITE.contains(&self.ciphersuite)
            && !self.pk.is_zero()
            && self.pk.is_in_prime_group()
    }
}
