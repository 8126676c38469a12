//! Round-to-identity derivation and hashing of identities onto the curve.

use crate::decryption_key::DecryptionKey;
use crate::domain_sep::DST_G1;
use crate::hash_to_field::sha256;
use crate::param::CIPHERSUITE;
use crate::tlock_err::*;
use crate::{TlockG1, TlockScalar};
use ark_bls12_381::g1;
use ark_ec::hashing::curve_maps::wb::WBMap;
use ark_ec::hashing::map_to_curve_hasher::MapToCurveBasedHasher;
use ark_ec::hashing::HashToCurve;
use ark_ec::AffineRepr;
use ark_ff::field_hashers::DefaultFieldHasher;
use sha2::Sha256;

/// An identity a message can be encrypted towards: the 32 byte digest the
/// beacon signs once the corresponding round elapses. Derived per call,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity([u8; 32]);

impl Identity {
    /// The identity of a beacon round: sha256 of the round number encoded as
    /// 8 big-endian bytes. This matches the message convention of unchained
    /// drand beacons, so both sides derive the same G1 point independently.
    pub fn from_round(round: u64) -> Self {
        let digest = sha256(&round.to_be_bytes());
        let mut id = [0u8; 32];
        id.copy_from_slice(&digest);
        Self(id)
    }

    /// Construct an identity from an arbitrary 32 byte digest, for beacons
    /// that sign something other than a round counter.
    pub fn new(digest: [u8; 32]) -> Self {
        Self(digest)
    }

    /// The identity digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hash the identity into the signature group with the RFC 9380
    /// simplified SWU map for the quicknet ciphersuite. Both the encryptor
    /// and the beacon must compute this exact point.
    pub fn to_curve(&self) -> Result<TlockG1, String> {
        let hasher = MapToCurveBasedHasher::<
            TlockG1,
            DefaultFieldHasher<Sha256, 128>,
            WBMap<g1::Config>,
        >::new(DST_G1)
        .map_err(|_| ERR_HASH_TO_CURVE.to_owned())?;
        let p = hasher
            .hash(&self.0)
            .map_err(|_| ERR_HASH_TO_CURVE.to_owned())?;
        Ok(p.into_group())
    }

    /// The IBE extract function: the decryption key for this identity under
    /// a master scalar. A beacon computes exactly this when it signs, so the
    /// function is only needed by self-contained deployments and tests.
    pub fn extract(&self, master: TlockScalar) -> Result<DecryptionKey, String> {
        Ok(DecryptionKey::construct(CIPHERSUITE, self.to_curve()? * master))
    }
}
