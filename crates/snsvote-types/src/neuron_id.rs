//!
//! Neuron identifiers. SNS neuron ids are opaque byte strings; ballots are
//! keyed by their lowercase hex encoding, so that is the canonical form here.
//!

use candid::CandidType;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// NeuronId
/// Lowercase hex-encoded neuron id.
///

#[derive(
    CandidType, Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct NeuronId(String);

impl NeuronId {
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Parse a hex id, normalizing case. Returns `None` if it is empty or not
    /// valid hex.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let bytes = hex::decode(s.trim()).ok()?;
        if bytes.is_empty() {
            return None;
        }

        Some(Self::from_bytes(&bytes))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NeuronId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

///
/// RawNeuronId
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawNeuronId {
    Hex(String),
    Bytes(Vec<u8>),
    Wrapped { id: Vec<u8> },
}

impl RawNeuronId {
    #[must_use]
    pub fn normalize(&self) -> Option<NeuronId> {
        match self {
            Self::Hex(s) => NeuronId::from_hex(s),
            Self::Bytes(bytes) | Self::Wrapped { id: bytes } if bytes.is_empty() => None,
            Self::Bytes(bytes) | Self::Wrapped { id: bytes } => Some(NeuronId::from_bytes(bytes)),
        }
    }
}

impl From<&NeuronId> for RawNeuronId {
    fn from(id: &NeuronId) -> Self {
        Self::Hex(id.0.clone())
    }
}

///
/// TESTS
///
