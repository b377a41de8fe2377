//! Wire-shaped inputs and candid-friendly outputs.
//!
//! Everything a governance query hands us is untrusted. The `Raw*` types
//! accept the shapes seen in practice and are normalized exactly once, here,
//! into `model` snapshots.

pub mod dashboard;
pub mod error;
pub mod neuron;
pub mod params;
pub mod proposal;

use crate::{
    ThisError,
    types::{NumberError, RawOptNumber},
};

///
/// PRELUDE
///

pub mod prelude {
    pub use crate::ids::GoverningBodyId;
    pub use crate::types::{
        NeuronId, Principal, RawNeuronId, RawNumber, RawOptNumber, RawPrincipal,
    };
    pub use candid::CandidType;
    pub use serde::{Deserialize, Serialize};
}

///
/// NormalizeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum NormalizeError {
    #[error("malformed field '{field}': {source}")]
    Malformed {
        field: &'static str,
        source: NumberError,
    },
}

/// Unsigned field that defaults to 0 when absent, malformed, negative or
/// wider than 64 bits.
pub(crate) fn u64_or_zero(raw: Option<&RawOptNumber>) -> u64 {
    match raw.and_then(RawOptNumber::get) {
        Some(value) => value.to_u64().unwrap_or(0),
        None => 0,
    }
}

/// Optional unsigned field: absent stays `None`, malformed is an error.
pub(crate) fn opt_u64(
    field: &'static str,
    raw: Option<&RawOptNumber>,
) -> Result<Option<u64>, NormalizeError> {
    raw.and_then(RawOptNumber::get)
        .map(|value| {
            value
                .to_u64()
                .map_err(|source| NormalizeError::Malformed { field, source })
        })
        .transpose()
}

///
/// TESTS
///
