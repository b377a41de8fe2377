//! Composition over the policy engines. This is the only layer that logs.

pub mod dashboard;
pub mod proposal;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        ids::GoverningBodyId,
        log,
        log::Topic,
        model::{GovernanceParameters, NeuronSnapshot, ProposalSnapshot},
        types::Principal,
    };
}
