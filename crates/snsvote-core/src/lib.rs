//! Core snsvote library: voting power, proposal voting status and voter
//! eligibility for SNS governance dashboards.
//!
//! ## Layering
//!
//! - `dto/` holds raw, wire-shaped inputs and the single normalization step
//!   that turns them into `model/` snapshots, plus candid-friendly outputs.
//! - `model/` owns the normalized, read-only snapshots.
//! - `domain/policy/` owns the deterministic engines. Pure: no I/O, no logging.
//! - `workflow/` composes the engines per governing body and logs.
//! - `config/` parses and validates the TOML configuration.
//!
//! The default flow is: dto → model → workflow → policy.

pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod ids;
pub mod log;
pub mod model;
pub mod time;
pub mod workflow;

pub use ::snsvote_types as types;
pub use error::Error;

pub(crate) use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::ConfigModel,
        domain::policy::{
            eligibility::{Eligibility, EligibilityPolicy, resolve_eligibility},
            proposal_status::{
                ProposalStatusPolicy, StatusLabel, classify_status, is_accepting_votes,
                voting_deadline,
            },
            voting_power::{VotingPowerPolicy, compute_voting_power},
        },
        ids::GoverningBodyId,
        model::{
            DissolveState, GovernanceParameters, NeuronSnapshot, ProposalSnapshot, RewardStatus,
        },
        types::{E8s, NeuronId, Principal},
        workflow::{dashboard::DashboardWorkflow, proposal::ProposalStatusWorkflow},
    };
}

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
