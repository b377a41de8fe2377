//! Deterministic decision rules.
//!
//! Pure functions of their explicit inputs. Nothing here reads the clock,
//! logs, or holds state between calls.

pub mod eligibility;
pub mod proposal_status;
pub mod voting_power;
