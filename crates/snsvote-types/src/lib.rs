//! Shared snsvote boundary types.
//! Centralizes the loosely typed shapes handed to us by governance queries and
//! the exact-integer normalization applied to them before any arithmetic.

mod e8s;
mod neuron_id;
mod number;
mod principal;

pub use e8s::*;
pub use neuron_id::*;
pub use number::*;
pub use principal::*;

pub use candid::Principal;
