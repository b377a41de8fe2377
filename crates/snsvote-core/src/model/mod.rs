//! Normalized, read-only snapshots consumed by the engines.
//!
//! Snapshots are produced once at the boundary (see `dto`) and never mutated
//! by the engines.

mod neuron;
mod params;
mod proposal;

pub use neuron::*;
pub use params::*;
pub use proposal::*;
