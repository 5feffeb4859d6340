//! Deterministic shot-type allocation.
//!
//! Given a weight table over shot-type labels, a scene's narrative context
//! and a target shot count, this crate produces an ordered shot sequence
//! whose label frequencies match the bias-adjusted weight distribution. The
//! whole pipeline is pure and synchronous: identical inputs always yield the
//! identical sequence, so planning is reproducible across repeated calls.
//!
//! The stages are independently usable:
//! 1. [`WeightTable::normalized`] - drop non-positive weights, rescale to 1.0
//! 2. [`WeightTable::biased`] - boost tight or establishing framings by
//!    narrative weight, then re-normalize
//! 3. [`allocate::apportion`] - largest-remainder integer apportionment
//! 4. [`allocate::sequence`] - round-robin interleaving by priority

pub mod allocate;
pub mod error;
pub mod weights;

pub use allocate::{allocate, allocate_counts, AllocationResult};
pub use error::{AllocationError, ShotResult};
pub use weights::WeightTable;
