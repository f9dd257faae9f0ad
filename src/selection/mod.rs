//! # Survivor Selection
//!
//! Decides which genes of a generation survive into the next one. The only
//! scheme is [`InsertionSelection`]: feasible genes ranked by descending
//! value, capped at a maximum survivor count.
pub mod insertion;

pub use insertion::InsertionSelection;
