//! # Breeding
//!
//! Everything that creates new genes from survivors: the middle-window
//! [`crossover`], the per-bit [`mutate`] operator and the [`Reproduction`]
//! step that refills a pool after selection.
pub mod crossover;
pub mod mutation;
pub mod reproduction;

pub use crossover::{crossover, middle_window};
pub use mutation::{mutate, MutationRate};
pub use reproduction::{pick_parents, Reproduction};
