//! # Error Types
//!
//! This module defines the error type shared by every stage of the meal
//! solver. Each variant corresponds to a failure the evolution loop can
//! surface to its caller instead of producing a fabricated result.
//!
//! ## Examples
//!
//! Matching on the outcome of a run:
//!
//! ```rust
//! use genmeal::error::{GeneticError, Result};
//!
//! fn report(outcome: Result<f64>) -> String {
//!     match outcome {
//!         Ok(value) => format!("best meal scores {}", value),
//!         Err(GeneticError::NoFeasibleSolution) => "no meal fits the calorie limit".to_string(),
//!         Err(e) => format!("run aborted: {}", e),
//!     }
//! }
//!
//! assert_eq!(report(Err(GeneticError::NoFeasibleSolution)), "no meal fits the calorie limit");
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genmeal::error::{GeneticError, OptionExt};
//!
//! fn first_calorie_count(calories: &[f64]) -> genmeal::error::Result<f64> {
//!     calories.first().copied().ok_or_else_genetic(|| {
//!         GeneticError::Configuration("empty coefficient table".to_string())
//!     })
//! }
//!
//! assert!(first_calorie_count(&[]).is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while evolving a meal.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Reproduction needs at least two surviving genes to pick distinct parents.
    #[error("Need at least two survivors to continue, found {found}")]
    InsufficientSurvivors { found: usize },

    /// No gene in the final population stays within the calorie limit.
    #[error("No feasible solution: every gene in the final population exceeds the calorie limit")]
    NoFeasibleSolution,

    /// A gene and the data it is evaluated against disagree on length.
    #[error("Length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A gene holds something other than 0 or 1.
    #[error("Invalid gene: {0}")]
    InvalidGene(String),

    /// A value function scored a gene as NaN, which cannot be ranked.
    #[error("Value function returned NaN for gene {gene}")]
    NanValue { gene: String },

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for meal solver operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use genmeal::error::ResultExt;
///
/// fn parse_limit(raw: &str) -> genmeal::error::Result<f64> {
///     raw.parse::<f64>().context("Failed to parse calorie limit")
/// }
///
/// assert!(parse_limit("lots").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
