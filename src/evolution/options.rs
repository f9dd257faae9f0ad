//! # SolverOptions
//!
//! The `SolverOptions` struct holds the run parameters of the meal solver: how
//! many generations to evolve, the calorie limit that decides feasibility, how
//! many genes survive each selection, how likely mutation is, and how much to
//! log.
//!
//! ## Example
//!
//! ```rust
//! use genmeal::evolution::options::{LogLevel, SolverOptions};
//! use genmeal::breeding::MutationRate;
//!
//! // Create a new SolverOptions instance with custom parameters
//! let custom_options = SolverOptions::new(200, 1800.0, 12, LogLevel::Minimal);
//!
//! // Or through the builder
//! let built = SolverOptions::builder()
//!     .num_generations(50)
//!     .max_calories(650.0)
//!     .max_survivors(6)
//!     .mutation_rate(MutationRate::OneIn(20))
//!     .build();
//!
//! assert!(custom_options.validate().is_ok());
//! assert!(built.validate().is_ok());
//! ```

use crate::breeding::MutationRate;
use crate::error::{GeneticError, Result};

/// How much the solver reports through `tracing` while it runs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// One `debug` event per survivor on top of `Minimal`.
    Verbose,
    /// One `info` event per generation.
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct SolverOptions {
    num_generations: usize,
    /// Meals above this many calories are infeasible.
    max_calories: f64,
    /// Genes kept by each selection; the rest of the pool is bred anew.
    max_survivors: usize,
    mutation_rate: MutationRate,
    log_level: LogLevel,
}

impl SolverOptions {
    pub fn new(
        num_generations: usize,
        max_calories: f64,
        max_survivors: usize,
        log_level: LogLevel,
    ) -> Self {
        Self {
            num_generations,
            max_calories,
            max_survivors,
            mutation_rate: MutationRate::GeneLength,
            log_level,
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_max_calories(&self) -> f64 {
        self.max_calories
    }

    pub fn get_max_survivors(&self) -> usize {
        self.max_survivors
    }

    pub fn get_mutation_rate(&self) -> MutationRate {
        self.mutation_rate
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the calorie limit.
    pub fn set_max_calories(&mut self, max_calories: f64) {
        self.max_calories = max_calories;
    }

    /// Sets the number of survivors per generation.
    pub fn set_max_survivors(&mut self, max_survivors: usize) {
        self.max_survivors = max_survivors;
    }

    /// Sets the mutation rate.
    pub fn set_mutation_rate(&mut self, mutation_rate: MutationRate) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks the options before a run.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if fewer than two survivors are
    /// allowed, the calorie limit is negative or not finite, or the mutation
    /// denominator is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_survivors < 2 {
            return Err(GeneticError::Configuration(format!(
                "Max survivors must be at least 2, got {}",
                self.max_survivors
            )));
        }

        if !self.max_calories.is_finite() || self.max_calories < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Max calories must be finite and non-negative, got {}",
                self.max_calories
            )));
        }

        if self.mutation_rate == MutationRate::OneIn(0) {
            return Err(GeneticError::Configuration(
                "Mutation denominator cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns a builder for creating a `SolverOptions` instance.
    pub fn builder() -> SolverOptionsBuilder {
        SolverOptionsBuilder::default()
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            num_generations: 100,
            max_calories: 2000.0,
            max_survivors: 10,
            mutation_rate: MutationRate::GeneLength,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `SolverOptions`.
///
/// Unset fields fall back to the values of `SolverOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct SolverOptionsBuilder {
    num_generations: Option<usize>,
    max_calories: Option<f64>,
    max_survivors: Option<usize>,
    mutation_rate: Option<MutationRate>,
    log_level: Option<LogLevel>,
}

impl SolverOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the calorie limit.
    pub fn max_calories(mut self, value: f64) -> Self {
        self.max_calories = Some(value);
        self
    }

    /// Sets the number of survivors per generation.
    pub fn max_survivors(mut self, value: usize) -> Self {
        self.max_survivors = Some(value);
        self
    }

    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: MutationRate) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `SolverOptions` instance.
    pub fn build(self) -> SolverOptions {
        let defaults = SolverOptions::default();
        SolverOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            max_calories: self.max_calories.unwrap_or(defaults.max_calories),
            max_survivors: self.max_survivors.unwrap_or(defaults.max_survivors),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}
