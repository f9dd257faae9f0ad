pub mod breeding;
pub mod coefficients;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod gene;
pub mod pool;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use coefficients::{CoefficientTable, Item};
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{solve, Solution, Solver, SolverOptions};
pub use gene::Gene;
pub use pool::GenePool;
pub use rng::{RandomNumberGenerator, RandomSource};
