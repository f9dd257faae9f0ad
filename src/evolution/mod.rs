pub mod launcher;
pub mod options;

pub use launcher::{best_feasible, solve, Solution, Solver};
pub use options::{LogLevel, SolverOptions, SolverOptionsBuilder};
