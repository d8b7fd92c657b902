mod config;
mod core;
mod errors;

pub use config::SolverConfig;
pub use core::{SolutionSet, Solver};
pub use errors::SolverError;
