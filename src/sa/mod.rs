//! Simulated annealing over the compact QUBO graph.
//!
//! Single-solution trajectory search: random single-bit trial flips accepted
//! by the Metropolis criterion under a geometrically decreasing temperature.
//! One state snapshot is emitted after every cooling step, and a final one
//! when the temperature crosses the stop threshold.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner};
pub use types::StepReport;
