//! Sparse-graph QUBO solver based on simulated annealing.
//!
//! Given a sparse map of linear and pairwise coefficients over binary
//! variables, the solver searches for an assignment minimizing the quadratic
//! energy function. Two components:
//!
//! - **Graph builder** ([`graph`]): converts the coefficient map into a
//!   compact compressed-sparse-row representation — dense variable indices,
//!   a linear-bias array, and flattened per-variable neighbor lists.
//! - **Annealer** ([`sa`]): the temperature-decreasing Metropolis loop over
//!   the compact graph, emitting a state snapshot after every cooling step.
//!
//! The [`solver`] module ties them together: [`solver::QuboSolver`] builds
//! the graph, moves it onto a dedicated worker thread, and hands back a
//! [`solver::SolveHandle`] that streams progress and resolves to the final
//! assignment keyed by the caller's original variable ids.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use qubo_anneal::sa::AnnealConfig;
//! use qubo_anneal::solver::QuboSolver;
//!
//! // Two variables that each prefer 1, penalized for both being 1.
//! let mut qubo = HashMap::new();
//! qubo.insert("0".to_string(), -1.0);
//! qubo.insert("1".to_string(), -1.0);
//! qubo.insert("0,1".to_string(), 2.0);
//!
//! let config = AnnealConfig::default()
//!     .with_sweeps_per_temperature(200)
//!     .with_seed(7);
//! let handle = QuboSolver::new(qubo).with_config(config).solve().unwrap();
//! let assignment = handle.wait().unwrap();
//! assert_eq!(assignment.len(), 2);
//! ```

pub mod error;
pub mod graph;
pub mod sa;
pub mod solver;
