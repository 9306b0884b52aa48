//! Compact sparse-graph representation of a QUBO problem.
//!
//! A QUBO instance arrives as a sparse map from coefficient keys to weights.
//! This module re-indexes the referenced variables to dense integers and lays
//! the couplings out in compressed-sparse-row form, so that the annealer's
//! inner loop touches only the neighbors a variable actually has instead of
//! an N×N matrix row.

mod builder;
mod types;

pub use types::QuboGraph;
