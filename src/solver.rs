//! Background-worker solve orchestration.
//!
//! [`QuboSolver`] validates the configuration, builds the compact graph, and
//! moves it onto a dedicated worker thread running the annealing loop. The
//! returned [`SolveHandle`] consumes the worker's report stream: one progress
//! callback per cooling step, then resolution to the final assignment keyed
//! by the caller's raw variable ids.

use crate::error::Error;
use crate::graph::QuboGraph;
use crate::sa::{AnnealConfig, AnnealRunner, StepReport};
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

/// A variable assignment keyed by raw variable id, values 0 or 1.
pub type Assignment = HashMap<i64, u8>;

/// One-shot QUBO solver.
///
/// Holds the coefficient map and annealing parameters; each [`solve`] call
/// is fully self-contained (own graph, own state vector, own worker), so
/// independent solves may run concurrently.
///
/// [`solve`]: QuboSolver::solve
#[derive(Debug, Clone)]
pub struct QuboSolver {
    coefficients: HashMap<String, f64>,
    config: AnnealConfig,
}

impl QuboSolver {
    /// Creates a solver over the given coefficient map with default
    /// annealing parameters.
    pub fn new(coefficients: HashMap<String, f64>) -> Self {
        Self {
            coefficients,
            config: AnnealConfig::default(),
        }
    }

    /// Replaces the annealing parameters.
    pub fn with_config(mut self, config: AnnealConfig) -> Self {
        self.config = config;
        self
    }

    /// Starts an annealing run on a dedicated worker thread.
    ///
    /// Fails fast, before any thread is spawned, on invalid parameters
    /// ([`Error::InvalidConfig`]) or an unparsable coefficient map
    /// ([`Error::MalformedKey`], [`Error::NonFiniteWeight`]). On success the
    /// graph is moved into the worker and the caller keeps only the returned
    /// handle.
    pub fn solve(&self) -> Result<SolveHandle, Error> {
        self.config.validate()?;
        let graph = QuboGraph::from_coefficients(&self.coefficients)?;
        let raw_ids = graph.raw_ids().to_vec();
        let config = self.config.clone();

        log::debug!(
            "spawning annealing worker: {} variables, {} neighbor slots",
            graph.num_vars(),
            graph.num_neighbor_slots()
        );

        let (tx, rx) = mpsc::channel();
        let worker = thread::spawn(move || {
            // Fire-and-forget: if the caller dropped the receiver, sends
            // fail and the remaining reports are discarded.
            AnnealRunner::run(&graph, &config, |report| {
                let _ = tx.send(report);
            });
            log::debug!("annealing worker finished");
        });

        Ok(SolveHandle {
            reports: rx,
            worker: Some(worker),
            raw_ids,
        })
    }
}

/// Handle to an in-flight annealing run.
///
/// Reports arrive in cooling-step order; the terminal report is always last.
/// Dropping the handle without waiting still joins the worker (which runs to
/// completion — there is no mid-run cancel), so the thread is released even
/// when the result is abandoned.
#[derive(Debug)]
pub struct SolveHandle {
    reports: Receiver<StepReport>,
    worker: Option<JoinHandle<()>>,
    raw_ids: Vec<i64>,
}

impl SolveHandle {
    /// Blocks until the run finishes and returns the final assignment.
    pub fn wait(self) -> Result<Assignment, Error> {
        self.wait_with_progress(|_, _| {})
    }

    /// Blocks until the run finishes, invoking `on_step` with the raw-id
    /// keyed snapshot and current temperature once per cooling step and once
    /// more for the terminal report. Resolves to the final assignment.
    ///
    /// # Errors
    ///
    /// [`Error::WorkerDisconnected`] if the worker goes away before the
    /// terminal report, which only happens if the annealing loop panicked.
    pub fn wait_with_progress<F>(mut self, mut on_step: F) -> Result<Assignment, Error>
    where
        F: FnMut(&Assignment, f64),
    {
        loop {
            let report = self
                .reports
                .recv()
                .map_err(|_| Error::WorkerDisconnected)?;
            let assignment = self.to_assignment(&report.state);
            on_step(&assignment, report.temperature);
            if report.finished {
                self.join_worker();
                return Ok(assignment);
            }
        }
    }

    /// Translates a dense state snapshot back to raw variable ids.
    fn to_assignment(&self, state: &[u8]) -> Assignment {
        self.raw_ids
            .iter()
            .copied()
            .zip(state.iter().copied())
            .collect()
    }

    fn join_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("annealing worker panicked");
            }
        }
    }
}

impl Drop for SolveHandle {
    fn drop(&mut self) {
        self.join_worker();
    }
}
