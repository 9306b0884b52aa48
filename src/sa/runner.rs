//! Annealing execution loop.

use super::config::AnnealConfig;
use super::types::StepReport;
use crate::graph::QuboGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a completed annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// Final state vector, one 0/1 entry per dense variable index.
    pub state: Vec<u8>,

    /// Temperature at termination (≤ the configured final temperature).
    pub final_temperature: f64,

    /// Number of cooling steps performed.
    pub cooling_steps: usize,

    /// Number of accepted flips (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly energy-decreasing flips.
    pub improving_moves: usize,
}

/// Executes the Metropolis annealing loop.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs annealing to completion, invoking `on_step` once after every
    /// cooling step and once more with the terminal report.
    ///
    /// The state vector is initialized uniformly at random. Each cooling
    /// step performs `sweeps_per_temperature` trial flips, then multiplies
    /// the temperature by `cooling_factor`. The loop stops once temperature
    /// drops to `final_temperature` or below.
    ///
    /// Assumes a validated configuration; callers go through
    /// [`AnnealConfig::validate`] first (the public solve path does).
    pub fn run<F>(graph: &QuboGraph, config: &AnnealConfig, mut on_step: F) -> AnnealResult
    where
        F: FnMut(StepReport),
    {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let n = graph.num_vars();
        let mut state: Vec<u8> = (0..n).map(|_| rng.random::<bool>() as u8).collect();

        let mut temperature = config.initial_temperature;
        let mut cooling_steps = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while temperature > config.final_temperature {
            if n > 0 {
                for _ in 0..config.sweeps_per_temperature {
                    let i = rng.random_range(0..n);
                    let field = graph.local_field(i, &state);
                    // Flipping 0→1 adds the local field; 1→0 removes it.
                    let delta = if state[i] == 0 { field } else { -field };

                    let accept = if delta <= 0.0 {
                        improving_moves += 1;
                        true
                    } else {
                        // exp underflows toward 0 at low temperature, so the
                        // cold regime rejects uphill moves almost certainly.
                        rng.random_range(0.0..1.0) < (-delta / temperature).exp()
                    };
                    if accept {
                        state[i] ^= 1;
                        accepted_moves += 1;
                    }
                }
            }

            temperature *= config.cooling_factor;
            cooling_steps += 1;
            log::trace!("cooling step {cooling_steps}: temperature {temperature:.6}");
            on_step(StepReport {
                state: state.clone(),
                temperature,
                finished: false,
            });
        }

        on_step(StepReport {
            state: state.clone(),
            temperature,
            finished: true,
        });

        AnnealResult {
            state,
            final_temperature: temperature,
            cooling_steps,
            accepted_moves,
            improving_moves,
        }
    }
}
