//! Annealing configuration.

use crate::error::Error;

/// Configuration for the annealing loop.
///
/// Temperature starts at `initial_temperature` and is multiplied by
/// `cooling_factor` after each batch of `sweeps_per_temperature` trial flips,
/// until it drops to `final_temperature` or below.
///
/// # Examples
///
/// ```
/// use qubo_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(5.0)
///     .with_cooling_factor(0.99)
///     .with_sweeps_per_temperature(1000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more uphill moves early.
    pub initial_temperature: f64,

    /// Multiplier applied to the temperature after each cooling step.
    /// Must be in (0, 1); values ≥ 1 would never terminate.
    pub cooling_factor: f64,

    /// Stop threshold: annealing ends once temperature ≤ this value.
    pub final_temperature: f64,

    /// Number of randomized single-variable trial flips per cooling step.
    pub sweeps_per_temperature: usize,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            cooling_factor: 0.995,
            final_temperature: 0.01,
            sweeps_per_temperature: 20_000,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_sweeps_per_temperature(mut self, sweeps: usize) -> Self {
        self.sweeps_per_temperature = sweeps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Rejects parameter values under which the cooling loop would hang or
    /// be ill-defined. `final_temperature >= initial_temperature` is allowed
    /// and yields zero cooling steps followed by the terminal report.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !self.final_temperature.is_finite() || self.final_temperature <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "final_temperature must be positive, got {}",
                self.final_temperature
            )));
        }
        if !self.cooling_factor.is_finite()
            || self.cooling_factor <= 0.0
            || self.cooling_factor >= 1.0
        {
            return Err(Error::InvalidConfig(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            )));
        }
        if self.sweeps_per_temperature == 0 {
            return Err(Error::InvalidConfig(
                "sweeps_per_temperature must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Upper bound on the number of cooling steps the schedule can take
    /// (excluding the terminal report).
    pub fn max_cooling_steps(&self) -> usize {
        if self.final_temperature >= self.initial_temperature {
            return 0;
        }
        let ratio = self.final_temperature / self.initial_temperature;
        (ratio.ln() / self.cooling_factor.ln()).ceil() as usize
    }
}
