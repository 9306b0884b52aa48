//! Progress report emitted by the annealing loop.

/// Snapshot of the annealer after one cooling step.
///
/// Reports are emitted in cooling-step order; the report with
/// `finished = true` is always the last one for a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    /// Copy of the state vector, one 0/1 entry per dense variable index.
    pub state: Vec<u8>,

    /// Temperature after the cooling step that produced this report.
    pub temperature: f64,

    /// True only for the terminal report; no trial updates follow it.
    pub finished: bool,
}
