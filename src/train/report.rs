use serde::{Serialize, Deserialize};

/// Summary of a `Network::train` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainReport {
    /// Number of completed epochs.
    pub epochs: usize,
    /// Maximum per-example loss observed in the last completed epoch.
    pub max_loss: f64,
    /// True when the loss threshold was reached before the epoch budget
    /// ran out.
    pub converged: bool,
}
