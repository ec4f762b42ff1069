use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_until_convergence`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, one
/// `EpochStats` value is sent at the end of every completed epoch. Receivers
/// use this to drive progress output without polling the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Epoch budget for this run.
    pub max_epochs: usize,
    /// Squared error summed over every example in this epoch.
    pub total_error: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
