use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};

use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_until_convergence` run.
///
/// # Fields
/// - `max_epochs`  — upper bound on full passes over the training data
/// - `epsilon`     — total epoch error below which training counts as
///                   converged
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch. If the receiver is dropped the loop
///                   terminates early (clean shutdown).
/// - `stop_flag`   — optional atomic flag; when set to `true` from another
///                   thread the loop terminates at the next epoch boundary.
pub struct TrainConfig {
    pub max_epochs: usize,
    pub epsilon: f64,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel and no stop
    /// flag.
    pub fn new(max_epochs: usize, epsilon: f64) -> Self {
        TrainConfig {
            max_epochs,
            epsilon,
            progress_tx: None,
            stop_flag: None,
        }
    }
}
