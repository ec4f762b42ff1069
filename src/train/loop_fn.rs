use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::error::{NetworkError, Result};
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Outcome of a `train_until_convergence` run.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainOutcome {
    /// Total epoch error dropped below `epsilon`.
    Converged { epochs: usize, error: f64 },
    /// The epoch budget ran out before the error did.
    MaxEpochsReached { error: f64 },
    /// The stop flag was set or the progress receiver hung up.
    Stopped { epochs: usize, error: f64 },
}

impl TrainOutcome {
    pub fn converged(&self) -> bool {
        matches!(self, TrainOutcome::Converged { .. })
    }
}

/// Trains `network` with online gradient descent until the total epoch error
/// drops below `config.epsilon` or `config.max_epochs` is exhausted.
///
/// Each epoch visits every example once, in input order (never shuffled),
/// applying one weight update per example and summing the per-example
/// post-update errors. A shape mismatch on any example aborts the whole run;
/// no example is skipped.
///
/// # Early termination
/// The loop breaks at an epoch boundary if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
pub fn train_until_convergence(
    network: &mut Network,
    examples: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<TrainOutcome> {
    if examples.len() != targets.len() {
        return Err(NetworkError::ShapeMismatch {
            expected: examples.len(),
            actual: targets.len(),
        });
    }

    let mut total_error = 0.0;

    for epoch in 1..=config.max_epochs {
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                return Ok(TrainOutcome::Stopped { epochs: epoch - 1, error: total_error });
            }
        }

        let t_start = Instant::now();

        total_error = 0.0;
        for (example, target) in examples.iter().zip(targets.iter()) {
            total_error += network.train_on_example(example, target)?;
        }

        if let Some(ref tx) = config.progress_tx {
            let stats = EpochStats {
                epoch,
                max_epochs: config.max_epochs,
                total_error,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            // A dropped receiver means nobody is watching; stop training.
            if tx.send(stats).is_err() {
                return Ok(TrainOutcome::Stopped { epochs: epoch, error: total_error });
            }
        }

        if total_error < config.epsilon {
            return Ok(TrainOutcome::Converged { epochs: epoch, error: total_error });
        }
    }

    Ok(TrainOutcome::MaxEpochsReached { error: total_error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::AtomicBool;
    use std::sync::{mpsc, Arc};

    fn small_network(seed: u64) -> Network {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut network = Network::new(1, 0.5);
        network.add_layer(1, ActivationFunction::Sigmoid, &mut rng);
        network
    }

    #[test]
    fn mismatched_example_and_target_counts_fail() {
        let mut network = small_network(1);
        let err = train_until_convergence(
            &mut network,
            &[vec![0.0], vec![1.0]],
            &[vec![0.0]],
            &TrainConfig::new(10, 1e-4),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            NetworkError::ShapeMismatch { expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn a_single_learnable_example_converges() {
        let mut network = small_network(2);
        let outcome = train_until_convergence(
            &mut network,
            &[vec![1.0]],
            &[vec![1.0]],
            &TrainConfig::new(100_000, 1e-4),
        )
        .unwrap();
        assert!(outcome.converged(), "got {outcome:?}");
    }

    #[test]
    fn exhausting_the_epoch_budget_reports_the_last_error() {
        let mut network = small_network(3);
        let outcome = train_until_convergence(
            &mut network,
            &[vec![1.0]],
            &[vec![0.0]],
            &TrainConfig::new(3, 0.0),
        )
        .unwrap();
        match outcome {
            TrainOutcome::MaxEpochsReached { error } => assert!(error > 0.0),
            other => panic!("expected MaxEpochsReached, got {other:?}"),
        }
    }

    #[test]
    fn a_preset_stop_flag_halts_before_the_first_epoch() {
        let mut network = small_network(4);
        let config = TrainConfig {
            max_epochs: 1_000,
            epsilon: 1e-4,
            progress_tx: None,
            stop_flag: Some(Arc::new(AtomicBool::new(true))),
        };
        let outcome =
            train_until_convergence(&mut network, &[vec![1.0]], &[vec![1.0]], &config).unwrap();
        assert_eq!(outcome, TrainOutcome::Stopped { epochs: 0, error: 0.0 });
    }

    #[test]
    fn a_dropped_receiver_stops_training() {
        let mut network = small_network(5);
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let config = TrainConfig {
            max_epochs: 1_000,
            epsilon: 0.0,
            progress_tx: Some(tx),
            stop_flag: None,
        };
        let outcome =
            train_until_convergence(&mut network, &[vec![1.0]], &[vec![1.0]], &config).unwrap();
        assert!(matches!(outcome, TrainOutcome::Stopped { epochs: 1, .. }));
    }

    #[test]
    fn one_stats_value_arrives_per_epoch() {
        let mut network = small_network(6);
        let (tx, rx) = mpsc::channel();
        let config = TrainConfig {
            max_epochs: 5,
            epsilon: 0.0,
            progress_tx: Some(tx),
            stop_flag: None,
        };
        train_until_convergence(&mut network, &[vec![1.0]], &[vec![0.0]], &config).unwrap();
        drop(config);
        let stats: Vec<EpochStats> = rx.iter().collect();
        assert_eq!(stats.len(), 5);
        assert_eq!(stats[0].epoch, 1);
        assert_eq!(stats[4].epoch, 5);
    }
}
