pub mod error;
pub mod math;
pub mod activation;
pub mod units;
pub mod layers;
pub mod network;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use activation::activation::ActivationFunction;
pub use units::unit::Unit;
pub use layers::layer::Layer;
pub use network::network::Network;
pub use network::persist::DEFAULT_SEPARATOR;
pub use network::spec::{LayerSpec, NetworkSpec};
pub use train::epoch_stats::EpochStats;
pub use train::train_config::TrainConfig;
pub use train::loop_fn::{train_until_convergence, TrainOutcome};
