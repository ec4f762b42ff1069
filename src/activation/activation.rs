use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Element-wise nonlinearity applied by a [`Unit`](crate::units::unit::Unit)
/// after its bias-augmented weighted sum.
///
/// The variant is what gets stored on a unit, so serialization and equality
/// checks are well-defined. The delimited-text weight format intentionally
/// excludes this choice; loading a network always requires the caller to
/// resupply it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Sigmoid,
    Tanh,
    ReLU,
    LeakyReLU { alpha: f64 },
    Identity,
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::LeakyReLU { alpha } => if x > 0.0 { x } else { alpha * x },
            ActivationFunction::Identity => x,
        }
    }

    /// Element-wise derivative of the activation, evaluated at the
    /// pre-activation value (the unit's weighted sum, not its output).
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::LeakyReLU { alpha } => if x > 0.0 { 1.0 } else { *alpha },
            ActivationFunction::Identity => 1.0,
        }
    }

    /// Stable lowercase name, used when printing a topology.
    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::LeakyReLU { .. } => "leaky_relu",
            ActivationFunction::Identity => "identity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_half_at_zero() {
        assert!((ActivationFunction::Sigmoid.function(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_derivative_matches_output_form() {
        // σ'(z) = σ(z) * (1 - σ(z)) for every z, the identity the delta
        // computation relies on for sigmoid units.
        let sigmoid = ActivationFunction::Sigmoid;
        for z in [-3.0, -0.7, 0.0, 0.4, 2.5] {
            let out = sigmoid.function(z);
            assert!((sigmoid.derivative(z) - out * (1.0 - out)).abs() < 1e-12);
        }
    }

    #[test]
    fn tanh_derivative_is_one_at_zero() {
        assert!((ActivationFunction::Tanh.derivative(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn relu_clamps_negative_inputs() {
        assert_eq!(ActivationFunction::ReLU.function(-2.0), 0.0);
        assert_eq!(ActivationFunction::ReLU.function(3.0), 3.0);
    }

    #[test]
    fn leaky_relu_scales_negative_inputs() {
        let leaky = ActivationFunction::LeakyReLU { alpha: 0.1 };
        assert!((leaky.function(-2.0) + 0.2).abs() < 1e-12);
        assert_eq!(leaky.derivative(-2.0), 0.1);
    }

    #[test]
    fn serde_round_trip_preserves_variant() {
        let original = ActivationFunction::LeakyReLU { alpha: 0.05 };
        let json = serde_json::to_string(&original).unwrap();
        let restored: ActivationFunction = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
