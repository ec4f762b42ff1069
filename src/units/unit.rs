use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::math::vector::dot;

/// A single computational node: a bias-augmented weighted sum followed by a
/// nonlinearity.
///
/// The bias is its own field rather than slot 0 of the weight vector, so
/// "the weight feeding input j" is `weights[j]` with no index shift. The
/// bias is logically multiplied by the constant 1 on every evaluation.
#[derive(Debug, Clone)]
pub struct Unit {
    pub bias: f64,
    pub weights: Vec<f64>,
    pub activation: ActivationFunction,
}

impl Unit {
    /// Fresh unit with `num_inputs` connection weights drawn uniformly from
    /// [-1, 1) by `rng` and the bias set to exactly 1.
    pub fn new<R: Rng>(num_inputs: usize, activation: ActivationFunction, rng: &mut R) -> Unit {
        let weights = (0..num_inputs).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect();
        Unit {
            bias: 1.0,
            weights,
            activation,
        }
    }

    /// Rebuilds a unit from persisted weight values.
    pub fn from_weights(bias: f64, weights: Vec<f64>, activation: ActivationFunction) -> Unit {
        Unit {
            bias,
            weights,
            activation,
        }
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Pre-activation value: `bias * 1 + dot(weights, inputs)`.
    pub fn sum(&self, inputs: &[f64]) -> Result<f64> {
        if inputs.len() != self.weights.len() {
            return Err(NetworkError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        Ok(self.bias + dot(&self.weights, inputs))
    }

    /// Activated output for `inputs`. Pure; no mutation, no other side
    /// effects.
    pub fn evaluate(&self, inputs: &[f64]) -> Result<f64> {
        Ok(self.activation.function(self.sum(inputs)?))
    }
}
