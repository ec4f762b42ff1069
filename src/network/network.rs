use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::layers::layer::Layer;
use crate::math::vector::{dot, squared_error};

/// A fully-connected feed-forward network trained by online (per-example)
/// backpropagation.
///
/// Layers are appended with [`add_layer`](Network::add_layer) and evaluated
/// in append order; the topology is fixed once training starts.
#[derive(Debug)]
pub struct Network {
    pub layers: Vec<Layer>,
    number_of_inputs: usize,
    learning_rate: f64,
}

impl Network {
    /// Empty network accepting `number_of_inputs`-wide vectors.
    pub fn new(number_of_inputs: usize, learning_rate: f64) -> Network {
        Network {
            layers: Vec::new(),
            number_of_inputs,
            learning_rate,
        }
    }

    pub fn number_of_inputs(&self) -> usize {
        self.number_of_inputs
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Width of the output vector; 0 while no layers have been added.
    pub fn output_len(&self) -> usize {
        self.layers.last().map_or(0, Layer::len)
    }

    /// Input width the next appended layer must accept.
    fn next_input_len(&self) -> usize {
        self.layers.last().map_or(self.number_of_inputs, Layer::len)
    }

    /// Appends a layer of `unit_count` fresh units, each sized to the
    /// previous layer's unit count (the raw input width for the first
    /// layer).
    pub fn add_layer<R: Rng>(
        &mut self,
        unit_count: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) {
        let input_size = self.next_input_len();
        self.layers.push(Layer::new(unit_count, input_size, activation, rng));
    }

    /// Drops every layer so the topology can be rebuilt, e.g. from a
    /// persisted description.
    pub fn clear(&mut self) {
        self.layers.clear();
    }

    /// Feeds `inputs` through the layers in order, each layer's output
    /// vector becoming the next layer's input, and returns the last layer's
    /// output. Side-effect-free; intermediate outputs are not exposed.
    pub fn forward(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        if inputs.len() != self.number_of_inputs {
            return Err(NetworkError::ShapeMismatch {
                expected: self.number_of_inputs,
                actual: inputs.len(),
            });
        }
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    /// The vector, across layer `layer + 1`'s units, of the weight each
    /// assigns to the output of unit `unit_index` in layer `layer`.
    ///
    /// The bias lives in its own field on every unit, so this is a direct
    /// `weights[unit_index]` gather with no index shift.
    pub fn outgoing_weights(&self, layer: usize, unit_index: usize) -> Result<Vec<f64>> {
        if layer + 1 >= self.layers.len() {
            return Err(NetworkError::NoOutgoingWeights(layer));
        }
        let width = self.layers[layer].len();
        if unit_index >= width {
            return Err(NetworkError::ShapeMismatch {
                expected: width,
                actual: unit_index,
            });
        }
        Ok(self.layers[layer + 1]
            .units
            .iter()
            .map(|unit| unit.weights[unit_index])
            .collect())
    }

    /// One online gradient-descent step on a single labeled example.
    ///
    /// Runs a forward pass that caches every layer's pre-activation sums and
    /// outputs, computes an error delta per unit back-to-front (the output
    /// layer's against `target`, interior layers' through the outgoing
    /// weights into the already-computed next-layer deltas), then applies
    /// weight updates front-to-back against the cached outputs. Each delta
    /// uses the unit's own activation derivative at its cached sum.
    ///
    /// Returns the sum of squared componentwise differences between a fresh
    /// post-update forward pass on `example` and `target`. Informational
    /// only; it does not feed back into the update.
    pub fn train_on_example(&mut self, example: &[f64], target: &[f64]) -> Result<f64> {
        if example.len() != self.number_of_inputs {
            return Err(NetworkError::ShapeMismatch {
                expected: self.number_of_inputs,
                actual: example.len(),
            });
        }
        if self.layers.is_empty() {
            // No output layer to compare a target against.
            return Err(NetworkError::ShapeMismatch {
                expected: 0,
                actual: target.len(),
            });
        }
        if target.len() != self.output_len() {
            return Err(NetworkError::ShapeMismatch {
                expected: self.output_len(),
                actual: target.len(),
            });
        }

        // Forward pass, retaining every layer's sums and outputs.
        let mut sums: Vec<Vec<f64>> = Vec::with_capacity(self.layers.len());
        let mut outputs: Vec<Vec<f64>> = Vec::with_capacity(self.layers.len());
        for (i, layer) in self.layers.iter().enumerate() {
            let inputs = if i == 0 { example } else { outputs[i - 1].as_slice() };
            let mut layer_sums = Vec::with_capacity(layer.len());
            let mut layer_outputs = Vec::with_capacity(layer.len());
            for unit in &layer.units {
                let sum = unit.sum(inputs)?;
                layer_sums.push(sum);
                layer_outputs.push(unit.activation.function(sum));
            }
            sums.push(layer_sums);
            outputs.push(layer_outputs);
        }

        // Delta pass, output layer back to the first. Interior deltas gather
        // the next layer's weight for this unit's output; no weight is
        // touched until every delta exists.
        let last = self.layers.len() - 1;
        let mut deltas: Vec<Vec<f64>> = vec![Vec::new(); self.layers.len()];
        for i in (0..=last).rev() {
            let mut layer_deltas = Vec::with_capacity(self.layers[i].len());
            for j in 0..self.layers[i].len() {
                let upstream = if i == last {
                    target[j] - outputs[i][j]
                } else {
                    dot(&self.outgoing_weights(i, j)?, &deltas[i + 1])
                };
                let unit = &self.layers[i].units[j];
                layer_deltas.push(unit.activation.derivative(sums[i][j]) * upstream);
            }
            deltas[i] = layer_deltas;
        }

        // Update pass, first layer to last, against the cached outputs.
        let rate = self.learning_rate;
        for (i, layer) in self.layers.iter_mut().enumerate() {
            let inputs = if i == 0 { example } else { outputs[i - 1].as_slice() };
            for (j, unit) in layer.units.iter_mut().enumerate() {
                let step = rate * deltas[i][j];
                unit.bias += step;
                for (k, weight) in unit.weights.iter_mut().enumerate() {
                    *weight += step * inputs[k];
                }
            }
        }

        // Post-update error on a fresh pass.
        let fresh = self.forward(example)?;
        Ok(squared_error(&fresh, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::unit::Unit;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_layer_fixture() -> Network {
        // 2 inputs -> 2 hidden -> 1 output, hand-picked weights.
        let mut network = Network::new(2, 0.25);
        network.layers.push(Layer::from_units(vec![
            Unit::from_weights(0.1, vec![0.4, -0.6], ActivationFunction::Sigmoid),
            Unit::from_weights(-0.2, vec![0.7, 0.3], ActivationFunction::Sigmoid),
        ]));
        network.layers.push(Layer::from_units(vec![Unit::from_weights(
            0.05,
            vec![0.5, -0.4],
            ActivationFunction::Sigmoid,
        )]));
        network
    }

    #[test]
    fn forward_returns_last_layer_width() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut network = Network::new(3, 0.1);
        network.add_layer(4, ActivationFunction::Sigmoid, &mut rng);
        network.add_layer(2, ActivationFunction::Sigmoid, &mut rng);
        let out = network.forward(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn forward_with_wrong_width_fails_before_any_computation() {
        let network = two_layer_fixture();
        let err = network.forward(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::ShapeMismatch { expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn forward_on_empty_network_passes_input_through() {
        let network = Network::new(2, 0.1);
        assert_eq!(network.forward(&[0.5, 0.75]).unwrap(), vec![0.5, 0.75]);
    }

    #[test]
    fn layers_are_sized_to_their_predecessor() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut network = Network::new(7, 0.1);
        network.add_layer(4, ActivationFunction::Sigmoid, &mut rng);
        network.add_layer(2, ActivationFunction::Sigmoid, &mut rng);
        assert_eq!(network.layers[0].units[0].num_inputs(), 7);
        assert_eq!(network.layers[1].units[0].num_inputs(), 4);
    }

    #[test]
    fn outgoing_weights_gather_the_next_layers_column() {
        let network = two_layer_fixture();
        assert_eq!(network.outgoing_weights(0, 0).unwrap(), vec![0.5]);
        assert_eq!(network.outgoing_weights(0, 1).unwrap(), vec![-0.4]);
    }

    #[test]
    fn last_layer_has_no_outgoing_weights() {
        let network = two_layer_fixture();
        let err = network.outgoing_weights(1, 0).unwrap_err();
        assert!(matches!(err, NetworkError::NoOutgoingWeights(1)));
    }

    #[test]
    fn outgoing_weights_checks_the_unit_index() {
        let network = two_layer_fixture();
        assert!(network.outgoing_weights(0, 9).is_err());
    }

    #[test]
    fn train_on_example_validates_both_shapes() {
        let mut network = two_layer_fixture();
        assert!(network.train_on_example(&[1.0], &[0.0]).is_err());
        assert!(network.train_on_example(&[1.0, 0.0], &[0.0, 1.0]).is_err());
    }

    #[test]
    fn training_an_empty_network_is_rejected() {
        let mut network = Network::new(2, 0.1);
        assert!(network.train_on_example(&[0.0, 1.0], &[1.0]).is_err());
    }

    #[test]
    fn repeated_training_on_one_example_does_not_increase_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut network = Network::new(2, 0.3);
        network.add_layer(2, ActivationFunction::Sigmoid, &mut rng);
        network.add_layer(1, ActivationFunction::Sigmoid, &mut rng);

        let example = [1.0, 0.0];
        let target = [1.0];
        let first = network.train_on_example(&example, &target).unwrap();
        let mut last = first;
        for _ in 0..50 {
            last = network.train_on_example(&example, &target).unwrap();
        }
        assert!(last <= first, "error grew from {first} to {last}");
    }

    #[test]
    fn output_delta_moves_the_output_toward_the_target() {
        let mut network = two_layer_fixture();
        let before = network.forward(&[1.0, 1.0]).unwrap()[0];
        network.train_on_example(&[1.0, 1.0], &[1.0]).unwrap();
        let after = network.forward(&[1.0, 1.0]).unwrap()[0];
        assert!(after > before);
    }

    #[test]
    fn clear_resets_the_topology() {
        let mut network = two_layer_fixture();
        network.clear();
        assert!(network.layers.is_empty());
        assert_eq!(network.output_len(), 0);
    }
}
