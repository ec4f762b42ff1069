use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::units::unit::Unit;

/// An ordered group of units consuming the same input vector.
#[derive(Debug, Clone)]
pub struct Layer {
    pub units: Vec<Unit>,
}

impl Layer {
    /// Creates `unit_count` fresh units, each accepting `input_size` inputs
    /// and sharing the same activation.
    pub fn new<R: Rng>(
        unit_count: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        let units = (0..unit_count)
            .map(|_| Unit::new(input_size, activation.clone(), rng))
            .collect();
        Layer { units }
    }

    /// Wraps already-constructed units, e.g. rebuilt from a weight file.
    pub fn from_units(units: Vec<Unit>) -> Layer {
        Layer { units }
    }

    /// Number of units, i.e. the width of this layer's output vector.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Evaluates every unit against the same input vector.
    pub fn forward(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.units.iter().map(|unit| unit.evaluate(inputs)).collect()
    }
}
