use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::network::network::Network;

/// Describes one layer in a network specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub units: usize,
    pub activation: ActivationFunction,
}

/// A fully serializable description of a network architecture, stored
/// independently of trained weights.
///
/// `NetworkSpec` can be saved to / loaded from JSON before training starts;
/// [`Network::from_spec`] turns it into a freshly initialized network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the model file stem.
    pub name: String,
    pub number_of_inputs: usize,
    pub learning_rate: f64,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| NetworkError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader).map_err(|_| NetworkError::CorruptFile)
    }
}

impl Network {
    /// Builds a freshly initialized network matching `spec`.
    pub fn from_spec<R: Rng>(spec: &NetworkSpec, rng: &mut R) -> Network {
        let mut network = Network::new(spec.number_of_inputs, spec.learning_rate);
        for layer in &spec.layers {
            network.add_layer(layer.units, layer.activation.clone(), rng);
        }
        network
    }
}
