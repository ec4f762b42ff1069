//! Delimited-text persistence for trained weights.
//!
//! Line 1 lists the per-layer unit counts, separator-joined (`2;1` = two
//! layers, 2 units then 1 unit). Every following line is one unit's full
//! weight vector, bias first, in layer-major then unit-minor order.
//! Activation functions are not part of the format and must be resupplied
//! on load.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::layers::layer::Layer;
use crate::network::network::Network;
use crate::units::unit::Unit;

pub const DEFAULT_SEPARATOR: char = ';';

impl Network {
    /// Writes the topology line and one weight line per unit, overwriting
    /// any existing file at `path`.
    pub fn save_weights<P: AsRef<Path>>(&self, path: P, separator: char) -> Result<()> {
        let sep = separator.to_string();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let counts: Vec<String> = self.layers.iter().map(|layer| layer.len().to_string()).collect();
        writeln!(writer, "{}", counts.join(&sep))?;

        for layer in &self.layers {
            for unit in &layer.units {
                let mut fields = Vec::with_capacity(unit.weights.len() + 1);
                fields.push(unit.bias.to_string());
                fields.extend(unit.weights.iter().map(|w| w.to_string()));
                writeln!(writer, "{}", fields.join(&sep))?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Rebuilds a network from a file written by
    /// [`save_weights`](Network::save_weights).
    ///
    /// The input width is derived from the first unit line's field count.
    /// `learning_rate` and `activation` are not persisted and must be
    /// supplied again; the activation is applied to every rebuilt unit. Any
    /// line-count, field-count, or numeric-parse failure is reported as the
    /// single generic [`NetworkError::CorruptFile`].
    pub fn load_weights<P: AsRef<Path>>(
        path: P,
        separator: char,
        learning_rate: f64,
        activation: ActivationFunction,
    ) -> Result<Network> {
        let content = std::fs::read_to_string(path)?;
        let mut lines = content.lines();

        let header = lines.next().ok_or(NetworkError::CorruptFile)?;
        let counts = parse_counts(header, separator)?;

        let rows: Vec<Vec<f64>> = lines
            .map(|line| parse_weight_row(line, separator))
            .collect::<Result<_>>()?;
        if rows.len() != counts.iter().sum::<usize>() {
            return Err(NetworkError::CorruptFile);
        }

        // Counts are all nonzero, so the first row exists and carries the
        // bias plus one field per network input.
        let number_of_inputs = rows[0].len() - 1;

        let mut network = Network::new(number_of_inputs, learning_rate);
        let mut row_iter = rows.into_iter();
        for (i, &count) in counts.iter().enumerate() {
            let input_size = if i == 0 { number_of_inputs } else { counts[i - 1] };
            let mut units = Vec::with_capacity(count);
            for _ in 0..count {
                let fields = row_iter.next().ok_or(NetworkError::CorruptFile)?;
                if fields.len() != input_size + 1 {
                    return Err(NetworkError::CorruptFile);
                }
                let bias = fields[0];
                let weights = fields[1..].to_vec();
                units.push(Unit::from_weights(bias, weights, activation.clone()));
            }
            network.layers.push(Layer::from_units(units));
        }
        Ok(network)
    }
}

fn parse_counts(header: &str, separator: char) -> Result<Vec<usize>> {
    let counts: Vec<usize> = header
        .split(separator)
        .map(|field| field.trim().parse::<usize>().map_err(|_| NetworkError::CorruptFile))
        .collect::<Result<_>>()?;
    if counts.contains(&0) {
        return Err(NetworkError::CorruptFile);
    }
    Ok(counts)
}

fn parse_weight_row(line: &str, separator: char) -> Result<Vec<f64>> {
    line.split(separator)
        .map(|field| field.trim().parse::<f64>().map_err(|_| NetworkError::CorruptFile))
        .collect()
}
