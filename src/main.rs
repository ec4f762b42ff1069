//! Interactive console trainer.
//!
//! Prompts for a topology and a labeled training set on stdin, trains to
//! convergence, then evaluates arbitrary vectors until an empty line or EOF.
//! All prompting and parsing lives here; the library performs no I/O itself.

use std::io::{self, BufRead, Write};

use neurite::{
    train_until_convergence, ActivationFunction, Network, TrainConfig, TrainOutcome,
    DEFAULT_SEPARATOR,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let number_of_inputs: usize = prompt(&mut lines, "Number of inputs: ")?.trim().parse()?;
    let learning_rate: f64 = prompt(&mut lines, "Learning rate: ")?.trim().parse()?;
    let hidden_units: usize = prompt(&mut lines, "Hidden units (0 for none): ")?.trim().parse()?;
    let output_units: usize = prompt(&mut lines, "Output units: ")?.trim().parse()?;

    let activation = ActivationFunction::Sigmoid;
    let mut rng = rand::thread_rng();
    let mut network = Network::new(number_of_inputs, learning_rate);
    if hidden_units > 0 {
        network.add_layer(hidden_units, activation.clone(), &mut rng);
    }
    network.add_layer(output_units, activation.clone(), &mut rng);
    println!(
        "Built a {}-input network ({} activation).",
        number_of_inputs,
        activation.name()
    );

    let example_count: usize = prompt(&mut lines, "Number of training examples: ")?
        .trim()
        .parse()?;
    let mut examples = Vec::with_capacity(example_count);
    let mut targets = Vec::with_capacity(example_count);
    for i in 0..example_count {
        let example = prompt(&mut lines, &format!("Example {i} ({number_of_inputs} values): "))?;
        examples.push(parse_vector(&example)?);
        let target = prompt(&mut lines, &format!("Target {i} ({output_units} values): "))?;
        targets.push(parse_vector(&target)?);
    }

    let config = TrainConfig::new(1_000_000, 1e-4);
    match train_until_convergence(&mut network, &examples, &targets, &config)? {
        TrainOutcome::Converged { epochs, error } => {
            println!("Converged after {epochs} epochs (total error {error:.6}).");
        }
        TrainOutcome::MaxEpochsReached { error } => {
            println!("Did not converge within {} epochs (total error {error:.6}).", config.max_epochs);
        }
        TrainOutcome::Stopped { epochs, error } => {
            println!("Stopped after {epochs} epochs (total error {error:.6}).");
        }
    }

    println!("Enter vectors to evaluate; empty line to finish.");
    loop {
        let line = prompt(&mut lines, "> ");
        let line = match line {
            Ok(line) => line,
            Err(_) => break, // EOF ends the session
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        match parse_vector(trimmed) {
            Ok(vector) => match network.forward(&vector) {
                Ok(output) => println!("{output:?}"),
                Err(err) => println!("error: {err}"),
            },
            Err(err) => println!("error: {err}"),
        }
    }

    if let Ok(path) = prompt(&mut lines, "Save weights to (empty to skip): ") {
        let path = path.trim();
        if !path.is_empty() {
            network.save_weights(path, DEFAULT_SEPARATOR)?;
            println!("Saved to {path}.");
        }
    }

    Ok(())
}

/// Prints `text` and returns the next stdin line, failing on EOF.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> io::Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => line,
        None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
    }
}

/// Parses a whitespace-separated vector of reals.
fn parse_vector(line: &str) -> Result<Vec<f64>, std::num::ParseFloatError> {
    line.split_whitespace().map(str::parse).collect()
}
