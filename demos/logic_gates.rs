//! Trains AND and OR gates while streaming per-epoch stats to a printer
//! thread over the progress channel.

use std::sync::mpsc;
use std::thread;

use neurite::{train_until_convergence, ActivationFunction, EpochStats, Network, TrainConfig};

fn main() {
    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];

    train_gate("AND", &inputs, &[vec![0.0], vec![0.0], vec![0.0], vec![1.0]]);
    train_gate("OR", &inputs, &[vec![0.0], vec![1.0], vec![1.0], vec![1.0]]);
}

fn train_gate(name: &str, examples: &[Vec<f64>], targets: &[Vec<f64>]) {
    let mut rng = rand::thread_rng();
    let mut network = Network::new(2, 0.5);
    network.add_layer(2, ActivationFunction::Sigmoid, &mut rng);
    network.add_layer(1, ActivationFunction::Sigmoid, &mut rng);

    let (tx, rx) = mpsc::channel::<EpochStats>();
    let label = name.to_string();
    let printer = thread::spawn(move || {
        for stats in rx {
            if stats.epoch % 10_000 == 0 {
                println!(
                    "[{label}] epoch {}/{}: total error {:.6}",
                    stats.epoch, stats.max_epochs, stats.total_error
                );
            }
        }
    });

    let config = TrainConfig {
        max_epochs: 1_000_000,
        epsilon: 1e-4,
        progress_tx: Some(tx),
        stop_flag: None,
    };
    let outcome = train_until_convergence(&mut network, examples, targets, &config)
        .expect("training set shapes are valid");
    drop(config); // hang up the channel so the printer exits
    printer.join().expect("printer thread panicked");

    println!("[{name}] {outcome:?}");
    for example in examples {
        let output = network.forward(example).expect("input width matches");
        println!("[{name}] {:?} -> {:.4}", example, output[0]);
    }
}
