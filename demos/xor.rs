use neurite::{
    train_until_convergence, ActivationFunction, LayerSpec, Network, NetworkSpec, TrainConfig,
};

fn main() {
    let spec = NetworkSpec {
        name: "xor".to_string(),
        number_of_inputs: 2,
        learning_rate: 0.5,
        layers: vec![
            LayerSpec { units: 3, activation: ActivationFunction::Sigmoid },
            LayerSpec { units: 1, activation: ActivationFunction::Sigmoid },
        ],
    };
    let mut network = Network::from_spec(&spec, &mut rand::thread_rng());

    let examples = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];

    let config = TrainConfig::new(1_000_000, 1e-3);
    let outcome = train_until_convergence(&mut network, &examples, &targets, &config)
        .expect("training set shapes are valid");
    println!("{outcome:?}");

    for example in &examples {
        let output = network.forward(example).expect("input width matches");
        println!("{:?} -> {:.4}", example, output[0]);
    }
}
