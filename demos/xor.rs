use magnetite_nn::{train, Matrix, Network, TrainConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut network = Network::new(&[2, 2, 1])?;
    let mut rng = rand::thread_rng();
    network.randomize(&mut rng, 0.0, 1.0);

    let inputs = Matrix::from_vec(4, 2, vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0])?;
    let targets = Matrix::from_vec(4, 1, vec![0.0, 1.0, 1.0, 0.0])?;

    let config = TrainConfig {
        log_every: 1_000,
        ..TrainConfig::new(60_000, 1e-1, 1e-1)
    };
    let report = train(&mut network, &inputs, &targets, &config)?;
    println!(
        "cost: {:.6} -> {:.6} after {} iterations",
        report.initial_cost, report.final_cost, report.iterations
    );

    for a in 0..2u8 {
        for b in 0..2u8 {
            network.set_input(&[a as f64, b as f64])?;
            network.forward()?;
            println!("{a} ^ {b} = {:.4}", network.output()[(0, 0)]);
        }
    }

    Ok(())
}
