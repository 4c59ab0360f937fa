use log::{debug, info};

use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::network::gradient::Gradient;
use crate::network::network::Network;
use crate::train::train_config::{TrainConfig, TrainReport};

/// Trains `network` on a labeled dataset by repeated finite-difference
/// gradient descent.
///
/// Each iteration estimates the cost gradient over the whole dataset and
/// applies one descent step. `inputs` must be `n x arch[0]` and `targets`
/// `n x arch[last]`; shape violations surface from the first cost
/// evaluation before any parameter is touched.
pub fn train(
    network: &mut Network,
    inputs: &Matrix,
    targets: &Matrix,
    config: &TrainConfig,
) -> Result<TrainReport> {
    let mut gradient = Gradient::zeros_like(network);

    let initial_cost = network.cost(inputs, targets)?;
    debug!("starting cost = {initial_cost:.6}");

    for iteration in 1..=config.iterations {
        network.estimate_gradient(&mut gradient, config.epsilon, inputs, targets)?;
        network.apply_gradient(&gradient, config.learning_rate)?;

        if config.log_every > 0 && iteration % config.log_every == 0 {
            let cost = network.cost(inputs, targets)?;
            info!("iteration {iteration}/{}: cost = {cost:.6}", config.iterations);
        }
    }

    let final_cost = network.cost(inputs, targets)?;
    Ok(TrainReport {
        initial_cost,
        final_cost,
        iterations: config.iterations,
    })
}
