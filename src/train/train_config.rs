use serde::{Deserialize, Serialize};

/// Hyperparameters for a `train` run.
///
/// # Fields
/// - `iterations`    — number of estimate/apply cycles to run
/// - `epsilon`       — finite-difference step added to each parameter
/// - `learning_rate` — scale of the gradient-descent update
/// - `log_every`     — emit a cost line every this many iterations;
///                     `0` disables periodic logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub iterations: usize,
    pub epsilon: f64,
    pub learning_rate: f64,
    #[serde(default)]
    pub log_every: usize,
}

impl TrainConfig {
    /// Creates a config with periodic logging disabled.
    pub fn new(iterations: usize, epsilon: f64, learning_rate: f64) -> Self {
        TrainConfig {
            iterations,
            epsilon,
            learning_rate,
            log_every: 0,
        }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a config from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

/// Summary of a completed `train` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainReport {
    /// Cost over the dataset before the first update.
    pub initial_cost: f64,
    /// Cost over the dataset after the last update.
    pub final_cost: f64,
    /// Iterations actually run.
    pub iterations: usize,
}
