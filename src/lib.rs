pub mod error;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use network::gradient::Gradient;
pub use network::network::Network;
pub use train::train_config::{TrainConfig, TrainReport};
pub use train::trainer::train;
