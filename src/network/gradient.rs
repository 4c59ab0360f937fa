use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// Holds estimated partial derivatives for every trainable parameter of a
/// network: one matrix per weight layer and one per bias layer, shaped
/// exactly like the network's own.
///
/// A `Gradient` carries no activation buffers and cannot be propagated
/// forward; it is purely the output slot of `Network::estimate_gradient`
/// and the input of `Network::apply_gradient`.
#[derive(Debug, Clone)]
pub struct Gradient {
    pub(crate) arch: Vec<usize>,
    pub(crate) weights: Vec<Matrix>,
    pub(crate) biases: Vec<Matrix>,
}

impl Gradient {
    /// Allocates a zeroed accumulator shaped from `network`'s architecture.
    pub fn zeros_like(network: &Network) -> Gradient {
        Gradient {
            arch: network.architecture().to_vec(),
            weights: network.weights.iter().map(|w| w.map(|_| 0.0)).collect(),
            biases: network.biases.iter().map(|b| b.map(|_| 0.0)).collect(),
        }
    }

    pub fn weight(&self, layer: usize) -> &Matrix {
        &self.weights[layer]
    }

    pub fn bias(&self, layer: usize) -> &Matrix {
        &self.biases[layer]
    }

    pub(crate) fn check_architecture(&self, arch: &[usize]) -> Result<()> {
        if self.arch != arch {
            return Err(Error::ArchitectureMismatch {
                expected: arch.to_vec(),
                found: self.arch.clone(),
            });
        }
        Ok(())
    }
}
