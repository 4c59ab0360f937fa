use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::gradient::Gradient;

/// Feed-forward network over an architecture of layer widths.
///
/// For an architecture `[w0, w1, ..., wn]` the network owns `n` weight
/// matrices (`weights[i]` is `w_i x w_{i+1}`), `n` bias rows
/// (`biases[i]` is `1 x w_{i+1}`), and `n + 1` activation rows
/// (`activations[i]` is `1 x w_i`). `activations[0]` is the input buffer;
/// the last activation row holds the output of the most recent forward
/// pass. Parameters start zeroed; call `randomize` before training.
#[derive(Debug)]
pub struct Network {
    arch: Vec<usize>,
    pub(crate) weights: Vec<Matrix>,
    pub(crate) biases: Vec<Matrix>,
    activations: Vec<Matrix>,
}

impl Network {
    /// Builds a network from an ordered slice of at least two layer widths.
    pub fn new(architecture: &[usize]) -> Result<Network> {
        if architecture.len() < 2 {
            return Err(Error::BadArchitecture {
                layers: architecture.len(),
            });
        }
        let count = architecture.len() - 1;

        let mut weights = Vec::with_capacity(count);
        let mut biases = Vec::with_capacity(count);
        for i in 0..count {
            weights.push(Matrix::zeros(architecture[i], architecture[i + 1])?);
            biases.push(Matrix::zeros(1, architecture[i + 1])?);
        }
        let activations = architecture
            .iter()
            .map(|&width| Matrix::zeros(1, width))
            .collect::<Result<Vec<_>>>()?;

        Ok(Network {
            arch: architecture.to_vec(),
            weights,
            biases,
            activations,
        })
    }

    pub fn architecture(&self) -> &[usize] {
        &self.arch
    }

    /// Number of weight/bias layers (one less than the architecture length).
    pub fn layer_count(&self) -> usize {
        self.arch.len() - 1
    }

    pub fn weight(&self, layer: usize) -> &Matrix {
        &self.weights[layer]
    }

    pub fn weight_mut(&mut self, layer: usize) -> &mut Matrix {
        &mut self.weights[layer]
    }

    pub fn bias(&self, layer: usize) -> &Matrix {
        &self.biases[layer]
    }

    pub fn bias_mut(&mut self, layer: usize) -> &mut Matrix {
        &mut self.biases[layer]
    }

    /// Output row of the most recent forward pass.
    pub fn output(&self) -> &Matrix {
        &self.activations[self.layer_count()]
    }

    /// Randomizes every weight and bias uniform in `[low, high)`.
    /// Activation buffers are left untouched.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, low: f64, high: f64) {
        for i in 0..self.layer_count() {
            self.weights[i].randomize(rng, low, high);
            self.biases[i].randomize(rng, low, high);
        }
    }

    /// Copies `values` into the input activation row.
    pub fn set_input(&mut self, values: &[f64]) -> Result<()> {
        let width = self.arch[0];
        if values.len() != width {
            return Err(Error::BufferLength {
                rows: 1,
                cols: width,
                len: values.len(),
            });
        }
        self.activations[0].as_mut_slice().copy_from_slice(values);
        Ok(())
    }

    /// Propagates the current input through every layer:
    /// `activations[i+1] = sigmoid(activations[i] . weights[i] + biases[i])`.
    ///
    /// Pure function of the input row and the parameters; overwrites all
    /// downstream activation rows and has no other effect. The layer shapes
    /// are fixed at construction, so a constructed network cannot fail here.
    pub fn forward(&mut self) -> Result<()> {
        for i in 0..self.layer_count() {
            let z = self.activations[i].dot(&self.weights[i])?;
            let mut next = z.checked_add(&self.biases[i])?;
            next.apply_sigmoid();
            self.activations[i + 1] = next;
        }
        Ok(())
    }

    /// Mean squared error of the network over a labeled dataset.
    ///
    /// `inputs` is `n x arch[0]`, `targets` is `n x arch[last]` with the
    /// same row count. Each input row is loaded, propagated, and compared
    /// against its target row; the summed squared error is divided by `n`.
    /// Evaluation overwrites the activation buffers as a side effect.
    pub fn cost(&mut self, inputs: &Matrix, targets: &Matrix) -> Result<f64> {
        if inputs.rows() != targets.rows() {
            return Err(Error::ShapeMismatch {
                left: inputs.shape(),
                right: targets.shape(),
            });
        }
        if inputs.cols() != self.arch[0] {
            return Err(Error::ShapeMismatch {
                left: inputs.shape(),
                right: (inputs.rows(), self.arch[0]),
            });
        }
        let output_width = self.arch[self.layer_count()];
        if targets.cols() != output_width {
            return Err(Error::ShapeMismatch {
                left: targets.shape(),
                right: (targets.rows(), output_width),
            });
        }

        let n = inputs.rows();
        let mut total = 0.0;
        for i in 0..n {
            self.activations[0] = inputs.row(i)?;
            self.forward()?;
            let out = &self.activations[self.layer_count()];
            for j in 0..output_width {
                let d = out[(0, j)] - targets[(i, j)];
                total += d * d;
            }
        }
        Ok(total / n as f64)
    }

    /// Estimates the cost gradient by one-sided finite differences.
    ///
    /// Takes one baseline cost, then visits every trainable scalar in a
    /// fixed order (layer by layer; within a layer all weight elements
    /// row-major, then all bias elements row-major): saves the value, adds
    /// `epsilon`, re-evaluates the cost, writes
    /// `(perturbed - base) / epsilon` into the matching accumulator slot,
    /// and restores the saved value exactly before moving on.
    pub fn estimate_gradient(
        &mut self,
        gradient: &mut Gradient,
        epsilon: f64,
        inputs: &Matrix,
        targets: &Matrix,
    ) -> Result<()> {
        gradient.check_architecture(&self.arch)?;
        let base = self.cost(inputs, targets)?;

        for layer in 0..self.layer_count() {
            for i in 0..self.weights[layer].len() {
                let saved = self.weights[layer][i];
                self.weights[layer][i] = saved + epsilon;
                let perturbed = self.cost(inputs, targets)?;
                gradient.weights[layer][i] = (perturbed - base) / epsilon;
                self.weights[layer][i] = saved;
            }

            for i in 0..self.biases[layer].len() {
                let saved = self.biases[layer][i];
                self.biases[layer][i] = saved + epsilon;
                let perturbed = self.cost(inputs, targets)?;
                gradient.biases[layer][i] = (perturbed - base) / epsilon;
                self.biases[layer][i] = saved;
            }
        }
        Ok(())
    }

    /// Descends every parameter along the accumulated gradient:
    /// `parameter -= learning_rate * slot`, in the same order
    /// `estimate_gradient` visits them.
    pub fn apply_gradient(&mut self, gradient: &Gradient, learning_rate: f64) -> Result<()> {
        gradient.check_architecture(&self.arch)?;

        for layer in 0..self.layer_count() {
            let slots = gradient.weights[layer].as_slice();
            for (w, g) in self.weights[layer].as_mut_slice().iter_mut().zip(slots) {
                *w -= learning_rate * g;
            }

            let slots = gradient.biases[layer].as_slice();
            for (b, g) in self.biases[layer].as_mut_slice().iter_mut().zip(slots) {
                *b -= learning_rate * g;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Network {
    /// Layer-indexed dump of every weight and bias matrix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.layer_count() {
            writeln!(f, "w[{i}] =")?;
            writeln!(f, "{}", self.weights[i])?;
            writeln!(f, "b[{i}] =")?;
            writeln!(f, "{}", self.biases[i])?;
        }
        Ok(())
    }
}
