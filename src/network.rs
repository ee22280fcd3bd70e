//! Core network structures.

use crate::mlp::Activation;

/// A fully connected layer.
///
/// `weights` is row-major: row `o` holds the weights feeding output neuron `o`,
/// so its length is `outputs * inputs`.
#[derive(Clone, Debug)]
pub struct Layer {
    pub inputs: usize,
    pub outputs: usize,
    pub weights: Vec<f64>,
    pub bias: Vec<f64>,
    pub activation: Activation,
}

impl Layer {
    /// Get the linear index of the weight connecting `input` to `output`
    #[inline]
    pub fn index(&self, output: usize, input: usize) -> usize {
        output * self.inputs + input
    }

    /// Weights feeding a single output neuron.
    #[inline]
    pub fn row(&self, output: usize) -> &[f64] {
        let start = output * self.inputs;
        &self.weights[start..start + self.inputs]
    }
}

/// Shape and hyperparameters of a multi-layer perceptron.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    pub num_inputs: usize,
    pub num_outputs: usize,
    pub num_hidden_layers: usize,
    pub neurons_per_hidden_layer: usize,
    pub learning_rate: f64,
    pub activation: Activation,
}

/// The internal state of a multi-layer perceptron
#[derive(Clone, Debug)]
pub struct Network {
    pub num_inputs: usize,
    pub num_outputs: usize,
    pub learning_rate: f64,
    pub layers: Vec<Layer>,
}
