//! Online backpropagation.
//!
//! One call to `train` is one stochastic gradient step on a single sample:
//! - Forward pass, recording every layer's activated output
//! - Output error is `target - output`
//! - Walk the layers backwards, scaling the error by the activation derivative
//!   and nudging weights and biases by `learning_rate * delta`
//! - The error handed to the previous layer uses the weights as they were
//!   before this step's update

use rayon::prelude::*;

use crate::error::NetworkResult;
use crate::mlp::forward::{check_len, forward_trace, predict};
use crate::network::Network;

/// Mean squared error between two equally sized slices.
pub fn mean_squared_error(output: &[f64], target: &[f64]) -> f64 {
    if output.is_empty() {
        return 0.0;
    }
    output
        .iter()
        .zip(target)
        .map(|(o, t)| (t - o) * (t - o))
        .sum::<f64>()
        / output.len() as f64
}

/// Run one gradient step and return the sample's mean squared error before
/// the update.
pub fn train(network: &mut Network, input: &[f64], target: &[f64]) -> NetworkResult<f64> {
    check_len(network.num_outputs, target.len())?;
    let outputs = forward_trace(network, input)?;

    let prediction = &outputs[outputs.len() - 1];
    let mse = mean_squared_error(prediction, target);
    let mut error: Vec<f64> = target
        .iter()
        .zip(prediction)
        .map(|(t, o)| t - o)
        .collect();

    let learning_rate = network.learning_rate;
    for i in (0..network.layers.len()).rev() {
        let layer = &mut network.layers[i];
        let activated = &outputs[i + 1];
        let layer_input = &outputs[i];

        let delta: Vec<f64> = error
            .iter()
            .zip(activated)
            .map(|(e, y)| layer.activation.derivative(*y) * e)
            .collect();

        // Propagate before touching the weights
        if i != 0 {
            let mut previous = vec![0.0; layer.inputs];
            for (o, d) in delta.iter().enumerate() {
                for (p, w) in previous.iter_mut().zip(layer.row(o)) {
                    *p += w * d;
                }
            }
            error = previous;
        }

        for (o, d) in delta.iter().enumerate() {
            let step = learning_rate * d;
            for (j, x) in layer_input.iter().enumerate() {
                let idx = layer.index(o, j);
                layer.weights[idx] += step * x;
            }
            layer.bias[o] += step;
        }
    }

    Ok(mse)
}

/// Train on every sample in order for `epochs` passes.
///
/// `inputs` and `targets` are flat row-major matrices. Returns the mean
/// squared error of the last epoch, or 0 when nothing was trained.
pub fn train_epochs(
    network: &mut Network,
    inputs: &[f64],
    targets: &[f64],
    epochs: u32,
) -> NetworkResult<f64> {
    let samples = sample_count(network, inputs, targets)?;
    if samples == 0 || epochs == 0 {
        return Ok(0.0);
    }

    let (n_in, n_out) = (network.num_inputs, network.num_outputs);
    let mut last = 0.0;
    for epoch in 0..epochs {
        let mut total = 0.0;
        for s in 0..samples {
            total += train(
                network,
                &inputs[s * n_in..(s + 1) * n_in],
                &targets[s * n_out..(s + 1) * n_out],
            )?;
        }
        last = total / samples as f64;
        tracing::trace!(epoch, mse = last, "epoch finished");
    }

    tracing::debug!(epochs, samples, mse = last, "training finished");
    Ok(last)
}

/// Mean of the per-sample squared error over a dataset, evaluated in parallel.
pub fn evaluate(network: &Network, inputs: &[f64], targets: &[f64]) -> NetworkResult<f64> {
    let samples = sample_count(network, inputs, targets)?;
    if samples == 0 {
        return Ok(0.0);
    }

    let total = inputs
        .par_chunks_exact(network.num_inputs)
        .zip(targets.par_chunks_exact(network.num_outputs))
        .map(|(input, target)| predict(network, input).map(|out| mean_squared_error(&out, target)))
        .try_reduce(|| 0.0, |a, b| Ok(a + b))?;

    Ok(total / samples as f64)
}

/// Number of samples in a dataset, checking that inputs and targets agree.
fn sample_count(network: &Network, inputs: &[f64], targets: &[f64]) -> NetworkResult<usize> {
    let samples = inputs.len() / network.num_inputs;
    check_len(samples * network.num_inputs, inputs.len())?;
    check_len(samples * network.num_outputs, targets.len())?;
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use crate::mlp::{create_network, Activation};
    use crate::network::{Layer, NetworkConfig};

    fn single_neuron(activation: Activation) -> Network {
        Network {
            num_inputs: 1,
            num_outputs: 1,
            learning_rate: 0.5,
            layers: vec![Layer {
                inputs: 1,
                outputs: 1,
                weights: vec![1.0],
                bias: vec![0.0],
                activation,
            }],
        }
    }

    #[test]
    fn test_mean_squared_error() {
        assert_eq!(mean_squared_error(&[1.0, 3.0], &[0.0, 1.0]), 2.5);
        assert_eq!(mean_squared_error(&[], &[]), 0.0);
    }

    #[test]
    fn test_single_step_update() {
        // relu(1 * 2 + 0) = 2, target 3 -> error 1, delta 1
        let mut network = single_neuron(Activation::Relu);
        let mse = train(&mut network, &[2.0], &[3.0]).unwrap();
        assert_eq!(mse, 1.0);
        // w += 0.5 * 1 * 2, b += 0.5 * 1
        assert_eq!(network.layers[0].weights, vec![2.0]);
        assert_eq!(network.layers[0].bias, vec![0.5]);
    }

    #[test]
    fn test_dead_relu_does_not_move() {
        let mut network = single_neuron(Activation::Relu);
        train(&mut network, &[-2.0], &[3.0]).unwrap();
        assert_eq!(network.layers[0].weights, vec![1.0]);
        assert_eq!(network.layers[0].bias, vec![0.0]);
    }

    #[test]
    fn test_backprop_uses_pre_update_weights() {
        // 1 -> 1 -> 1 relu chain, all weights 1, zero bias
        let layer = Layer {
            inputs: 1,
            outputs: 1,
            weights: vec![1.0],
            bias: vec![0.0],
            activation: Activation::Relu,
        };
        let mut network = Network {
            num_inputs: 1,
            num_outputs: 1,
            learning_rate: 1.0,
            layers: vec![layer.clone(), layer],
        };

        // forward: 1 -> 1 -> 1, error = 2 - 1 = 1
        train(&mut network, &[1.0], &[2.0]).unwrap();
        // output layer: w = 1 + 1 * 1 * 1 = 2
        assert_eq!(network.layers[1].weights, vec![2.0]);
        // hidden layer sees error 1 * w_old(1) = 1, so w = 1 + 1 = 2
        // (with the updated weight it would have been 3)
        assert_eq!(network.layers[0].weights, vec![2.0]);
    }

    #[test]
    fn test_train_dimension_checks() {
        let mut network = single_neuron(Activation::Tanh);
        assert_eq!(
            train(&mut network, &[1.0], &[1.0, 2.0]),
            Err(NetworkError::DimensionMismatch {
                expected: 1,
                actual: 2
            })
        );
        assert!(train(&mut network, &[1.0, 2.0], &[1.0]).is_err());
        assert!(train_epochs(&mut network, &[1.0, 2.0], &[1.0], 1).is_err());
    }

    #[test]
    fn test_train_epochs_zero() {
        let mut network = single_neuron(Activation::Sigmoid);
        assert_eq!(train_epochs(&mut network, &[1.0], &[1.0], 0).unwrap(), 0.0);
        assert_eq!(train_epochs(&mut network, &[], &[], 10).unwrap(), 0.0);
        assert_eq!(network.layers[0].weights, vec![1.0]);
    }

    #[test]
    fn test_learns_logical_and() {
        let config = NetworkConfig {
            num_inputs: 2,
            num_outputs: 1,
            num_hidden_layers: 1,
            neurons_per_hidden_layer: 4,
            learning_rate: 0.5,
            activation: Activation::Sigmoid,
        };
        let mut network = create_network(&config, Some(3)).unwrap();
        let inputs = [0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0];
        let targets = [0.0, 0.0, 0.0, 1.0];

        let before = evaluate(&network, &inputs, &targets).unwrap();
        train_epochs(&mut network, &inputs, &targets, 5000).unwrap();
        let after = evaluate(&network, &inputs, &targets).unwrap();

        assert!(after < before, "error should drop: {before} -> {after}");
        assert!(after < 0.05, "AND should be learned, mse = {after}");
        let yes = predict(&network, &[1.0, 1.0]).unwrap()[0];
        let no = predict(&network, &[0.0, 1.0]).unwrap()[0];
        assert!(yes > no);
    }

    #[test]
    fn test_evaluate_matches_sequential() {
        let network = single_neuron(Activation::Relu);
        // predictions 1, 2 vs targets 0, 0
        let mse = evaluate(&network, &[1.0, 2.0], &[0.0, 0.0]).unwrap();
        assert_eq!(mse, 2.5);
    }
}
