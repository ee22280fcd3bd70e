//! Forward propagation.

use rayon::prelude::*;

use crate::error::{NetworkError, NetworkResult};
use crate::network::{Layer, Network};

#[inline]
pub(crate) fn check_len(expected: usize, actual: usize) -> NetworkResult<()> {
    if expected != actual {
        return Err(NetworkError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Compute `act(W * input + b)` for a single layer.
///
/// `input.len()` must equal `layer.inputs`; callers check this.
pub fn layer_forward(layer: &Layer, input: &[f64]) -> Vec<f64> {
    (0..layer.outputs)
        .map(|o| {
            let z = layer
                .row(o)
                .iter()
                .zip(input)
                .map(|(w, x)| w * x)
                .sum::<f64>()
                + layer.bias[o];
            layer.activation.apply(z)
        })
        .collect()
}

/// Run a forward pass and keep every layer's activated output.
///
/// Element 0 is the input itself, element `i + 1` is the output of layer `i`.
pub fn forward_trace(network: &Network, input: &[f64]) -> NetworkResult<Vec<Vec<f64>>> {
    check_len(network.num_inputs, input.len())?;

    let mut outputs = Vec::with_capacity(network.layers.len() + 1);
    outputs.push(input.to_vec());
    for layer in &network.layers {
        let next = layer_forward(layer, &outputs[outputs.len() - 1]);
        outputs.push(next);
    }
    Ok(outputs)
}

/// Predict the output for a single sample.
pub fn predict(network: &Network, input: &[f64]) -> NetworkResult<Vec<f64>> {
    check_len(network.num_inputs, input.len())?;

    let mut output = input.to_vec();
    for layer in &network.layers {
        output = layer_forward(layer, &output);
    }
    Ok(output)
}

/// Predict a flat row-major batch of samples in parallel.
///
/// Outputs are concatenated in input order.
pub fn predict_batch(network: &Network, inputs: &[f64]) -> NetworkResult<Vec<f64>> {
    if inputs.len() % network.num_inputs != 0 {
        let expected = (inputs.len() / network.num_inputs + 1) * network.num_inputs;
        return Err(NetworkError::DimensionMismatch {
            expected,
            actual: inputs.len(),
        });
    }

    let rows: Vec<Vec<f64>> = inputs
        .par_chunks_exact(network.num_inputs)
        .map(|sample| predict(network, sample))
        .collect::<NetworkResult<_>>()?;

    Ok(rows.into_iter().flatten().collect())
}
