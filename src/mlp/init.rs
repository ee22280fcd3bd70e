//! Network construction and weight initialisation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{NetworkError, NetworkResult};
use crate::mlp::Activation;
use crate::network::{Layer, Network, NetworkConfig};

/// Create a layer with weights and biases drawn from `U(-1, 1) / sqrt(inputs)`.
pub fn create_layer<R: Rng>(
    inputs: usize,
    outputs: usize,
    activation: Activation,
    rng: &mut R,
) -> Layer {
    let scale = (inputs as f64).sqrt();
    let weights = (0..inputs * outputs)
        .map(|_| rng.gen_range(-1.0..=1.0) / scale)
        .collect();
    let bias = (0..outputs)
        .map(|_| rng.gen_range(-1.0..=1.0) / scale)
        .collect();

    Layer {
        inputs,
        outputs,
        weights,
        bias,
        activation,
    }
}

/// Check the configuration before any allocation happens.
pub fn validate_config(config: &NetworkConfig) -> NetworkResult<()> {
    if config.num_inputs == 0 {
        return Err(NetworkError::InvalidConfig(
            "num_inputs must be positive".to_string(),
        ));
    }
    if config.num_outputs == 0 {
        return Err(NetworkError::InvalidConfig(
            "num_outputs must be positive".to_string(),
        ));
    }
    if config.num_hidden_layers > 0 && config.neurons_per_hidden_layer == 0 {
        return Err(NetworkError::InvalidConfig(
            "hidden layers need at least one neuron".to_string(),
        ));
    }
    if !config.learning_rate.is_finite() || config.learning_rate <= 0.0 {
        return Err(NetworkError::InvalidConfig(format!(
            "learning rate must be finite and positive, got {}",
            config.learning_rate
        )));
    }
    Ok(())
}

/// Build a network from `config`.
///
/// Topology: `inputs -> hidden -> ... -> hidden -> outputs`, or a single
/// `inputs -> outputs` layer when there are no hidden layers. Every layer
/// shares the configured activation. The same `seed` always yields the same
/// weights; `None` seeds from entropy.
pub fn create_network(config: &NetworkConfig, seed: Option<u64>) -> NetworkResult<Network> {
    validate_config(config)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut layers = Vec::with_capacity(config.num_hidden_layers + 1);
    let mut width = config.num_inputs;
    for _ in 0..config.num_hidden_layers {
        layers.push(create_layer(
            width,
            config.neurons_per_hidden_layer,
            config.activation,
            &mut rng,
        ));
        width = config.neurons_per_hidden_layer;
    }
    layers.push(create_layer(
        width,
        config.num_outputs,
        config.activation,
        &mut rng,
    ));

    tracing::debug!(
        inputs = config.num_inputs,
        outputs = config.num_outputs,
        layers = layers.len(),
        activation = %config.activation,
        "created network"
    );

    Ok(Network {
        num_inputs: config.num_inputs,
        num_outputs: config.num_outputs,
        learning_rate: config.learning_rate,
        layers,
    })
}
