//! Multi-layer perceptron logic.
//!
//! This module contains network construction, inference and training.
//! The FFI layer in `ffi/` calls these functions.

pub mod activation;
pub mod forward;
pub mod init;
pub mod training;

pub use activation::Activation;
pub use forward::{forward_trace, layer_forward, predict, predict_batch};
pub use init::{create_layer, create_network, validate_config};
pub use training::{evaluate, mean_squared_error, train, train_epochs};
