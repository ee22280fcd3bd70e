//! Network creation, destruction, and shape queries.

use std::ffi::{c_char, CStr};

use crate::mlp::{create_network, Activation};
use crate::network::{Network, NetworkConfig};

/// Creates a new network and returns an opaque pointer.
///
/// `activation` is a NUL-terminated name: `sigmoid`, `tanh` or `relu`.
/// A `seed` of 0 initialises the weights from entropy; any other value is
/// reproducible.
///
/// # Safety
/// - `activation` must be a valid NUL-terminated string, or null
/// - The returned pointer must eventually be freed with `paml_mlp_destroy()`
///
/// # Returns
/// A pointer to a new Network, or null if the activation is unknown or the
/// configuration is invalid.
#[no_mangle]
pub unsafe extern "C" fn paml_mlp_create(
    num_inputs: u32,
    num_outputs: u32,
    num_hidden_layers: u32,
    neurons_per_hidden_layer: u32,
    learning_rate: f64,
    activation: *const c_char,
    seed: u64,
) -> *mut Network {
    if activation.is_null() {
        return std::ptr::null_mut();
    }

    let Ok(name) = CStr::from_ptr(activation).to_str() else {
        tracing::warn!("activation name is not valid UTF-8");
        return std::ptr::null_mut();
    };

    let activation = match Activation::parse(name) {
        Ok(activation) => activation,
        Err(err) => {
            tracing::warn!(%err, "paml_mlp_create failed");
            return std::ptr::null_mut();
        }
    };

    let config = NetworkConfig {
        num_inputs: num_inputs as usize,
        num_outputs: num_outputs as usize,
        num_hidden_layers: num_hidden_layers as usize,
        neurons_per_hidden_layer: neurons_per_hidden_layer as usize,
        learning_rate,
        activation,
    };
    let seed = if seed == 0 { None } else { Some(seed) };

    match create_network(&config, seed) {
        Ok(network) => Box::into_raw(Box::new(network)),
        Err(err) => {
            tracing::warn!(%err, "paml_mlp_create failed");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a network and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `paml_mlp_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn paml_mlp_destroy(ptr: *mut Network) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Number of values a single input sample must have. Returns 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Network, or null
#[no_mangle]
pub unsafe extern "C" fn paml_mlp_num_inputs(ptr: *const Network) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).num_inputs as u32
}

/// Number of values a single prediction produces. Returns 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Network, or null
#[no_mangle]
pub unsafe extern "C" fn paml_mlp_num_outputs(ptr: *const Network) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).num_outputs as u32
}
