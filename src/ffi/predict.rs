//! Inference FFI functions.

use super::{status_of, PAML_ERR_DIMENSION, PAML_ERR_NULL, PAML_OK};
use crate::mlp;
use crate::network::Network;

/// Predicts the output of a single sample.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Network, or null
/// - `input` must point to `input_len` readable doubles
/// - `output` must point to `output_len` writable doubles
///
/// # Returns
/// 0 on success, 1 on a null pointer, 2 if `input_len` differs from the
/// network's input count or `output_len` is smaller than its output count.
#[no_mangle]
pub unsafe extern "C" fn paml_mlp_predict(
    ptr: *const Network,
    input: *const f64,
    input_len: usize,
    output: *mut f64,
    output_len: usize,
) -> i32 {
    if ptr.is_null() || input.is_null() || output.is_null() {
        return PAML_ERR_NULL;
    }

    let network = &*ptr;
    if output_len < network.num_outputs {
        return PAML_ERR_DIMENSION;
    }

    let input = std::slice::from_raw_parts(input, input_len);
    match mlp::predict(network, input) {
        Ok(result) => {
            let out = std::slice::from_raw_parts_mut(output, result.len());
            out.copy_from_slice(&result);
            PAML_OK
        }
        Err(err) => status_of(&err),
    }
}

/// Predicts a batch of samples laid out row-major in `inputs`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Network, or null
/// - `inputs` must point to `inputs_len` readable doubles
/// - `outputs` must point to `outputs_len` writable doubles
///
/// # Returns
/// 0 on success, 1 on a null pointer, 2 if `inputs_len` is not a multiple of
/// the input count or `outputs` cannot hold every prediction.
#[no_mangle]
pub unsafe extern "C" fn paml_mlp_predict_batch(
    ptr: *const Network,
    inputs: *const f64,
    inputs_len: usize,
    outputs: *mut f64,
    outputs_len: usize,
) -> i32 {
    if ptr.is_null() || inputs.is_null() || outputs.is_null() {
        return PAML_ERR_NULL;
    }

    let network = &*ptr;
    let samples = inputs_len / network.num_inputs;
    if outputs_len < samples * network.num_outputs {
        return PAML_ERR_DIMENSION;
    }

    let inputs = std::slice::from_raw_parts(inputs, inputs_len);
    match mlp::predict_batch(network, inputs) {
        Ok(result) => {
            let out = std::slice::from_raw_parts_mut(outputs, result.len());
            out.copy_from_slice(&result);
            PAML_OK
        }
        Err(err) => status_of(&err),
    }
}
