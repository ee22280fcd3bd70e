//! Training FFI functions.

use super::{status_of, PAML_ERR_NULL, PAML_OK};
use crate::mlp;
use crate::network::Network;

/// Runs one backpropagation step on a single sample.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Network, or null
/// - `input` must point to `input_len` readable doubles
/// - `target` must point to `target_len` readable doubles
///
/// # Returns
/// 0 on success, 1 on a null pointer, 2 on a length mismatch.
#[no_mangle]
pub unsafe extern "C" fn paml_mlp_train(
    ptr: *mut Network,
    input: *const f64,
    input_len: usize,
    target: *const f64,
    target_len: usize,
) -> i32 {
    if ptr.is_null() || input.is_null() || target.is_null() {
        return PAML_ERR_NULL;
    }

    let network = &mut *ptr;
    let input = std::slice::from_raw_parts(input, input_len);
    let target = std::slice::from_raw_parts(target, target_len);
    match mlp::train(network, input, target) {
        Ok(_) => PAML_OK,
        Err(err) => status_of(&err),
    }
}

/// Trains on a row-major dataset for `epochs` passes.
///
/// The mean squared error of the final epoch is written to `out_mse` when it
/// is not null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Network, or null
/// - `inputs` must point to `inputs_len` readable doubles
/// - `targets` must point to `targets_len` readable doubles
/// - `out_mse` must be null or point to a writable double
///
/// # Returns
/// 0 on success, 1 on a null pointer, 2 if inputs and targets do not describe
/// the same number of samples.
#[no_mangle]
pub unsafe extern "C" fn paml_mlp_train_epochs(
    ptr: *mut Network,
    inputs: *const f64,
    inputs_len: usize,
    targets: *const f64,
    targets_len: usize,
    epochs: u32,
    out_mse: *mut f64,
) -> i32 {
    if ptr.is_null() || inputs.is_null() || targets.is_null() {
        return PAML_ERR_NULL;
    }

    let network = &mut *ptr;
    let inputs = std::slice::from_raw_parts(inputs, inputs_len);
    let targets = std::slice::from_raw_parts(targets, targets_len);
    match mlp::train_epochs(network, inputs, targets, epochs) {
        Ok(mse) => {
            if !out_mse.is_null() {
                *out_mse = mse;
            }
            PAML_OK
        }
        Err(err) => status_of(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle::{paml_mlp_create, paml_mlp_destroy};
    use crate::ffi::predict::paml_mlp_predict;
    use crate::ffi::PAML_ERR_DIMENSION;
    use std::ffi::CString;
    use std::ptr;

    fn create() -> *mut Network {
        let name = CString::new("sigmoid").unwrap();
        unsafe { paml_mlp_create(2, 1, 1, 4, 0.5, name.as_ptr(), 11) }
    }

    #[test]
    fn test_train_changes_weights() {
        let network = create();
        unsafe {
            let before = (&*network).layers[1].weights.clone();
            let status = paml_mlp_train(network, [1.0, 0.0].as_ptr(), 2, [1.0].as_ptr(), 1);
            assert_eq!(status, PAML_OK);
            let after = &(&*network).layers[1].weights;
            assert_ne!(after, &before);
            paml_mlp_destroy(network);
        }
    }

    #[test]
    fn test_train_epochs_learns_or() {
        let network = create();
        let inputs = [0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0];
        let targets = [0.0, 1.0, 1.0, 1.0];
        let mut mse = f64::NAN;
        unsafe {
            let status = paml_mlp_train_epochs(
                network,
                inputs.as_ptr(),
                8,
                targets.as_ptr(),
                4,
                4000,
                &mut mse,
            );
            assert_eq!(status, PAML_OK);
            assert!(mse < 0.05, "mse = {mse}");

            let mut out = [0.0];
            paml_mlp_predict(network, [0.0, 0.0].as_ptr(), 2, out.as_mut_ptr(), 1);
            assert!(out[0] < 0.5);
            paml_mlp_predict(network, [1.0, 0.0].as_ptr(), 2, out.as_mut_ptr(), 1);
            assert!(out[0] > 0.5);

            paml_mlp_destroy(network);
        }
    }

    #[test]
    fn test_train_epochs_null_mse_is_allowed() {
        let network = create();
        unsafe {
            let status = paml_mlp_train_epochs(
                network,
                [1.0, 1.0].as_ptr(),
                2,
                [1.0].as_ptr(),
                1,
                3,
                ptr::null_mut(),
            );
            assert_eq!(status, PAML_OK);
            paml_mlp_destroy(network);
        }
    }

    #[test]
    fn test_train_errors() {
        let network = create();
        unsafe {
            assert_eq!(
                paml_mlp_train(network, [1.0].as_ptr(), 1, [1.0].as_ptr(), 1),
                PAML_ERR_DIMENSION
            );
            assert_eq!(
                paml_mlp_train_epochs(
                    network,
                    [1.0, 1.0, 0.0, 0.0].as_ptr(),
                    4,
                    [1.0].as_ptr(),
                    1,
                    1,
                    ptr::null_mut()
                ),
                PAML_ERR_DIMENSION
            );
            assert_eq!(
                paml_mlp_train(ptr::null_mut(), [1.0].as_ptr(), 1, [1.0].as_ptr(), 1),
                PAML_ERR_NULL
            );
            paml_mlp_destroy(network);
        }
    }
}
