//! C FFI layer for native hosts.
//!
//! This module exports C ABI functions for hosts that load `PAMLDLL`
//! dynamically. All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `mlp` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.

use crate::error::NetworkError;

pub mod lifecycle;
pub mod logging;
pub mod predict;
pub mod simple;
pub mod train;

pub use lifecycle::{paml_mlp_create, paml_mlp_destroy, paml_mlp_num_inputs, paml_mlp_num_outputs};
pub use logging::paml_init_logging;
pub use predict::{paml_mlp_predict, paml_mlp_predict_batch};
pub use simple::Add;
pub use train::{paml_mlp_train, paml_mlp_train_epochs};

/// Success.
pub const PAML_OK: i32 = 0;
/// A required pointer argument was null.
pub const PAML_ERR_NULL: i32 = 1;
/// A buffer length did not match the network's shape.
pub const PAML_ERR_DIMENSION: i32 = 2;
/// An argument was rejected for any other reason.
pub const PAML_ERR_INVALID: i32 = 3;

/// Map a core error to its status code, logging it on the way out.
pub(crate) fn status_of(err: &NetworkError) -> i32 {
    tracing::warn!(%err, "FFI call failed");
    match err {
        NetworkError::DimensionMismatch { .. } => PAML_ERR_DIMENSION,
        NetworkError::UnknownActivation(_) | NetworkError::InvalidConfig(_) => PAML_ERR_INVALID,
    }
}
