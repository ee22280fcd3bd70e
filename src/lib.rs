//! PAML - native multi-layer perceptron plugin
//!
//! Builds as `PAMLDLL`, a C ABI library for game engines and other native
//! hosts, and as an rlib carrying the host-side loader used by `paml-host`.

// The library name is dictated by the hosts that bind it.
#![allow(non_snake_case)]

pub mod error;
pub mod ffi;
pub mod host;
pub mod logging;
pub mod mlp;
pub mod network;

pub use error::{NetworkError, PluginError};
pub use network::{Layer, Network, NetworkConfig};
