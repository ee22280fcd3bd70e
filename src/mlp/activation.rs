//! Activation functions and their derivatives.

use std::str::FromStr;

use crate::error::{NetworkError, NetworkResult};

/// Elementwise activation applied after each layer's affine transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Activation {
    Sigmoid,
    Tanh,
    Relu,
}

impl Activation {
    /// Look up an activation by name (`sigmoid`, `tanh`, `relu`).
    pub fn parse(name: &str) -> NetworkResult<Self> {
        Self::from_str(name).map_err(|_| NetworkError::UnknownActivation(name.to_string()))
    }

    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.max(0.0),
        }
    }

    /// Derivative expressed in terms of the activated output `y`, not the
    /// pre-activation input.
    #[inline]
    pub fn derivative(self, y: f64) -> f64 {
        match self {
            Activation::Sigmoid => y * (1.0 - y),
            Activation::Tanh => 1.0 - y * y,
            Activation::Relu => {
                if y > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}
