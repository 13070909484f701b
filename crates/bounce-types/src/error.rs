//! Error types for simulation operations.

use thiserror::Error;

/// Errors that can occur while configuring or running a simulation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Requested simulation kind is not supported.
    #[error("unsupported simulation type: {0}")]
    UnsupportedSimulation(String),

    /// Invalid timestep.
    #[error("invalid timestep: {0} (must be positive and finite)")]
    InvalidTimestep(f64),

    /// Invalid configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },

    /// Invalid body parameters.
    #[error("invalid body: {reason}")]
    InvalidBody {
        /// Description of what's wrong with the body.
        reason: String,
    },

    /// Simulation diverged (`NaN` or `Inf` detected).
    #[error("simulation diverged: {reason}")]
    Diverged {
        /// Description of what went wrong.
        reason: String,
    },
}

impl SimError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an invalid body error.
    #[must_use]
    pub fn invalid_body(reason: impl Into<String>) -> Self {
        Self::InvalidBody {
            reason: reason.into(),
        }
    }

    /// Create a diverged error.
    #[must_use]
    pub fn diverged(reason: impl Into<String>) -> Self {
        Self::Diverged {
            reason: reason.into(),
        }
    }

    /// Check if this is an unsupported-simulation error.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedSimulation(_))
    }

    /// Check if this is a divergence error.
    #[must_use]
    pub fn is_diverged(&self) -> bool {
        matches!(self, Self::Diverged { .. })
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. } | Self::InvalidTimestep(_))
    }
}
