//! Error types for simulation setup.

use thiserror::Error;

/// Errors raised while validating a simulation run.
///
/// All of these are produced before the first integration step; the solve
/// loop itself never fails (non-finite states propagate through the samples
/// instead).
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("{what} must be > 0, got {value}")]
    NotPositive { what: &'static str, value: f64 },

    #[error("Non-finite configuration value for {what}: {value}")]
    NonFiniteConfig { what: &'static str, value: f64 },

    #[error("Unknown damping law: {id:?}")]
    UnknownDampingLaw { id: String },

    #[error("Step budget exceeded: {requested} steps requested, limit is {max}")]
    StepBudget { requested: usize, max: usize },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<dp_core::DpError> for SimError {
    fn from(e: dp_core::DpError) -> Self {
        match e {
            dp_core::DpError::NonFinite { what, value } => {
                SimError::NonFiniteConfig { what, value }
            }
            dp_core::DpError::InvalidArg { what } => SimError::InvalidConfig { what },
        }
    }
}
