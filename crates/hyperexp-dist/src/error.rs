//! Error types for the distribution crate

use hyperexp_core::Real;
use num_traits::ToPrimitive;
use thiserror::Error;

/// Errors reported by construction and evaluation
#[derive(Error, Debug)]
pub enum Error {
    /// Mixture with no components
    #[error("Cannot build a mixture with no components")]
    EmptyMixture,

    /// Quantile argument outside [0, 1]
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Invalid constructor input
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Core computation error (root search, numerics)
    #[error("Core computation error: {0}")]
    Core(#[from] hyperexp_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check that a quantile argument lies in [0, 1]
    pub fn check_probability<T: Real>(p: T) -> Result<()> {
        if p.is_nan() || p < T::zero() || p > T::one() {
            return Err(Error::InvalidProbability {
                p: p.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }
}
