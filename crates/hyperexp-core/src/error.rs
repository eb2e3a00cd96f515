//! Error types for the hyperexp crates
//!
//! Provides a unified error type shared across the workspace.

use thiserror::Error;

/// Core error type for distribution and root-finding operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a constructor or function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Function argument outside its mathematical domain
    #[error("Domain error: {0}")]
    Domain(String),

    /// Iterative search exhausted its iteration budget
    #[error("Root search failed to converge after {iterations} iterations")]
    NoConvergence { iterations: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a probability outside [0, 1]
    pub fn invalid_probability(p: f64) -> Self {
        Self::Domain(format!("Probability {p} must be in [0, 1]"))
    }

    /// Create an error for mismatched sequence lengths
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidParameter(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidParameter(format!("{context} contains NaN or infinite values"))
    }
}
