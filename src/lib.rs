//! Hyperexponential distribution toolkit
//!
//! This crate re-exports the two workspace members:
//!
//! - [`hyperexp_core`] - numeric trait foundation, error types, and the
//!   bracketed root-finding primitives
//! - [`hyperexp_dist`] - the hyperexponential distribution itself
//!
//! # Example
//!
//! ```rust
//! use hyperexp::HyperExponential;
//!
//! let dist = HyperExponential::<f64>::new(&[0.2, 0.3, 0.5], &[0.5, 1.0, 1.5]).unwrap();
//!
//! let p = dist.cdf(1.0);
//! let x = dist.quantile(p).unwrap();
//! assert!((x - 1.0).abs() < 1e-9);
//! ```

pub use hyperexp_core::{
    Bracket, ContinuousDistribution, DistributionMoments, Real, Tolerance,
};
pub use hyperexp_dist::{Error, HyperExponential, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use hyperexp_core::{ContinuousDistribution, DistributionMoments, Real};
    pub use hyperexp_dist::{Error, HyperExponential, Result};
}
