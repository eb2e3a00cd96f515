//! Hyperexponential (finite mixture of exponentials) distribution
//!
//! A hyperexponential variate is drawn from one of `k` exponential
//! components, component `i` being selected with probability `p_i` and then
//! sampled at rate `lambda_i`. This crate provides the validated model and
//! the standard function set: density, cumulative probability, survival,
//! quantile, inverse survival, and the first four moments.
//!
//! # Numerical notes
//!
//! - The survival function is evaluated as its own exponential sum, never as
//!   `1 - cdf(x)`, so large-`x` queries keep full precision
//! - The quantile has no closed form for `k > 1`; it is recovered by a
//!   bracketed Newton search over the CDF, with the density as the
//!   derivative and bisection as the safeguard
//!
//! # Example
//!
//! ```rust
//! use hyperexp_dist::HyperExponential;
//!
//! // two fast service phases and a slow one
//! let dist = HyperExponential::<f64>::new(&[0.2, 0.3, 0.5], &[0.5, 1.0, 1.5]).unwrap();
//!
//! assert!((dist.pdf(0.0) - 1.15).abs() < 1e-12);
//! assert!((dist.mean() - 31.0 / 30.0).abs() < 1e-12);
//!
//! // quantile inverts the cdf
//! let x = dist.quantile(dist.cdf(2.0)).unwrap();
//! assert!((x - 2.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod model;

mod adapters;
mod evaluate;
mod moments;
mod quantile;

pub use error::{Error, Result};
pub use model::HyperExponential;

// Re-export the seams from hyperexp-core
pub use hyperexp_core::{ContinuousDistribution, DistributionMoments, Real, Tolerance};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Error, HyperExponential, Result};
    pub use hyperexp_core::{ContinuousDistribution, DistributionMoments, Real};
}
