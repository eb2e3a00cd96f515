//! Generic numeric trait for multi-precision distribution evaluation
//!
//! This module provides the type foundation for evaluating the same
//! algorithms at different floating-point widths (f32, f64, or an external
//! arbitrary-precision wrapper) without duplicating any code per width.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: [`Real`] only adds conversions on top of
//!   `num_traits::Float`; all arithmetic goes through the `Float` surface
//! - **Precision-keyed tolerances**: [`Tolerance`] derives its thresholds
//!   from the type's machine epsilon, so each width converges to what it
//!   can actually represent

use num_traits::Float;
use std::fmt::Debug;

/// Base trait for scalar types usable in distribution computations
///
/// `Float` already exposes the introspection the evaluation layer needs
/// (`epsilon`, `min_positive_value`, `max_value`, `infinity`); this trait
/// adds the infallible constant conversions the algorithms use.
pub trait Real: Float + Debug + Send + Sync + 'static {
    /// Convert an f64 constant into this type
    fn from_f64(val: f64) -> Self;

    /// Convert a count into this type
    fn from_usize(val: usize) -> Self;
}

impl Real for f64 {
    fn from_f64(val: f64) -> Self {
        val
    }

    fn from_usize(val: usize) -> Self {
        val as f64
    }
}

impl Real for f32 {
    fn from_f64(val: f64) -> Self {
        val as f32
    }

    fn from_usize(val: usize) -> Self {
        val as f32
    }
}

/// Convergence policy for iterative searches, keyed to the type's precision
///
/// The relative threshold is a small multiple of machine epsilon, so an f32
/// search stops at roughly single precision while an f64 search continues to
/// double precision. The absolute threshold only matters for roots near zero.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance<T> {
    /// Relative width threshold, scaled by the current estimate
    pub rel: T,
    /// Absolute width floor for roots near zero
    pub abs: T,
    /// Iteration budget before the search reports failure
    pub max_iters: usize,
}

impl<T: Real> Tolerance<T> {
    /// Tolerance derived from the type's machine epsilon
    pub fn for_precision() -> Self {
        let four = T::from_f64(4.0);
        Self {
            rel: T::epsilon() * four,
            abs: T::min_positive_value() * four,
            max_iters: 200,
        }
    }

    /// Converged when an interval of `width` around `estimate` is resolved
    pub fn is_converged(&self, estimate: T, width: T) -> bool {
        width.abs() <= self.rel * estimate.abs() + self.abs
    }
}

impl<T: Real> Default for Tolerance<T> {
    fn default() -> Self {
        Self::for_precision()
    }
}
