//! Core traits and numeric utilities for the hyperexp crates
//!
//! This crate provides the foundation the distribution layer builds on:
//!
//! 1. **Numeric types** - the [`Real`] trait bounding the scalar type, plus
//!    the precision-keyed [`Tolerance`] policy
//! 2. **Errors** - a unified [`Error`] type shared by all hyperexp crates
//! 3. **Root finding** - bracket expansion and safeguarded Newton iteration
//!    used to invert monotone functions
//! 4. **Traits** - the [`ContinuousDistribution`] and [`DistributionMoments`]
//!    seams generic callers program against
//!
//! # Design Philosophy
//!
//! - **Generic over precision**: algorithms are written once against [`Real`];
//!   tolerances scale with the type's machine epsilon
//! - **No hidden state**: every function is pure and reads only its arguments
//! - **Explicit failure**: iteration budgets are bounded and exhaustion is an
//!   error, never a silently inaccurate value

pub mod error;
pub mod numeric;
pub mod roots;
pub mod traits;

pub use error::{Error, Result};
pub use numeric::{Real, Tolerance};
pub use roots::{bracket_upward, newton_bisect, Bracket, DEFAULT_MAX_DOUBLINGS};
pub use traits::{ContinuousDistribution, DistributionMoments};
