//! Bracketed scalar root finding
//!
//! Two primitives used to invert monotone functions with no closed-form
//! inverse: an exponential bracket-expansion search that establishes a sign
//! change, and a safeguarded Newton iteration that refines it. Newton steps
//! that would leave the current bracket fall back to bisection, so the
//! search always terminates inside the interval established up front.

use crate::error::{Error, Result};
use crate::numeric::{Real, Tolerance};
use tracing::{debug, trace};

/// Default cap on bracket doublings
///
/// Enough to walk from 1 to the largest finite f64 value; the loop also
/// stops as soon as the upper bound stops being finite.
pub const DEFAULT_MAX_DOUBLINGS: usize = 1100;

/// An interval known to contain a root
#[derive(Debug, Clone, Copy)]
pub struct Bracket<T> {
    /// Lower endpoint, with `f(lo) <= 0`
    pub lo: T,
    /// Upper endpoint, with `f(hi) >= 0`
    pub hi: T,
}

/// Expand an upper bound geometrically until `f` changes sign
///
/// Requires `f(lo) <= 0` and `f` non-decreasing. Starting from `seed` (or 1
/// if the seed is not a usable positive finite value), the upper endpoint is
/// doubled until `f(hi) >= 0`; every rejected endpoint becomes the new lower
/// bound, so the returned bracket is as tight as the doubling allows.
pub fn bracket_upward<T, F>(mut f: F, lo: T, seed: T, max_doublings: usize) -> Result<Bracket<T>>
where
    T: Real,
    F: FnMut(T) -> T,
{
    let two = T::from_f64(2.0);
    let mut lo = lo;
    let mut hi = if seed.is_finite() && seed > lo && seed > T::zero() {
        seed
    } else {
        T::one()
    };

    for doubling in 0..max_doublings {
        if !hi.is_finite() {
            return Err(Error::Computation(
                "bracket expansion overflowed the representable range".to_string(),
            ));
        }
        let fh = f(hi);
        if fh.is_nan() {
            return Err(Error::Computation(
                "objective returned NaN during bracket expansion".to_string(),
            ));
        }
        if fh >= T::zero() {
            debug!(doublings = doubling, "bracketed root");
            return Ok(Bracket { lo, hi });
        }
        lo = hi;
        hi = hi * two;
    }

    Err(Error::NoConvergence {
        iterations: max_doublings,
    })
}

/// Refine a bracketed root with Newton steps, falling back to bisection
///
/// Requires `f(bracket.lo) <= 0 <= f(bracket.hi)` and `f` non-decreasing,
/// with `df` its derivative. A Newton step is taken whenever it lands
/// strictly inside the current bracket; otherwise the step is a bisection.
/// Converges when either the bracket width or the step size drops below the
/// tolerance, and fails with [`Error::NoConvergence`] when the iteration
/// budget runs out first.
pub fn newton_bisect<T, F, D>(mut f: F, mut df: D, bracket: Bracket<T>, tol: Tolerance<T>) -> Result<T>
where
    T: Real,
    F: FnMut(T) -> T,
    D: FnMut(T) -> T,
{
    let two = T::from_f64(2.0);
    let mut lo = bracket.lo;
    let mut hi = bracket.hi;
    let mut x = (lo + hi) / two;

    for iteration in 0..tol.max_iters {
        let fx = f(x);
        if fx.is_nan() {
            return Err(Error::Computation(
                "objective returned NaN during refinement".to_string(),
            ));
        }
        if fx == T::zero() {
            return Ok(x);
        }
        if fx < T::zero() {
            lo = x;
        } else {
            hi = x;
        }
        if tol.is_converged(x, hi - lo) {
            return Ok(x);
        }

        let slope = df(x);
        let newton = if slope > T::zero() { x - fx / slope } else { x };
        let next = if newton > lo && newton < hi {
            trace!(iteration, ?newton, "newton step");
            newton
        } else {
            let mid = (lo + hi) / two;
            trace!(iteration, ?mid, "bisection step");
            mid
        };

        if tol.is_converged(next, next - x) {
            return Ok(next);
        }
        x = next;
    }

    Err(Error::NoConvergence {
        iterations: tol.max_iters,
    })
}
