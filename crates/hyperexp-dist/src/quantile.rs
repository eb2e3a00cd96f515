//! The quantile engine
//!
//! For a single phase the quantile is the plain exponential closed form.
//! For `k > 1` the CDF is strictly increasing but has no closed-form
//! inverse, so the quantile is recovered numerically: an exponential
//! doubling search establishes a bracket, then a safeguarded Newton
//! iteration (density as the derivative, bisection as the fallback)
//! refines it to the precision the scalar type can hold.
//!
//! Both inverting functions share the machinery; the complement form
//! inverts the survival sum directly, so deep-tail arguments keep their
//! precision instead of being folded through `1 - q`.

use crate::error::{Error, Result};
use crate::model::HyperExponential;
use hyperexp_core::{roots, Real, Tolerance};
use tracing::debug;

impl<T: Real> HyperExponential<T> {
    /// Inverse CDF: the `x` with `cdf(x) = p`
    ///
    /// `p = 0` and `p = 1` return 0 and `+inf` without searching; arguments
    /// outside `[0, 1]` are a domain error. Fails with a convergence error
    /// only if the root search exhausts its iteration budget.
    pub fn quantile(&self, p: T) -> Result<T> {
        Error::check_probability(p)?;
        if p == T::zero() {
            return Ok(T::zero());
        }
        if p == T::one() {
            return Ok(T::infinity());
        }
        // single phase: plain exponential closed form
        if self.num_phases() == 1 {
            return Ok(-(-p).ln_1p() / self.rates()[0]);
        }
        let seed = -(-p).ln_1p() * self.mean();
        self.invert_monotone(|x| self.cdf(x) - p, seed)
    }

    /// Inverse survival function: the `x` with `survival(x) = q`
    ///
    /// Mirror image of [`Self::quantile`]: `q = 1` maps to 0 and `q = 0`
    /// to `+inf`.
    pub fn quantile_complement(&self, q: T) -> Result<T> {
        Error::check_probability(q)?;
        if q == T::one() {
            return Ok(T::zero());
        }
        if q == T::zero() {
            return Ok(T::infinity());
        }
        if self.num_phases() == 1 {
            return Ok(-q.ln() / self.rates()[0]);
        }
        let seed = -q.ln() * self.mean();
        self.invert_monotone(|x| q - self.survival(x), seed)
    }

    /// Root-find a non-decreasing objective with `g(0) <= 0`
    ///
    /// The seed is the quantile of the single exponential matching the
    /// mixture's mean; the doubling search corrects it by whole octaves
    /// when the mixture's tails put the root elsewhere.
    fn invert_monotone<F>(&self, objective: F, seed: T) -> Result<T>
    where
        F: Fn(T) -> T,
    {
        let tol = Tolerance::for_precision();
        let bracket =
            roots::bracket_upward(&objective, T::zero(), seed, roots::DEFAULT_MAX_DOUBLINGS)?;
        debug!(lo = ?bracket.lo, hi = ?bracket.hi, "refining quantile bracket");
        let root = roots::newton_bisect(&objective, |x| self.pdf(x), bracket, tol)?;
        Ok(root)
    }
}
