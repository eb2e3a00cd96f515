//! Density, cumulative probability, and survival
//!
//! All three are weighted sums of per-component exponential terms. Every
//! term is non-negative, so plain accumulation is stable; the one hazard is
//! cancellation against 1, which is why the survival function is computed
//! as its own sum rather than as `1 - cdf(x)`.

use crate::model::HyperExponential;
use hyperexp_core::Real;

impl<T: Real> HyperExponential<T> {
    /// Density at `x`: `sum_i p_i * lambda_i * exp(-lambda_i * x)`
    ///
    /// Zero for `x < 0` (outside the support, not an error). At `x = 0`
    /// every exponential factor is exactly 1 and the density reduces to the
    /// weighted mean rate.
    pub fn pdf(&self, x: T) -> T {
        if x < T::zero() {
            return T::zero();
        }
        let mut sum = T::zero();
        for (&weight, &rate) in self.probabilities().iter().zip(self.rates()) {
            sum = sum + weight * rate * (-rate * x).exp();
        }
        sum
    }

    /// Natural log of the density
    ///
    /// `-inf` outside the support and where all components have decayed to
    /// zero density.
    pub fn log_pdf(&self, x: T) -> T {
        if x < T::zero() {
            return T::neg_infinity();
        }
        let density = self.pdf(x);
        if density > T::zero() {
            density.ln()
        } else {
            T::neg_infinity()
        }
    }

    /// Cumulative probability at `x`: `sum_i p_i * (1 - exp(-lambda_i * x))`
    ///
    /// Each term goes through `exp_m1` so small `x` does not cancel.
    /// Exactly zero at and below `x = 0`.
    pub fn cdf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::zero();
        }
        let mut sum = T::zero();
        for (&weight, &rate) in self.probabilities().iter().zip(self.rates()) {
            sum = sum - weight * (-rate * x).exp_m1();
        }
        sum
    }

    /// Survival (CDF complement) at `x`: `sum_i p_i * exp(-lambda_i * x)`
    ///
    /// Computed directly. For large `x` the cdf is within rounding of 1 and
    /// `1 - cdf(x)` would lose every significant digit, while this sum
    /// keeps full precision down to the underflow threshold. Exactly one at
    /// and below `x = 0`.
    pub fn survival(&self, x: T) -> T {
        if x <= T::zero() {
            return T::one();
        }
        let mut sum = T::zero();
        for (&weight, &rate) in self.probabilities().iter().zip(self.rates()) {
            sum = sum + weight * (-rate * x).exp();
        }
        sum
    }
}
