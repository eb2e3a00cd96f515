//! Seam traits for continuous distributions
//!
//! Generic callers program against these traits rather than a concrete
//! distribution type. The associated error type lets each implementing
//! crate keep its own error enum while sharing the surface.

use crate::numeric::Real;

/// Standard function set of a continuous univariate distribution
pub trait ContinuousDistribution<T: Real> {
    /// Error type reported by the inverting functions
    type Error: std::error::Error;

    /// Probability density at `x`
    fn pdf(&self, x: T) -> T;

    /// Natural log of the density at `x`
    fn log_pdf(&self, x: T) -> T;

    /// Probability of a value not exceeding `x`
    fn cdf(&self, x: T) -> T;

    /// Probability of a value exceeding `x` (CDF complement)
    fn survival(&self, x: T) -> T;

    /// Inverse CDF: the `x` with `cdf(x) = p`
    fn quantile(&self, p: T) -> Result<T, Self::Error>;

    /// Inverse survival function: the `x` with `survival(x) = q`
    fn quantile_complement(&self, q: T) -> Result<T, Self::Error>;

    /// Theoretical range of the variate
    fn range(&self) -> (T, T);

    /// Representable support interval for the chosen scalar type
    fn support(&self) -> (T, T);

    /// Location of the density maximum
    fn mode(&self) -> T;

    /// The 0.5 quantile
    fn median(&self) -> Result<T, Self::Error> {
        self.quantile(T::from_f64(0.5))
    }
}

/// First four moments of a distribution
pub trait DistributionMoments<T: Real> {
    fn mean(&self) -> T;

    fn variance(&self) -> T;

    fn std_dev(&self) -> T {
        self.variance().sqrt()
    }

    fn skewness(&self) -> T;

    /// Kurtosis in the non-excess convention (normal = 3)
    fn kurtosis(&self) -> T;

    fn kurtosis_excess(&self) -> T {
        self.kurtosis() - T::from_f64(3.0)
    }
}
