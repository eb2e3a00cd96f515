//! Seam trait implementations
//!
//! Wires [`HyperExponential`] into the generic distribution traits from
//! `hyperexp-core` by delegating to the inherent methods.

use crate::error::{Error, Result};
use crate::model::HyperExponential;
use hyperexp_core::{ContinuousDistribution, DistributionMoments, Real};

impl<T: Real> ContinuousDistribution<T> for HyperExponential<T> {
    type Error = Error;

    fn pdf(&self, x: T) -> T {
        HyperExponential::pdf(self, x)
    }

    fn log_pdf(&self, x: T) -> T {
        HyperExponential::log_pdf(self, x)
    }

    fn cdf(&self, x: T) -> T {
        HyperExponential::cdf(self, x)
    }

    fn survival(&self, x: T) -> T {
        HyperExponential::survival(self, x)
    }

    fn quantile(&self, p: T) -> Result<T> {
        HyperExponential::quantile(self, p)
    }

    fn quantile_complement(&self, q: T) -> Result<T> {
        HyperExponential::quantile_complement(self, q)
    }

    fn range(&self) -> (T, T) {
        HyperExponential::range(self)
    }

    fn support(&self) -> (T, T) {
        HyperExponential::support(self)
    }

    fn mode(&self) -> T {
        HyperExponential::mode(self)
    }
}

impl<T: Real> DistributionMoments<T> for HyperExponential<T> {
    fn mean(&self) -> T {
        HyperExponential::mean(self)
    }

    fn variance(&self) -> T {
        HyperExponential::variance(self)
    }

    fn skewness(&self) -> T {
        HyperExponential::skewness(self)
    }

    fn kurtosis(&self) -> T {
        HyperExponential::kurtosis(self)
    }
}
