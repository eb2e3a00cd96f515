//! Closed-form mixture moments
//!
//! Raw moments of an exponential mixture have the closed form
//! `E[X^n] = n! * sum_i p_i / lambda_i^n`; everything here is plain
//! arithmetic over those sums, no root finding involved.

use crate::error::Result;
use crate::model::HyperExponential;
use hyperexp_core::Real;

impl<T: Real> HyperExponential<T> {
    /// Mean: `sum_i p_i / lambda_i`
    pub fn mean(&self) -> T {
        let mut sum = T::zero();
        for (&weight, &rate) in self.probabilities().iter().zip(self.rates()) {
            sum = sum + weight / rate;
        }
        sum
    }

    /// Raw moment of order `n`: `n! * sum_i p_i / lambda_i^n`
    pub fn raw_moment(&self, order: u32) -> T {
        let mut factorial = T::one();
        for n in 2..=order {
            factorial = factorial * T::from_usize(n as usize);
        }
        let mut sum = T::zero();
        for (&weight, &rate) in self.probabilities().iter().zip(self.rates()) {
            sum = sum + weight / rate.powi(order as i32);
        }
        factorial * sum
    }

    /// Variance: `E[X^2] - mean^2`
    pub fn variance(&self) -> T {
        let mean = self.mean();
        self.raw_moment(2) - mean * mean
    }

    /// Standard deviation
    pub fn std_dev(&self) -> T {
        self.variance().sqrt()
    }

    /// Skewness: third central moment over variance^(3/2)
    pub fn skewness(&self) -> T {
        let two = T::from_f64(2.0);
        let three = T::from_f64(3.0);
        let m1 = self.mean();
        let m2 = self.raw_moment(2);
        let m3 = self.raw_moment(3);
        let variance = m2 - m1 * m1;
        let central3 = m3 - three * m1 * m2 + two * m1 * m1 * m1;
        central3 / (variance * variance.sqrt())
    }

    /// Kurtosis in the non-excess convention (normal = 3)
    pub fn kurtosis(&self) -> T {
        let three = T::from_f64(3.0);
        let four = T::from_f64(4.0);
        let six = T::from_f64(6.0);
        let m1 = self.mean();
        let m2 = self.raw_moment(2);
        let m3 = self.raw_moment(3);
        let m4 = self.raw_moment(4);
        let m1sq = m1 * m1;
        let variance = m2 - m1sq;
        let central4 = m4 - four * m1 * m3 + six * m1sq * m2 - three * m1sq * m1sq;
        central4 / (variance * variance)
    }

    /// Kurtosis minus the normal reference value 3
    pub fn kurtosis_excess(&self) -> T {
        self.kurtosis() - T::from_f64(3.0)
    }

    /// The 0.5 quantile
    pub fn median(&self) -> Result<T> {
        self.quantile(T::from_f64(0.5))
    }
}
