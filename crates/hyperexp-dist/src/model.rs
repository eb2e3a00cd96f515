//! The validated hyperexponential mixture model
//!
//! Construction is the only place invariants are checked; every evaluation
//! function afterwards reads the parameter vectors without revalidating.
//! The model is immutable and freely shareable across threads.

use crate::error::{Error, Result};
use hyperexp_core::Real;

/// A finite mixture of exponential components
///
/// Holds `k >= 1` pairs of (mixture weight, rate). Weights are normalized
/// at construction so they always sum to 1; rates are strictly positive and
/// finite. Components stay in the order supplied - duplicate rates are kept
/// as separate entries and simply behave as if their weights were summed.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "RawMixture<T>",
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: Real + serde::Deserialize<'de>"
        )
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct HyperExponential<T> {
    probabilities: Vec<T>,
    rates: Vec<T>,
}

/// Unvalidated mirror of the model, used as the deserialization gateway
/// so a decoded mixture passes the same checks as a constructed one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMixture<T> {
    probabilities: Vec<T>,
    rates: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Real> TryFrom<RawMixture<T>> for HyperExponential<T> {
    type Error = Error;

    fn try_from(raw: RawMixture<T>) -> Result<Self> {
        Self::new(&raw.probabilities, &raw.rates)
    }
}

impl<T: Real> HyperExponential<T> {
    /// Build a mixture from equal-length weight and rate sequences
    ///
    /// Weights need not sum to 1; they are normalized by their total. Fails
    /// when the sequences differ in length or are empty, when any rate is
    /// non-positive or non-finite, when any weight is negative or
    /// non-finite, or when every weight is zero.
    pub fn new(probabilities: &[T], rates: &[T]) -> Result<Self> {
        if probabilities.len() != rates.len() {
            return Err(hyperexp_core::Error::size_mismatch(
                probabilities.len(),
                rates.len(),
                "rate vector",
            )
            .into());
        }
        if rates.is_empty() {
            return Err(Error::EmptyMixture);
        }
        for &rate in rates {
            if !rate.is_finite() || rate <= T::zero() {
                return Err(Error::InvalidParameter(format!(
                    "rate {rate:?} must be finite and > 0"
                )));
            }
        }
        let mut total = T::zero();
        for &weight in probabilities {
            if !weight.is_finite() || weight < T::zero() {
                return Err(Error::InvalidParameter(format!(
                    "mixture weight {weight:?} must be finite and >= 0"
                )));
            }
            total = total + weight;
        }
        if total <= T::zero() {
            return Err(Error::InvalidParameter(
                "mixture weights must not all be zero".to_string(),
            ));
        }

        Ok(Self {
            probabilities: probabilities.iter().map(|&w| w / total).collect(),
            rates: rates.to_vec(),
        })
    }

    /// Build a mixture over `rates` with equal weights `1/k`
    pub fn equiprobable(rates: &[T]) -> Result<Self> {
        Self::new(&vec![T::one(); rates.len()], rates)
    }

    /// Number of exponential phases in the mixture
    pub fn num_phases(&self) -> usize {
        self.rates.len()
    }

    /// Normalized mixture weights, in the order supplied
    pub fn probabilities(&self) -> &[T] {
        &self.probabilities
    }

    /// Component rates, in the order supplied
    pub fn rates(&self) -> &[T] {
        &self.rates
    }

    /// Theoretical range of the variate: `(0, +inf)` for any parameters
    pub fn range(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    /// Representable support interval for the scalar type
    pub fn support(&self) -> (T, T) {
        (T::min_positive_value(), T::max_value())
    }

    /// The density of any exponential mixture is strictly decreasing, so
    /// its maximum sits at the left edge of the support.
    pub fn mode(&self) -> T {
        T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weights_are_normalized() {
        let dist = HyperExponential::new(&[2.0, 3.0, 5.0], &[0.5, 1.0, 1.5]).unwrap();
        let total: f64 = dist.probabilities().iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 3.0 * f64::EPSILON);
        assert_relative_eq!(dist.probabilities()[0], 0.2, epsilon = 1e-15);
        assert_relative_eq!(dist.probabilities()[2], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_already_normalized_weights_unchanged() {
        let dist = HyperExponential::new(&[0.25, 0.75], &[1.0, 2.0]).unwrap();
        assert_eq!(dist.probabilities(), &[0.25, 0.75]);
    }

    #[test]
    fn test_component_order_and_duplicates_preserved() {
        let dist = HyperExponential::new(&[0.5, 0.5], &[2.0, 2.0]).unwrap();
        assert_eq!(dist.num_phases(), 2);
        assert_eq!(dist.rates(), &[2.0, 2.0]);
    }

    #[test]
    fn test_equiprobable() {
        let dist = HyperExponential::equiprobable(&[0.5, 1.0, 1.5, 2.0]).unwrap();
        for &w in dist.probabilities() {
            assert_relative_eq!(w, 0.25, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        assert!(HyperExponential::new(&[0.5, 0.5], &[1.0]).is_err());
    }

    #[test]
    fn test_empty_input_rejected() {
        let empty: [f64; 0] = [];
        assert!(matches!(
            HyperExponential::new(&empty, &empty),
            Err(Error::EmptyMixture)
        ));
        assert!(HyperExponential::<f64>::equiprobable(&[]).is_err());
    }

    #[test]
    fn test_bad_rates_rejected() {
        assert!(HyperExponential::new(&[1.0], &[0.0]).is_err());
        assert!(HyperExponential::new(&[1.0], &[-1.5]).is_err());
        assert!(HyperExponential::new(&[1.0], &[f64::NAN]).is_err());
        assert!(HyperExponential::new(&[1.0], &[f64::INFINITY]).is_err());
    }

    #[test]
    fn test_bad_weights_rejected() {
        assert!(HyperExponential::new(&[-0.1, 1.1], &[1.0, 2.0]).is_err());
        assert!(HyperExponential::new(&[f64::NAN, 1.0], &[1.0, 2.0]).is_err());
        assert!(HyperExponential::new(&[0.0, 0.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_range_support_mode() {
        let dist = HyperExponential::<f64>::new(&[0.2, 0.3, 0.5], &[0.5, 1.0, 1.5]).unwrap();

        let (lo, hi) = dist.range();
        assert_eq!(lo, 0.0);
        assert!(hi.is_infinite());

        let (lo, hi) = dist.support();
        assert_eq!(lo, f64::MIN_POSITIVE);
        assert_eq!(hi, f64::MAX);

        assert_eq!(dist.mode(), 0.0);
    }

    #[test]
    fn test_single_precision_model() {
        let dist = HyperExponential::new(&[0.2f32, 0.3, 0.5], &[0.5f32, 1.0, 1.5]).unwrap();
        let total: f32 = dist.probabilities().iter().sum();
        assert_relative_eq!(total, 1.0f32, epsilon = 3.0 * f32::EPSILON);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let dist = HyperExponential::new(&[2.0, 3.0], &[1.0, 4.0]).unwrap();
        let json = serde_json::to_string(&dist).unwrap();
        let back: HyperExponential<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(dist, back);
    }

    #[test]
    fn test_deserialization_revalidates() {
        let bad = r#"{"probabilities":[1.0],"rates":[-2.0]}"#;
        assert!(serde_json::from_str::<HyperExponential<f64>>(bad).is_err());

        let mismatched = r#"{"probabilities":[0.5,0.5],"rates":[1.0]}"#;
        assert!(serde_json::from_str::<HyperExponential<f64>>(mismatched).is_err());
    }
}
