//! Property tests for the mixture invariants
//!
//! Random mixtures are kept inside ranges where every intermediate value is
//! comfortably representable in f64, so the assertions test the algorithms
//! rather than the floating-point edge of the type.

use approx::assert_relative_eq;
use hyperexp_dist::HyperExponential;
use proptest::prelude::*;
use statrs::distribution::{Continuous, ContinuousCDF, Exp};
use statrs::statistics::Distribution as StatrsDistribution;

/// Mixtures of up to five components with moderate weights and rates
fn mixture() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..=5).prop_flat_map(|k| {
        (
            prop::collection::vec(0.05f64..2.0, k..=k),
            prop::collection::vec(0.1f64..4.0, k..=k),
        )
    })
}

proptest! {
    #[test]
    fn weights_normalize_to_one((probs, rates) in mixture()) {
        let dist = HyperExponential::new(&probs, &rates).unwrap();
        let total: f64 = dist.probabilities().iter().sum();
        let budget = dist.num_phases() as f64 * f64::EPSILON;
        prop_assert!((total - 1.0).abs() <= budget);
    }

    #[test]
    fn pdf_is_non_negative((probs, rates) in mixture(), x in -10.0f64..50.0) {
        let dist = HyperExponential::new(&probs, &rates).unwrap();
        prop_assert!(dist.pdf(x) >= 0.0);
    }

    #[test]
    fn cdf_and_survival_are_complementary((probs, rates) in mixture(), x in 0.0f64..40.0) {
        let dist = HyperExponential::new(&probs, &rates).unwrap();
        let total = dist.cdf(x) + dist.survival(x);
        prop_assert!((total - 1.0).abs() < 1e-13);
    }

    #[test]
    fn cdf_is_monotone((probs, rates) in mixture(), a in 0.0f64..20.0, b in 0.0f64..20.0) {
        let dist = HyperExponential::new(&probs, &rates).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(dist.cdf(lo) <= dist.cdf(hi));
    }

    #[test]
    fn quantile_round_trips_through_cdf((probs, rates) in mixture(), x in 0.01f64..5.0) {
        let dist = HyperExponential::new(&probs, &rates).unwrap();
        let p = dist.cdf(x);
        // stay away from the region where p rounds to 1
        prop_assume!(p < 1.0 - 1e-12);
        let recovered = dist.quantile(p).unwrap();
        prop_assert!((recovered - x).abs() <= 1e-8 * x.max(1.0));
    }

    #[test]
    fn complement_round_trips_through_survival((probs, rates) in mixture(), x in 0.01f64..5.0) {
        let dist = HyperExponential::new(&probs, &rates).unwrap();
        let q = dist.survival(x);
        prop_assume!(q > 1e-12);
        let recovered = dist.quantile_complement(q).unwrap();
        prop_assert!((recovered - x).abs() <= 1e-8 * x.max(1.0));
    }

    #[test]
    fn quantile_and_complement_agree((probs, rates) in mixture(), p in 0.001f64..0.999) {
        let dist = HyperExponential::new(&probs, &rates).unwrap();
        let via_cdf = dist.quantile(p).unwrap();
        let via_survival = dist.quantile_complement(1.0 - p).unwrap();
        prop_assert!((via_cdf - via_survival).abs() <= 1e-8 * via_cdf.max(1.0));
    }

    #[test]
    fn mean_is_positive_and_bounded_by_extreme_rates((probs, rates) in mixture()) {
        let dist = HyperExponential::new(&probs, &rates).unwrap();
        let slowest = rates.iter().cloned().fold(f64::INFINITY, f64::min);
        let fastest = rates.iter().cloned().fold(0.0f64, f64::max);
        let mean = dist.mean();
        prop_assert!(mean >= 1.0 / fastest - 1e-12);
        prop_assert!(mean <= 1.0 / slowest + 1e-12);
    }
}

/// Trapezoidal integral of the density over [0, hi]
fn integrate_pdf(dist: &HyperExponential<f64>, hi: f64, steps: usize) -> f64 {
    let h = hi / steps as f64;
    let mut acc = 0.5 * (dist.pdf(0.0) + dist.pdf(hi));
    for i in 1..steps {
        acc += dist.pdf(i as f64 * h);
    }
    acc * h
}

#[test]
fn pdf_integrates_to_one() {
    let dist = HyperExponential::new(&[0.2, 0.3, 0.5], &[0.5, 1.0, 1.5]).unwrap();
    // truncation at x = 80 leaves < exp(-40) of mass behind
    let integral = integrate_pdf(&dist, 80.0, 200_000);
    assert_relative_eq!(integral, 1.0, epsilon = 1e-6);
}

#[test]
fn single_phase_matches_statrs_exponential() {
    let rate = 1.5;
    let ours = HyperExponential::new(&[1.0], &[rate]).unwrap();
    let reference = Exp::new(rate).unwrap();

    for i in 0..50 {
        let x = 0.2 * i as f64;
        assert_relative_eq!(ours.pdf(x), reference.pdf(x), max_relative = 1e-12);
        assert_relative_eq!(ours.cdf(x), reference.cdf(x), max_relative = 1e-12);
    }

    assert_relative_eq!(ours.mean(), reference.mean().unwrap(), max_relative = 1e-12);
    assert_relative_eq!(
        ours.variance(),
        reference.variance().unwrap(),
        max_relative = 1e-12
    );
}

#[test]
fn equiprobable_two_phase_matches_hand_computation() {
    let dist = HyperExponential::equiprobable(&[1.0, 2.0]).unwrap();
    let x: f64 = 0.75;
    let expected_pdf = 0.5 * (-x as f64).exp() + 0.5 * 2.0 * (-2.0 * x).exp();
    let expected_cdf = 0.5 * (1.0 - (-x).exp()) + 0.5 * (1.0 - (-2.0 * x).exp());
    assert_relative_eq!(dist.pdf(x), expected_pdf, max_relative = 1e-14);
    assert_relative_eq!(dist.cdf(x), expected_cdf, max_relative = 1e-14);
}
