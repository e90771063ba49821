use grpf::mesh::rectangular_domain;
use grpf::quadrant::classify;
use grpf::{grpf, Parameters};
use num_complex::Complex;
use proptest::prelude::*;
use test_strategy::proptest;

fn finite_f64() -> impl Strategy<Value = f64> {
  (-1e6..1e6f64).prop_filter("finite", |x| x.is_finite())
}

#[proptest]
fn quadrant_is_invariant_under_positive_real_scaling(
  #[strategy(finite_f64())] re: f64,
  #[strategy(finite_f64())] im: f64,
  #[strategy(1e-3..1e3f64)] factor: f64,
) {
  prop_assume!(re != 0.0 || im != 0.0);
  let scaled = classify(re * factor, im * factor);
  let original = classify(re, im);
  prop_assert_eq!(scaled, original);
}

#[proptest]
fn quadrant_classification_is_always_one_through_four(#[strategy(finite_f64())] re: f64, #[strategy(finite_f64())] im: f64) {
  let q = classify(re, im);
  prop_assert!((1..=4).contains(&q));
}

#[proptest]
fn scaling_round_trip_recovers_original_point(
  #[strategy(-100.0..100.0f64)] re: f64,
  #[strategy(-100.0..100.0f64)] im: f64,
) {
  let seeds = vec![
    Complex::new(-200.0, -200.0),
    Complex::new(200.0, -200.0),
    Complex::new(200.0, 200.0),
    Complex::new(-200.0, 200.0),
  ];
  let scaling = grpf::scaling::Scaling::fit(&seeds, -1.0, 1.0).unwrap();
  let z = Complex::new(re, im);
  let back = scaling.inverse(scaling.forward(z));
  prop_assert!((back - z).norm() < 1e-6);
}

// §10.7: rescaling the search domain and the function's root by the same
// nonzero real factor must rescale the reported zero by that same factor.
#[proptest(cases = 16)]
fn grpf_is_invariant_under_affine_rescaling(
  #[strategy(-1.0..1.0f64)] root_re: f64,
  #[strategy(-1.0..1.0f64)] root_im: f64,
  #[strategy(0.5..2.0f64)] factor: f64,
) {
  let root = Complex::new(root_re, root_im);
  let seeds = rectangular_domain(-3.0, 3.0, -3.0, 3.0, 0.6);

  let report = grpf(|z| z - root, &seeds, Parameters::default()).unwrap();
  prop_assert_eq!(report.zeros.len(), 1);
  prop_assert!(report.poles.is_empty());

  let scaled_seeds: Vec<Complex<f64>> = seeds.iter().map(|z| z * factor).collect();
  let scaled_root = root * factor;
  let scaled_report = grpf(|z| z - scaled_root, &scaled_seeds, Parameters::default()).unwrap();
  prop_assert_eq!(scaled_report.zeros.len(), 1);
  prop_assert!(scaled_report.poles.is_empty());

  let expected = report.zeros[0] * factor;
  prop_assert!((scaled_report.zeros[0] - expected).norm() < 0.1 * factor.max(1.0));
}

// §10.7: re-running `grpf` on identical inputs is deterministic — the same
// zero comes back every time, up to the floating-point noise a repeated
// bulk re-triangulation of the same point set can introduce.
#[proptest(cases = 16)]
fn grpf_is_idempotent(#[strategy(-1.0..1.0f64)] root_re: f64, #[strategy(-1.0..1.0f64)] root_im: f64) {
  let root = Complex::new(root_re, root_im);
  let seeds = rectangular_domain(-3.0, 3.0, -3.0, 3.0, 0.6);

  let first = grpf(|z| z - root, &seeds, Parameters::default()).unwrap();
  let second = grpf(|z| z - root, &seeds, Parameters::default()).unwrap();

  prop_assert_eq!(first.zeros.len(), second.zeros.len());
  prop_assert_eq!(first.poles.len(), second.poles.len());
  for (a, b) in first.zeros.iter().zip(second.zeros.iter()) {
    prop_assert!((a - b).norm() < 1e-9);
  }
}
