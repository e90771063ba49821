use num_complex::Complex;

/// Classify `z` into quadrant 1..4 per the §4.2 boundary convention.
///
/// The four guarded branches below are load-bearing exactly as written
/// (§9: "the `≥`/`<` conventions... are load-bearing; any variation can
/// spuriously increase `|ΔQ|`"). None of them matches `z == 0` exactly; by
/// the convention stated in §4.2, that one case falls through to quadrant 1.
pub fn classify(re: f64, im: f64) -> u8 {
  if re > 0.0 && im >= 0.0 {
    1
  } else if re <= 0.0 && im > 0.0 {
    2
  } else if re < 0.0 && im <= 0.0 {
    3
  } else if re >= 0.0 && im < 0.0 {
    4
  } else {
    1
  }
}

/// As [`classify`], but a non-finite value is a precondition failure (§7.1)
/// rather than a silently-misclassified point.
pub fn classify_checked(z: Complex<f64>) -> Option<u8> {
  if z.re.is_finite() && z.im.is_finite() {
    Some(classify(z.re, z.im))
  } else {
    None
  }
}
