use crate::point::centroid_of;
use crate::region::Region;
use crate::tessellation::Tessellation;
use num_complex::Complex;

/// What a closed contour encircles, per the discrete argument principle
/// (§4.7): a positive net quadrant winding means a zero, negative a pole,
/// zero net winding means the loop encircles neither (a numerical
/// near-miss, or a loop that should not have been extracted at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
  Zero,
  Pole,
  Neither,
}

/// A located root or pole: its classification, the winding number that
/// produced it, and the loop's vertex centroid as a point estimate of its
/// location (§4.7 — refine iteration sharpens this further).
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedRegion {
  pub classification: Classification,
  pub winding_number: i32,
  pub location: Complex<f64>,
}

/// The §4.7 step-2 normalization of one forward difference `d_k =
/// -(q_{k+1} - q_k)`. This is distinct from [`crate::candidate::delta_q`]:
/// the candidate detector needs the raw mod-4 residue to spot diagonal
/// jumps in the first place, but the evaluator needs those same diagonal
/// jumps (`|d_k| == 2`) zeroed out as ambiguous, and carries the leading
/// minus sign that compensates for the walker's traversal orientation.
fn normalize_argument_jump(q_k: u8, q_k1: u8) -> i32 {
  let d = -(q_k1 as i32 - q_k as i32);
  match d {
    3 => -1,
    -3 => 1,
    2 | -2 => 0,
    other => other,
  }
}

/// Evaluate one region by summing normalized quadrant jumps around its
/// boundary (§4.7).
///
/// `region.vertices` repeats its first vertex at the end, so summing
/// `normalize_argument_jump` over each consecutive pair covers the full
/// closed loop exactly once. The winding number is `(Σ d_k) / 4`;
/// classified by its *sign* as an integer rather than comparing the
/// divided float to zero, since the two are equivalent (division by a
/// positive constant) and the integer form has no rounding to worry about.
pub fn evaluate_region(tess: &Tessellation, region: &Region) -> EvaluatedRegion {
  let n = region.vertices.len();
  debug_assert!(n >= 2, "a region must have at least one edge");

  let mut sum: i32 = 0;
  for k in 0..n - 1 {
    let q1 = tess.quadrant(region.vertices[k]);
    let q2 = tess.quadrant(region.vertices[k + 1]);
    sum += normalize_argument_jump(q1, q2);
  }
  let winding_number = sum / 4;

  let classification = match winding_number.cmp(&0) {
    std::cmp::Ordering::Greater => Classification::Zero,
    std::cmp::Ordering::Less => Classification::Pole,
    std::cmp::Ordering::Equal => Classification::Neither,
  };

  let points: Vec<Complex<f64>> = region.vertices.iter().map(|&v| tess.point(v)).collect();
  let location = centroid_of(&points);

  EvaluatedRegion { classification, winding_number, location }
}
