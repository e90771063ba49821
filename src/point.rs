use num_complex::Complex;

/// Identity of a point in a [`crate::tessellation::Tessellation`] — its insertion
/// index. Equality is by index, never by coordinate (§3 invariant).
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct VertexId(pub u32);

impl std::fmt::Debug for VertexId {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt, "v{}", self.0)
  }
}

/// A complex point carrying a mutable quadrant tag. `0` means unassigned;
/// `1..=4` follow the §4.2 convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexPoint {
  pub value: Complex<f64>,
  pub quadrant: u8,
}

impl ComplexPoint {
  pub fn unclassified(value: Complex<f64>) -> Self {
    ComplexPoint { value, quadrant: 0 }
  }
}

pub fn distance(a: Complex<f64>, b: Complex<f64>) -> f64 {
  (a - b).norm()
}

pub fn midpoint(a: Complex<f64>, b: Complex<f64>) -> Complex<f64> {
  (a + b) * 0.5
}

pub fn centroid3(a: Complex<f64>, b: Complex<f64>, c: Complex<f64>) -> Complex<f64> {
  (a + b + c) / 3.0
}

/// Mean of an arbitrary point list, taken literally (§4.7): a repeated
/// point — as the closing vertex of a [`crate::region::Region`] always is —
/// is weighted twice, matching the `(1/n) Σ point(v_k)` formula over the
/// full `n`-length closed vertex list.
pub fn centroid_of(points: &[Complex<f64>]) -> Complex<f64> {
  let sum: Complex<f64> = points.iter().copied().sum();
  sum / points.len() as f64
}
