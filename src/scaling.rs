use crate::error::GrpfError;
use num_complex::Complex;

/// Affine map `(ra, rb, ia, ib)` carrying the user's bounding box into the
/// triangulation library's coordinate range (§4.1). Geometric predicates
/// (distances, tolerance comparisons) run in this scaled system; `f` is
/// always evaluated after mapping back with [`Scaling::inverse`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
  ra: f64,
  rb: f64,
  ia: f64,
  ib: f64,
}

impl Scaling {
  /// Fit a scaling transform to `seeds` so every seed lands in
  /// `[min_coord, max_coord]` on both axes. Fails if there are fewer than 3
  /// seeds, if the seeds are degenerate (zero-width bounding box on either
  /// axis), or — which should then be impossible — if a mapped seed still
  /// falls outside the target range.
  pub fn fit(seeds: &[Complex<f64>], min_coord: f64, max_coord: f64) -> Result<Self, GrpfError> {
    if seeds.len() < 3 {
      return Err(GrpfError::InsufficientSeeds);
    }

    let (mut rmin, mut rmax, mut imin, mut imax) =
      (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
    for s in seeds {
      rmin = rmin.min(s.re);
      rmax = rmax.max(s.re);
      imin = imin.min(s.im);
      imax = imax.max(s.im);
    }
    if rmax <= rmin || imax <= imin {
      return Err(GrpfError::DegenerateSeed);
    }

    let w = max_coord - min_coord;
    let ra = w / (rmax - rmin);
    let rb = max_coord - ra * rmax;
    let ia = w / (imax - imin);
    let ib = max_coord - ia * imax;
    let scaling = Scaling { ra, rb, ia, ib };

    for s in seeds {
      let mapped = scaling.forward(*s);
      if !(min_coord..=max_coord).contains(&mapped.re) || !(min_coord..=max_coord).contains(&mapped.im) {
        return Err(GrpfError::SeedOutOfRange(*s, min_coord, max_coord));
      }
    }
    Ok(scaling)
  }

  pub fn forward(&self, z: Complex<f64>) -> Complex<f64> {
    Complex::new(self.ra * z.re + self.rb, self.ia * z.im + self.ib)
  }

  pub fn inverse(&self, z: Complex<f64>) -> Complex<f64> {
    Complex::new((z.re - self.rb) / self.ra, (z.im - self.ib) / self.ia)
  }
}
