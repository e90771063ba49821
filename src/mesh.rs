use num_complex::Complex;
use std::f64::consts::PI;

/// Generate the initial rectangular seed mesh (§4.1, §11): a hex
/// close-packed grid with spacing `r`, covering
/// `[re_min, re_max] x [im_min, im_max]`. Rows are stacked at height
/// `r * sqrt(3) / 2` and every other row is offset by `r / 2`, the
/// standard close-packing that keeps every interior point equidistant
/// from its six neighbors.
pub fn rectangular_domain(re_min: f64, re_max: f64, im_min: f64, im_max: f64, r: f64) -> Vec<Complex<f64>> {
  assert!(re_max > re_min && im_max > im_min, "a rectangular domain must have positive extent");
  assert!(r > 0.0, "seed spacing must be positive");

  let row_height = r * 3.0_f64.sqrt() / 2.0;
  let mut points = Vec::new();
  let mut row = 0usize;
  let mut im = im_min;
  while im <= im_max + 1e-12 {
    let offset = if row % 2 == 1 { r / 2.0 } else { 0.0 };
    let mut re = re_min + offset;
    while re <= re_max + 1e-12 {
      points.push(Complex::new(re.min(re_max), im.min(im_max)));
      re += r;
    }
    im += row_height;
    row += 1;
  }
  points
}

/// Generate the initial disk-shaped seed mesh (§4.1, §11): concentric
/// rings spaced `r` apart around `center` out to `radius`, plus the
/// center point. Each ring's point count scales with its circumference
/// (`2*pi*ring_radius / r`, at least 3), so ring spacing stays roughly
/// uniform in both the radial and angular directions.
pub fn disk_domain(center: Complex<f64>, radius: f64, r: f64) -> Vec<Complex<f64>> {
  assert!(radius > 0.0 && r > 0.0, "disk radius and ring spacing must be positive");

  let mut points = vec![center];
  let n_rings = (radius / r).round().max(1.0) as usize;
  for ring in 1..=n_rings {
    let ring_radius = radius * ring as f64 / n_rings as f64;
    let circumference = 2.0 * PI * ring_radius;
    let points_on_ring = (circumference / r).round().max(3.0) as usize;
    for k in 0..points_on_ring {
      let theta = 2.0 * PI * k as f64 / points_on_ring as f64;
      points.push(center + Complex::new(ring_radius * theta.cos(), ring_radius * theta.sin()));
    }
  }
  points
}
