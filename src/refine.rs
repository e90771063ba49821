use crate::point::{centroid3, distance, midpoint, VertexId};
use crate::tessellation::{Edge, TriIdx, Tessellation};
use num_complex::Complex;
use std::collections::HashSet;

/// Result of one refinement pass (§4.4): the new points to insert, and
/// whether any candidate edge still exceeds `tolerance` (if not, the mesh
/// has converged and refinement should stop).
#[derive(Debug, Default, Clone)]
pub struct RefineStep {
  pub new_points: Vec<Complex<f64>>,
  pub converged: bool,
}

/// A triangle's longest-to-shortest edge ratio, the skinniness measure
/// gating zone-2 refinement (§4.4, `skinny_triangle` parameter).
fn aspect_ratio(tess: &Tessellation, t: TriIdx) -> f64 {
  let [a, b, c] = tess.triangle_vertices(t);
  let (pa, pb, pc) = (tess.point(a), tess.point(b), tess.point(c));
  let lens = [distance(pa, pb), distance(pb, pc), distance(pc, pa)];
  let max = lens.iter().cloned().fold(f64::MIN, f64::max);
  let min = lens.iter().cloned().fold(f64::MAX, f64::min);
  if min <= 0.0 {
    f64::INFINITY
  } else {
    max / min
  }
}

/// One refinement pass over the mesh (§4.4).
///
/// `selectE` is `candidates` filtered down to those still longer than
/// `tolerance`; an empty `selectE` means convergence. Its endpoints form
/// the unique-point set `U`. Every triangle incident to a point in `U` is
/// classified by how many of its three vertices belong to `U`: `count >= 2`
/// is a zone-1 triangle (certainly near a root/pole), `count == 1` is a
/// zone-2 triangle (a skinny-check candidate). Zone-1 triangles contribute
/// the midpoint of every one of their edges — not just the candidate edge
/// that pulled the triangle in — deduplicated by edge identity and skipped
/// where the edge is already within tolerance. Zone-2 triangles contribute
/// their centroid only when skinnier than `skinny_triangle`.
pub fn refine_once(tess: &Tessellation, candidates: &[Edge], tolerance: f64, skinny_triangle: f64) -> RefineStep {
  let select_e: Vec<Edge> = candidates
    .iter()
    .copied()
    .filter(|e| distance(tess.point(e.0), tess.point(e.1)) > tolerance)
    .collect();
  if select_e.is_empty() {
    return RefineStep { new_points: Vec::new(), converged: true };
  }

  let u: HashSet<VertexId> = select_e.iter().flat_map(|e| [e.0, e.1]).collect();

  let mut incident_triangles = HashSet::new();
  for &v in &u {
    incident_triangles.extend(tess.incident_triangles(v));
  }

  let mut seen_edges = HashSet::new();
  let mut new_points = Vec::new();

  for t in incident_triangles {
    let [a, b, c] = tess.triangle_vertices(t);
    let count = [a, b, c].iter().filter(|v| u.contains(v)).count();

    if count >= 2 {
      for e in [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)] {
        if !seen_edges.insert(e) {
          continue;
        }
        if distance(tess.point(e.0), tess.point(e.1)) > tolerance {
          new_points.push(midpoint(tess.point(e.0), tess.point(e.1)));
        }
      }
    } else if count == 1 && aspect_ratio(tess, t) > skinny_triangle {
      new_points.push(centroid3(tess.point(a), tess.point(b), tess.point(c)));
    }
  }

  RefineStep { new_points, converged: false }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::point::VertexId;

  fn tess_with_quadrants(pts: Vec<Complex<f64>>, qs: &[u8]) -> Tessellation {
    let mut t = Tessellation::new(pts);
    for (i, q) in qs.iter().enumerate() {
      t.set_quadrant(VertexId(i as u32), *q);
    }
    t
  }

  #[test]
  fn no_candidates_converges_immediately() {
    let tess = tess_with_quadrants(
      vec![
        Complex::new(-1.0, -1.0),
        Complex::new(1.0, -1.0),
        Complex::new(1.0, 1.0),
        Complex::new(-1.0, 1.0),
      ],
      &[1, 1, 1, 1],
    );
    let step = refine_once(&tess, &[], 1e-9, 3.0);
    assert!(step.converged);
    assert!(step.new_points.is_empty());
  }

  #[test]
  fn long_candidate_edge_emits_midpoint() {
    let pts = vec![
      Complex::new(-1.0, -1.0),
      Complex::new(1.0, -1.0),
      Complex::new(1.0, 1.0),
      Complex::new(-1.0, 1.0),
    ];
    let tess = tess_with_quadrants(pts, &[3, 4, 1, 2]);
    let candidates = crate::candidate::detect_candidates(&tess);
    assert!(!candidates.is_empty());
    let step = refine_once(&tess, &candidates, 1e-9, 3.0);
    assert!(!step.converged);
    assert!(!step.new_points.is_empty());
  }

  #[test]
  fn short_candidate_edge_converges() {
    // Only the 0-1 edge sits between diagonally opposite quadrants, and
    // it's shorter than tolerance, so `selectE` is empty.
    let pts = vec![Complex::new(0.0, 0.0), Complex::new(1e-12, 0.0), Complex::new(1.0, 1.0)];
    let tess = tess_with_quadrants(pts, &[3, 1, 2]);
    let candidates = crate::candidate::detect_candidates(&tess);
    let step = refine_once(&tess, &candidates, 1e-9, 3.0);
    assert!(step.converged);
  }

  // A lone triangle with exactly one candidate edge (0-1): both its
  // endpoints land in U, so the triangle has 2 vertices in U (zone-1) and
  // every one of its three edges must be split, not only the candidate one.
  #[test]
  fn zone1_triangle_splits_every_edge_not_just_the_candidate_edge() {
    let pts = vec![Complex::new(0.0, 0.0), Complex::new(2.0, 0.0), Complex::new(1.0, 2.0)];
    let tess = tess_with_quadrants(pts, &[3, 1, 2]);
    let candidates = crate::candidate::detect_candidates(&tess);
    assert_eq!(candidates.len(), 1, "only the 0-1 edge sits between diagonally opposite quadrants");

    let step = refine_once(&tess, &candidates, 1e-9, 3.0);
    assert!(!step.converged);
    assert_eq!(step.new_points.len(), 3, "all three edges of the sole zone-1 triangle are split");
  }
}
