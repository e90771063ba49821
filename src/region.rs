use crate::contour::DirectedEdge;
use crate::point::VertexId;
use crate::tessellation::Tessellation;
use std::collections::HashMap;

/// One closed contour loop (§4.6): the vertex sequence walked off the
/// directed-edge soup produced by [`crate::contour::extract_contour`].
/// `vertices` repeats its first entry at the end, so `vertices.len()` is
/// one more than the number of distinct vertices on the loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
  pub vertices: Vec<VertexId>,
}

/// At a junction where more than one unused directed edge starts at
/// `at`, pick the edge that turns the most clockwise from the reversed
/// incoming direction (§4.6 "angular tie-break"). This is what keeps the
/// walk tracing a single simple boundary instead of crossing itself at a
/// vertex shared by more than one loop.
fn find_next_node(tess: &Tessellation, came_from: VertexId, at: VertexId, candidates: &[VertexId]) -> VertexId {
  debug_assert!(!candidates.is_empty());
  if candidates.len() == 1 {
    return candidates[0];
  }
  let p_came_from = tess.point(came_from);
  let p_at = tess.point(at);
  let reference = (p_came_from - p_at).arg();

  let mut best = candidates[0];
  let mut best_delta = f64::INFINITY;
  for &cand in candidates {
    let p_cand = tess.point(cand);
    let angle = (p_cand - p_at).arg();
    let mut delta = reference - angle;
    while delta < 0.0 {
      delta += 2.0 * std::f64::consts::PI;
    }
    while delta >= 2.0 * std::f64::consts::PI {
      delta -= 2.0 * std::f64::consts::PI;
    }
    if delta < best_delta {
      best_delta = delta;
      best = cand;
    }
  }
  best
}

/// Walk the directed edges produced by contour extraction into closed
/// loops. Each directed edge is consumed exactly once; a vertex where
/// several edges start is disambiguated with [`find_next_node`].
pub fn walk_regions(tess: &Tessellation, edges: &[DirectedEdge]) -> Vec<Region> {
  let mut by_from: HashMap<VertexId, Vec<usize>> = HashMap::new();
  for (i, e) in edges.iter().enumerate() {
    by_from.entry(e.from).or_default().push(i);
  }
  let mut used = vec![false; edges.len()];
  let mut regions = Vec::new();

  for start_idx in 0..edges.len() {
    if used[start_idx] {
      continue;
    }
    let start = edges[start_idx].from;
    let mut vertices = vec![start];
    let mut current_idx = start_idx;
    loop {
      used[current_idx] = true;
      let edge = edges[current_idx];
      vertices.push(edge.to);
      if edge.to == start {
        break;
      }
      let candidate_indices: Vec<usize> = by_from
        .get(&edge.to)
        .map(|v| v.iter().copied().filter(|&i| !used[i]).collect())
        .unwrap_or_default();
      if candidate_indices.is_empty() {
        break;
      }
      let candidate_targets: Vec<VertexId> = candidate_indices.iter().map(|&i| edges[i].to).collect();
      let chosen_target = find_next_node(tess, edge.from, edge.to, &candidate_targets);
      let chosen_idx = candidate_indices
        .into_iter()
        .find(|&i| edges[i].to == chosen_target)
        .expect("chosen_target was drawn from candidate_targets");
      current_idx = chosen_idx;
    }
    regions.push(Region { vertices });
  }
  regions
}

#[cfg(test)]
mod tests {
  use super::*;
  use num_complex::Complex;

  #[test]
  fn walks_a_simple_square_loop() {
    let tess = Tessellation::new(vec![
      Complex::new(-1.0, -1.0),
      Complex::new(1.0, -1.0),
      Complex::new(1.0, 1.0),
      Complex::new(-1.0, 1.0),
    ]);
    let edges = vec![
      DirectedEdge { from: VertexId(0), to: VertexId(1) },
      DirectedEdge { from: VertexId(1), to: VertexId(2) },
      DirectedEdge { from: VertexId(2), to: VertexId(3) },
      DirectedEdge { from: VertexId(3), to: VertexId(0) },
    ];
    let regions = walk_regions(&tess, &edges);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].vertices.first(), regions[0].vertices.last());
    assert_eq!(regions[0].vertices.len(), 5);
  }

  #[test]
  fn empty_edges_yield_no_regions() {
    let tess = Tessellation::new(vec![
      Complex::new(-1.0, -1.0),
      Complex::new(1.0, -1.0),
      Complex::new(1.0, 1.0),
      Complex::new(-1.0, 1.0),
    ]);
    assert!(walk_regions(&tess, &[]).is_empty());
  }
}
