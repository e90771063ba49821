use crate::point::VertexId;
use crate::tessellation::{Edge, Tessellation};
use std::collections::{HashMap, HashSet};

/// A directed edge `from -> to`, CCW around whichever triangle it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectedEdge {
  pub from: VertexId,
  pub to: VertexId,
}

/// Extract the contour bounding the candidate-edge regions (§4.5).
///
/// A triangle is emitted iff at least one of its three edges equals —
/// in either orientation — some edge in `candidates` (the full candidate
/// set `E`, not the tolerance-filtered `selectE`). Its three CCW-oriented
/// edges are added to a multiset. An edge shared by two emitted triangles
/// is traversed once in each direction by those triangles and cancels
/// out; edges on the outer rim of the union of emitted triangles survive
/// with only one direction present. The survivors are the directed
/// contour edges, one or more closed polygons walked by
/// [`crate::region::walk_regions`].
pub fn extract_contour(tess: &Tessellation, candidates: &[Edge]) -> Vec<DirectedEdge> {
  let candidate_set: HashSet<Edge> = candidates.iter().copied().collect();
  let mut counts: HashMap<DirectedEdge, i32> = HashMap::new();

  for t in tess.iter_triangle_ids() {
    let [a, b, c] = tess.triangle_vertices(t);
    let edges = [(a, b), (b, c), (c, a)];
    let touches_candidate = edges.iter().any(|&(from, to)| candidate_set.contains(&Edge::new(from, to)));
    if !touches_candidate {
      continue;
    }
    for (from, to) in edges {
      *counts.entry(DirectedEdge { from, to }).or_insert(0) += 1;
    }
  }

  let mut survivors = Vec::new();
  for (&edge, &count) in &counts {
    let reverse = DirectedEdge { from: edge.to, to: edge.from };
    let reverse_count = counts.get(&reverse).copied().unwrap_or(0);
    if count > reverse_count {
      for _ in 0..(count - reverse_count) {
        survivors.push(edge);
      }
    }
  }
  survivors
}
