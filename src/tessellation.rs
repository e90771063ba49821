use crate::point::{ComplexPoint, VertexId};
use delaunator::{next_halfedge, triangulate, Point as DPoint, EMPTY};
use num_complex::Complex;
use std::collections::HashMap;

/// Coordinate range the scaled seed points are fit into (§4.1).
pub const MIN_COORD: f64 = -1.0;
pub const MAX_COORD: f64 = 1.0;

/// An undirected edge, stored with its lower-indexed endpoint first so two
/// `Edge`s built from the same pair of vertices always compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge(pub VertexId, pub VertexId);

impl Edge {
  pub fn new(a: VertexId, b: VertexId) -> Self {
    if a.0 <= b.0 {
      Edge(a, b)
    } else {
      Edge(b, a)
    }
  }
}

/// Identity of a triangle — its index into `delaunator`'s `triangles` array
/// divided by 3. Stable only until the next [`Tessellation::insert_bulk`].
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct TriIdx(pub u32);

impl std::fmt::Debug for TriIdx {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt, "t{}", self.0)
  }
}

/// The working mesh: a point set plus its Delaunay triangulation, held in
/// the scaled `[-1, 1]²` coordinate system (§4.1, §4.4).
///
/// `delaunator` triangulates from scratch; there is no incremental insertion
/// primitive to reuse, so a bulk insert re-triangulates the whole point set
/// (§4.4 step 6: "inserted into the tessellation in one bulk operation").
/// This is the facade's one real cost center — callers batch candidate-edge
/// midpoints/centroids into as few `insert_bulk` calls as the algorithm
/// allows rather than inserting one point at a time.
pub struct Tessellation {
  points: Vec<ComplexPoint>,
  triangles: Vec<u32>,
  halfedges: Vec<i64>,
}

impl Tessellation {
  /// Build a tessellation from an initial point set (already in scaled
  /// coordinates). Panics only if `delaunator` itself would — i.e. never,
  /// for the non-degenerate seed meshes this crate constructs.
  pub fn new(points: Vec<Complex<f64>>) -> Self {
    let mut t = Tessellation { points: Vec::new(), triangles: Vec::new(), halfedges: Vec::new() };
    t.points = points.into_iter().map(ComplexPoint::unclassified).collect();
    t.retriangulate();
    t
  }

  fn retriangulate(&mut self) {
    let dpoints: Vec<DPoint> = self.points.iter().map(|p| DPoint { x: p.value.re, y: p.value.im }).collect();
    let result = triangulate(&dpoints);
    self.triangles = result.triangles.into_iter().map(|i| i as u32).collect();
    self.halfedges = result.halfedges.into_iter().map(|h| if h == EMPTY { -1 } else { h as i64 }).collect();
  }

  /// Append new points and re-triangulate the full set.
  pub fn insert_bulk(&mut self, new_points: &[Complex<f64>]) -> Vec<VertexId> {
    let start = self.points.len() as u32;
    self.points.extend(new_points.iter().map(|p| ComplexPoint::unclassified(*p)));
    self.retriangulate();
    (start..start + new_points.len() as u32).map(VertexId).collect()
  }

  pub fn vertex_count(&self) -> usize {
    self.points.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.triangles.len() / 3
  }

  pub fn point(&self, v: VertexId) -> Complex<f64> {
    self.points[v.0 as usize].value
  }

  pub fn quadrant(&self, v: VertexId) -> u8 {
    self.points[v.0 as usize].quadrant
  }

  pub fn set_quadrant(&mut self, v: VertexId, q: u8) {
    self.points[v.0 as usize].quadrant = q;
  }

  pub fn iter_vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
    (0..self.points.len() as u32).map(VertexId)
  }

  pub fn iter_triangle_ids(&self) -> impl Iterator<Item = TriIdx> {
    (0..self.triangle_count() as u32).map(TriIdx)
  }

  /// The three vertices of a triangle, in `delaunator`'s CCW winding order.
  pub fn triangle_vertices(&self, t: TriIdx) -> [VertexId; 3] {
    let base = t.0 as usize * 3;
    [
      VertexId(self.triangles[base]),
      VertexId(self.triangles[base + 1]),
      VertexId(self.triangles[base + 2]),
    ]
  }

  /// Every edge of the triangulation, each yielded once regardless of how
  /// many triangles share it. `delaunator`'s halfedge array pairs each
  /// directed edge with its opposite; we only look at the side with the
  /// smaller halfedge index (or the side with no opposite, a hull edge) to
  /// avoid yielding both directions.
  pub fn iter_edges(&self) -> Vec<Edge> {
    let mut out = Vec::new();
    for e in 0..self.triangles.len() {
      let opposite = self.halfedges[e];
      if opposite != -1 && (opposite as usize) < e {
        continue;
      }
      let a = self.triangles[e];
      let b = self.triangles[next_halfedge(e)];
      out.push(Edge::new(VertexId(a), VertexId(b)));
    }
    out
  }

  /// All triangles touching `v`, found by scanning incident halfedges.
  pub fn incident_triangles(&self, v: VertexId) -> Vec<TriIdx> {
    let mut out = Vec::new();
    for e in 0..self.triangles.len() {
      if self.triangles[e] == v.0 {
        out.push(TriIdx((e / 3) as u32));
      }
    }
    out
  }

  /// Map from edge to the one or two triangles containing it, built once
  /// per refinement pass for candidate detection and contour extraction.
  pub fn edge_triangle_map(&self) -> HashMap<Edge, Vec<TriIdx>> {
    let mut map: HashMap<Edge, Vec<TriIdx>> = HashMap::new();
    for t in self.iter_triangle_ids() {
      let [a, b, c] = self.triangle_vertices(t);
      for e in [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)] {
        map.entry(e).or_default().push(t);
      }
    }
    map
  }
}
