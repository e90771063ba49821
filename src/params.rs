use crate::error::Warning;

/// Tuning knobs for a `grpf` call (§6). Defaults match the reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
  pub max_iterations: usize,
  pub max_nodes: usize,
  pub skinny_triangle: f64,
  pub tess_size_hint: usize,
  pub tolerance: f64,
  pub multithreading: bool,
}

impl Default for Parameters {
  fn default() -> Self {
    Parameters {
      max_iterations: 100,
      max_nodes: 500_000,
      skinny_triangle: 3.0,
      tess_size_hint: 5_000,
      tolerance: 1e-9,
      multithreading: false,
    }
  }
}

impl Parameters {
  pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
    self.max_iterations = max_iterations;
    self
  }

  pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
    self.max_nodes = max_nodes;
    self
  }

  pub fn with_skinny_triangle(mut self, skinny_triangle: f64) -> Self {
    self.skinny_triangle = skinny_triangle;
    self
  }

  pub fn with_tess_size_hint(mut self, tess_size_hint: usize) -> Self {
    self.tess_size_hint = tess_size_hint;
    self
  }

  pub fn with_tolerance(mut self, tolerance: f64) -> Self {
    self.tolerance = tolerance;
    self
  }

  pub fn with_multithreading(mut self, multithreading: bool) -> Self {
    self.multithreading = multithreading;
    self
  }

  /// Non-fatal parameter warnings (§6 constraint: `tess_size_hint ≤ max_nodes`).
  pub fn validate(&self) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if self.tess_size_hint > self.max_nodes {
      warnings.push(Warning::TessSizeHintExceedsMaxNodes {
        hint: self.tess_size_hint,
        max_nodes: self.max_nodes,
      });
    }
    warnings
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_spec_table() {
    let p = Parameters::default();
    assert_eq!(p.max_iterations, 100);
    assert_eq!(p.max_nodes, 500_000);
    assert_eq!(p.skinny_triangle, 3.0);
    assert_eq!(p.tess_size_hint, 5_000);
    assert_eq!(p.tolerance, 1e-9);
    assert!(!p.multithreading);
  }

  #[test]
  fn tess_size_hint_over_max_nodes_warns() {
    let p = Parameters::default().with_tess_size_hint(1_000_000);
    assert_eq!(
      p.validate(),
      vec![Warning::TessSizeHintExceedsMaxNodes {
        hint: 1_000_000,
        max_nodes: 500_000
      }]
    );
  }

  #[test]
  fn builder_chain() {
    let p = Parameters::default()
      .with_max_iterations(10)
      .with_tolerance(1e-6)
      .with_multithreading(true);
    assert_eq!(p.max_iterations, 10);
    assert_eq!(p.tolerance, 1e-6);
    assert!(p.multithreading);
  }
}
