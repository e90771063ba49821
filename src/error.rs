use num_complex::Complex;
use thiserror::Error;

/// Precondition failures (§7.1). Fatal to the call.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GrpfError {
  #[error("fewer than 3 seed points supplied; a seed triangle cannot be formed")]
  InsufficientSeeds,

  #[error("seed points span a degenerate (zero-area) bounding box")]
  DegenerateSeed,

  #[error("seed point {0} maps outside the scaled coordinate range [{1}, {2}]")]
  SeedOutOfRange(Complex<f64>, f64, f64),

  #[error("f returned a non-finite value; it cannot be classified into a quadrant")]
  NonFiniteValue,
}

/// Non-fatal outcomes (§7.2, §7.3). Collected on `GrpfReport` and also logged.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Warning {
  #[error("tess_size_hint ({hint}) exceeds max_nodes ({max_nodes}); hint is ignored")]
  TessSizeHintExceedsMaxNodes { hint: usize, max_nodes: usize },

  #[error("max_iterations ({0}) exhausted before convergence; returning best-effort result")]
  MaxIterationsExceeded(usize),

  #[error("max_nodes ({0}) exhausted before convergence; returning best-effort result")]
  MaxNodesExceeded(usize),
}
