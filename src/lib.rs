//! Global complex Roots and Poles Finding.
//!
//! An adaptive-mesh algorithm that locates the zeros and poles of a
//! complex-valued function over a region of the complex plane, without
//! requiring derivatives or prior knowledge of how many roots exist. It
//! works by triangulating the domain, classifying the sign of `f` at each
//! node into one of four quadrants, refining the mesh near quadrant
//! transitions, and reading off winding numbers around the resulting
//! contours via the discrete argument principle.
//!
//! ```
//! use grpf::{grpf, mesh::rectangular_domain, Parameters};
//! use num_complex::Complex;
//!
//! let seeds = rectangular_domain(-2.0, 2.0, -2.0, 2.0, 0.6);
//! let report = grpf(|z| z - Complex::new(1.0, 0.0), &seeds, Parameters::default()).unwrap();
//! assert_eq!(report.zeros.len(), 1);
//! ```

pub mod argument_principle;
pub mod candidate;
pub mod contour;
pub mod engine;
pub mod error;
pub mod mesh;
pub mod params;
pub mod point;
pub mod quadrant;
pub mod refine;
pub mod region;
pub mod scaling;
pub mod tessellation;

pub use argument_principle::{Classification, EvaluatedRegion};
pub use engine::{grpf, grpf_with_plot_data, GrpfReport, PlotData};
pub use error::{GrpfError, Warning};
pub use params::Parameters;
pub use point::VertexId;
pub use region::Region;
pub use tessellation::{Edge, TriIdx};
