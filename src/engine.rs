use crate::argument_principle::{evaluate_region, Classification};
use crate::candidate::detect_candidates;
use crate::contour::extract_contour;
use crate::error::{GrpfError, Warning};
use crate::params::Parameters;
use crate::point::VertexId;
use crate::quadrant;
use crate::refine::refine_once;
use crate::region::walk_regions;
use crate::scaling::Scaling;
use crate::tessellation::{Edge, Tessellation, MAX_COORD, MIN_COORD};
use num_complex::Complex;
use rayon::prelude::*;

/// The outcome of a `grpf` run (§5): the located zeros and poles, in the
/// caller's original coordinate system, plus run diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct GrpfReport {
  pub zeros: Vec<Complex<f64>>,
  pub poles: Vec<Complex<f64>>,
  pub iterations: usize,
  pub nodes: usize,
  pub warnings: Vec<Warning>,
}

/// Mesh state exposed for plotting/diagnostics (§7.3, §11), returned only
/// by [`grpf_with_plot_data`] since most callers don't need it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
  pub points: Vec<Complex<f64>>,
  pub quadrants: Vec<u8>,
  /// Every edge inspected in the final candidate-detection pass, paired
  /// with the `ΔQ` that made it a candidate.
  pub candidate_edges: Vec<(Edge, i32)>,
}

/// Evaluate `f` at every vertex in `ids` and record its quadrant.
/// Sequential by default; with `multithreading` set, `f` is evaluated
/// across vertices with `rayon` before writing results back serially (§10.3).
fn assign_quadrants<F>(tess: &mut Tessellation, f: &F, scaling: &Scaling, ids: &[VertexId], multithreading: bool) -> Result<(), GrpfError>
where
  F: Fn(Complex<f64>) -> Complex<f64> + Sync,
{
  let compute = |&id: &VertexId| -> Result<(VertexId, u8), GrpfError> {
    let z = scaling.inverse(tess.point(id));
    let w = f(z);
    let q = quadrant::classify_checked(w).ok_or(GrpfError::NonFiniteValue)?;
    Ok((id, q))
  };

  let results: Vec<Result<(VertexId, u8), GrpfError>> =
    if multithreading { ids.par_iter().map(compute).collect() } else { ids.iter().map(compute).collect() };

  for r in results {
    let (id, q) = r?;
    tess.set_quadrant(id, q);
  }
  Ok(())
}

struct RunOutput {
  tess: Tessellation,
  final_candidates: Vec<Edge>,
  iterations: usize,
  warnings: Vec<Warning>,
}

fn run<F>(f: &F, seeds: &[Complex<f64>], params: &Parameters) -> Result<(RunOutput, Scaling), GrpfError>
where
  F: Fn(Complex<f64>) -> Complex<f64> + Sync,
{
  let mut warnings = params.validate();
  let scaling = Scaling::fit(seeds, MIN_COORD, MAX_COORD)?;
  let scaled: Vec<Complex<f64>> = seeds.iter().map(|z| scaling.forward(*z)).collect();

  let mut tess = Tessellation::new(scaled);
  let all_ids: Vec<VertexId> = tess.iter_vertex_ids().collect();
  assign_quadrants(&mut tess, f, &scaling, &all_ids, params.multithreading)?;

  let mut iterations = 0;
  let mut final_candidates;
  loop {
    final_candidates = detect_candidates(&tess);
    log::debug!("iteration {}: {} nodes, {} candidate edges", iterations, tess.vertex_count(), final_candidates.len());
    if final_candidates.is_empty() {
      break;
    }

    let step = refine_once(&tess, &final_candidates, params.tolerance, params.skinny_triangle);
    if step.converged {
      log::debug!("converged after {} iterations", iterations);
      break;
    }

    if iterations >= params.max_iterations {
      log::warn!("max_iterations ({}) exhausted before convergence", params.max_iterations);
      warnings.push(Warning::MaxIterationsExceeded(params.max_iterations));
      break;
    }

    let mut new_points = step.new_points;
    let budget = params.max_nodes.saturating_sub(tess.vertex_count());
    if new_points.len() > budget {
      new_points.truncate(budget);
      log::warn!("max_nodes ({}) exhausted before convergence", params.max_nodes);
      warnings.push(Warning::MaxNodesExceeded(params.max_nodes));
    }
    if new_points.is_empty() {
      break;
    }

    let new_ids = tess.insert_bulk(&new_points);
    assign_quadrants(&mut tess, f, &scaling, &new_ids, params.multithreading)?;
    iterations += 1;
  }
  log::info!("run finished: {} nodes, {} regions pending classification", tess.vertex_count(), final_candidates.len());

  Ok((RunOutput { tess, final_candidates, iterations, warnings }, scaling))
}

fn build_report(output: RunOutput, scaling: &Scaling) -> GrpfReport {
  let contour = extract_contour(&output.tess, &output.final_candidates);
  let regions = walk_regions(&output.tess, &contour);

  let mut zeros = Vec::new();
  let mut poles = Vec::new();
  for region in &regions {
    let evaluated = evaluate_region(&output.tess, region);
    let location = scaling.inverse(evaluated.location);
    match evaluated.classification {
      Classification::Zero => zeros.push(location),
      Classification::Pole => poles.push(location),
      Classification::Neither => {}
    }
  }

  GrpfReport {
    zeros,
    poles,
    iterations: output.iterations,
    nodes: output.tess.vertex_count(),
    warnings: output.warnings,
  }
}

/// Locate the zeros and poles of `f` inside the domain seeded by `seeds`
/// (§2, §5). `seeds` is the initial coarse mesh — typically produced by
/// [`crate::mesh::rectangular_domain`] or [`crate::mesh::disk_domain`].
pub fn grpf<F>(f: F, seeds: &[Complex<f64>], params: Parameters) -> Result<GrpfReport, GrpfError>
where
  F: Fn(Complex<f64>) -> Complex<f64> + Sync,
{
  let (output, scaling) = run(&f, seeds, &params)?;
  Ok(build_report(output, &scaling))
}

/// As [`grpf`], but also returns the final mesh state for plotting (§7.3).
pub fn grpf_with_plot_data<F>(f: F, seeds: &[Complex<f64>], params: Parameters) -> Result<(GrpfReport, PlotData), GrpfError>
where
  F: Fn(Complex<f64>) -> Complex<f64> + Sync,
{
  let (output, scaling) = run(&f, seeds, &params)?;
  let candidate_edges = output
    .final_candidates
    .iter()
    .map(|e| (*e, crate::candidate::delta_q(output.tess.quadrant(e.0), output.tess.quadrant(e.1))))
    .collect();
  let plot_data = PlotData {
    points: output.tess.iter_vertex_ids().map(|v| scaling.inverse(output.tess.point(v))).collect(),
    quadrants: output.tess.iter_vertex_ids().map(|v| output.tess.quadrant(v)).collect(),
    candidate_edges,
  };
  let report = build_report(output, &scaling);
  Ok((report, plot_data))
}
