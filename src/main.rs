//! Top Level Environment
//!
//! Reads a problem file, colors it, applies the file's dynamic changes and
//! colors it again, then emits every assignment.

mod args;

use std::io;
use std::path::Path;

use colorsolve::coloring::{
  BacktrackingColoringSolver, ColorAssignment, ColoringContext,
  ColoringSolver, ConstraintManager, Graph, SolverFactory, Strategy,
};
use colorsolve::const_params::{DEFAULT_STRATEGY, LOG_TARGET};
use colorsolve::emit::{self, Report, Round};
use colorsolve::error::{Error, Result};
use colorsolve::problem::Problem;

/// Picks the solver for this run. A node limit only bounds backtracking.
fn make_solver(
  strategy: Strategy,
  node_limit: Option<u64>,
) -> Box<dyn ColoringSolver<u64>> {
  match (strategy, node_limit) {
    (Strategy::Backtracking, Some(n)) => {
      Box::new(BacktrackingColoringSolver::new().with_node_limit(n))
    }
    (Strategy::Greedy, Some(n)) => {
      log::warn!("node limit {} ignored by greedy coloring", n);
      SolverFactory::for_strategy(Strategy::Greedy)
    }
    (s, None) => SolverFactory::for_strategy(s),
  }
}

/// Solves once, optionally checking the result.
fn solve_checked(
  ctx: &ColoringContext<u64>,
  graph: &Graph<u64>,
  constraints: &ConstraintManager<u64>,
  check: bool,
) -> Result<ColorAssignment<u64>> {
  let assignment = ctx.solve(graph, constraints)?;
  if check {
    if let Err(v) = assignment.verify(graph, constraints) {
      return Err(Error::InvalidAssignment(format!("{:?}", v)));
    }
    log::info!("assignment verified");
  }
  Ok(assignment)
}

fn run(cfg: args::Config) -> Result<()> {
  let filename = cfg.file.as_deref().unwrap_or_default();
  let problem = Problem::from_file(Path::new(filename))?;
  let (mut graph, constraints) = problem.build()?;

  let strategy = match (cfg.strategy, problem.strategy) {
    (Some(s), _) | (None, Some(s)) => s,
    (None, None) => DEFAULT_STRATEGY.parse()?,
  };
  log::info!(
    "{}: {} vertices, {} edges, strategy {}",
    filename,
    graph.vertex_count(),
    graph.edge_count(),
    strategy
  );

  let ctx = ColoringContext::new(make_solver(strategy, cfg.node_limit));
  let initial = solve_checked(&ctx, &graph, &constraints, cfg.check)?;

  let updated = if problem.changes.is_empty() {
    None
  } else {
    log::info!("applying {} changes", problem.changes.len());
    graph.apply_dynamic_changes(problem.changes.iter().cloned())?;
    Some(solve_checked(&ctx, &graph, &constraints, cfg.check)?)
  };

  let mut report = Report {
    strategy: strategy.as_str(),
    rounds: vec![Round::new("initial", &initial)],
  };
  if let Some(a) = &updated {
    report.rounds.push(Round::new("after changes", a));
  }

  let stdout = io::stdout();
  emit::emit(cfg.emit, &mut stdout.lock(), &report)
}

fn main() {
  let cfg = match args::parse_args() {
    Ok(cfg) => cfg,
    Err(msg) => {
      eprintln!("{}", msg);
      std::process::exit(2);
    }
  };

  let level = if cfg.verbose {
    log::LevelFilter::Debug
  } else {
    log::LevelFilter::Info
  };
  env_logger::Builder::new()
    .filter_module(LOG_TARGET, level)
    .parse_default_env()
    .target(env_logger::Target::Stderr)
    .format_timestamp(None)
    .format_module_path(false)
    .format_target(false)
    .init();

  if let Err(e) = run(cfg) {
    eprintln!("{}", e);
    std::process::exit(1);
  }
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::*;

  #[test]
  fn node_limit_from_problem_file_spares_greedy() {
    assert_eq!(make_solver(Strategy::Greedy, Some(5)).name(), "greedy");
    let b = make_solver(Strategy::Backtracking, Some(5));
    assert_eq!(b.name(), "backtracking");
  }
}
