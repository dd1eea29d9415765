//! Call-forwarding holders of a solver. Neither adds behavior of its own;
//! they let call sites stay fixed while the strategy behind them changes.

use super::{
  ColorAssignment, ColoringSolver, ConstraintManager, Graph, SolverFactory,
  Strategy, Vertex,
};
use crate::error::Result;

/// Holds the current coloring strategy, which can be swapped at any time.
pub struct ColoringContext<V: Vertex> {
  solver: Box<dyn ColoringSolver<V>>,
}

impl<V: Vertex> ColoringContext<V> {
  pub fn new(solver: Box<dyn ColoringSolver<V>>) -> Self {
    Self { solver }
  }

  /// Creates a context around a fresh solver for `strategy`.
  pub fn with_strategy(strategy: Strategy) -> Self {
    Self::new(SolverFactory::for_strategy(strategy))
  }

  /// Replaces the current solver, returning the previous one.
  pub fn set_solver(
    &mut self,
    solver: Box<dyn ColoringSolver<V>>,
  ) -> Box<dyn ColoringSolver<V>> {
    std::mem::replace(&mut self.solver, solver)
  }

  /// Name of the current strategy.
  pub fn strategy_name(&self) -> &'static str {
    self.solver.name()
  }

  /// Executes the current solver.
  pub fn solve(
    &self,
    graph: &Graph<V>,
    constraints: &ConstraintManager<V>,
  ) -> Result<ColorAssignment<V>> {
    log::debug!("context: solving with `{}`", self.solver.name());
    self.solver.solve(graph, constraints)
  }
}

/// Entry point for heuristic runs. Currently forwards to its solver.
pub struct HeuristicOptimizer<V: Vertex> {
  solver: Box<dyn ColoringSolver<V>>,
}

impl<V: Vertex> HeuristicOptimizer<V> {
  pub fn new(solver: Box<dyn ColoringSolver<V>>) -> Self {
    Self { solver }
  }

  /// Executes the held solver.
  pub fn optimize(
    &self,
    graph: &Graph<V>,
    constraints: &ConstraintManager<V>,
  ) -> Result<ColorAssignment<V>> {
    self.solver.solve(graph, constraints)
  }
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::*;
  use crate::coloring::{
    BacktrackingColoringSolver, Color, GreedyColoringSolver,
  };
  use crate::error::Error;

  #[test]
  fn hot_swap_changes_behavior() {
    // greedy dead-ends here, backtracking does not.
    let mut g = Graph::new();
    for v in 0..3u32 {
      g.add_vertex(v);
    }
    g.add_edge(0, 1).unwrap();
    let mut cm = ConstraintManager::new();
    cm.add_exclusion(0, Color(2));
    cm.add_exclusion(1, Color(1));
    cm.add_exclusion(1, Color(2));

    let mut ctx = ColoringContext::new(Box::new(GreedyColoringSolver));
    assert_eq!(ctx.strategy_name(), "greedy");
    assert!(matches!(
      ctx.solve(&g, &cm),
      Err(Error::NoAvailableColor { .. })
    ));

    let old = ctx.set_solver(Box::new(BacktrackingColoringSolver::new()));
    assert_eq!(old.name(), "greedy");
    let res = ctx.solve(&g, &cm).unwrap();
    assert_eq!((res[&0], res[&1]), (Color(1), Color(0)));
  }

  #[test]
  fn optimizer_forwards() {
    let mut g = Graph::new();
    g.add_vertex("only");
    let opt = HeuristicOptimizer::new(SolverFactory::for_strategy(
      Strategy::Greedy,
    ));
    let res = opt.optimize(&g, &ConstraintManager::new()).unwrap();
    assert_eq!(res[&"only"], Color(0));

    let ctx = ColoringContext::with_strategy(Strategy::Backtracking);
    assert_eq!(ctx.solve(&g, &ConstraintManager::new()).unwrap(), res);
  }
}
