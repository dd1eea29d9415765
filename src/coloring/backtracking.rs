//! Exhaustive depth-first coloring with undo on failure.
//!
//! The search walks a vertex order fixed once per solve (ascending vertex
//! order, pre-assigned vertices excluded since they are placed up front).
//! Each frame of an explicit stack remembers the next color to try at its
//! depth:
//!
//! 1. If the depth equals the number of free vertices, every vertex is
//!    colored and the search succeeds.
//! 2. Otherwise the lowest untried color that no neighbor holds and that is
//!    not excluded is assigned, and a fresh frame is pushed for the next
//!    vertex.
//! 3. If no such color is left, the frame is popped and the previous
//!    vertex is uncolored, so that it resumes with its next color.
//!
//! Popping the last frame means the whole space has been exhausted.

use std::fmt;

use super::{
  place_pre_assigned, Color, ColorAssignment, ColorPalette, ColoringSolver,
  ConstraintManager, Graph, Vertex,
};
use crate::const_params::SEARCH_PROGRESS_INTERVAL;
use crate::error::{Error, Result};

/// Counters describing how far a search went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
  /// Number of tentative color assignments made.
  pub nodes: u64,
  /// Number of assignments undone.
  pub backtracks: u64,
  /// Number of free vertices colored at this point of the search.
  pub depth: usize,
}

/// Decides, after every tentative assignment that leaves some vertex
/// uncolored, whether the search may go on.
pub type ContinuePredicate = Box<dyn Fn(&SearchStats) -> bool>;

/// Returns the first coloring found under a palette of one color per vertex.
/// The result is deterministic: vertices and colors are both tried in
/// ascending order.
#[derive(Default)]
pub struct BacktrackingColoringSolver {
  node_limit: Option<u64>,
  keep_going: Option<ContinuePredicate>,
}

impl BacktrackingColoringSolver {
  /// Creates an unbounded solver.
  pub fn new() -> Self {
    Self::default()
  }

  /// Aborts the search once more than `limit` assignments have been tried.
  pub fn with_node_limit(mut self, limit: u64) -> Self {
    self.node_limit = Some(limit);
    self
  }

  /// Aborts the search as soon as `pred` returns false.
  pub fn with_continue<F>(mut self, pred: F) -> Self
  where
    F: Fn(&SearchStats) -> bool + 'static,
  {
    self.keep_going = Some(Box::new(pred));
    self
  }

  fn should_continue(&self, stats: &SearchStats) -> bool {
    if let Some(limit) = self.node_limit {
      if stats.nodes > limit {
        return false;
      }
    }
    self.keep_going.as_ref().map_or(true, |pred| pred(stats))
  }

  /// Tests if assigning `c` to `v` is valid: no neighbor holds `c` and `c`
  /// is not excluded at `v`.
  fn is_valid<V: Vertex>(
    graph: &Graph<V>,
    constraints: &ConstraintManager<V>,
    assignment: &ColorAssignment<V>,
    v: &V,
    c: Color,
  ) -> bool {
    assignment.neighbor_with(graph, v, c).is_none()
      && !constraints.is_excluded(v, c)
  }

  /// Runs the search and reports its statistics along with the coloring.
  pub fn search<V: Vertex>(
    &self,
    graph: &Graph<V>,
    constraints: &ConstraintManager<V>,
  ) -> Result<(ColorAssignment<V>, SearchStats)> {
    let mut assignment = ColorAssignment::new();
    place_pre_assigned(graph, constraints, &mut assignment)?;

    let order: Vec<&V> =
      graph.vertices().filter(|v| !assignment.contains(v)).collect();
    let num_colors = graph.vertex_count();
    let mut stats = SearchStats::default();

    log::debug!(
      "backtracking: {} free vertices, {} pre-assigned, {} colors",
      order.len(),
      assignment.len(),
      num_colors
    );

    // frames[d] is the next color to try for order[d].
    let mut frames: Vec<usize> = vec![0];

    while let Some(&start) = frames.last() {
      let depth = frames.len() - 1;
      if depth == order.len() {
        log::debug!("backtracking: solved, {:?}", stats);
        return Ok((assignment, stats));
      }

      let v = order[depth];
      let found = ColorPalette::starting_at(num_colors, start)
        .find(|c| Self::is_valid(graph, constraints, &assignment, v, *c));

      match found {
        Some(c) => {
          assignment.assign(v.clone(), c);
          if let Some(next) = frames.last_mut() {
            *next = c.index() + 1;
          }
          frames.push(0);

          stats.nodes += 1;
          stats.depth = depth + 1;
          if stats.nodes % SEARCH_PROGRESS_INTERVAL == 0 {
            log::debug!("backtracking: progress {:?}", stats);
          }
          // a completed coloring is returned even if this node trips the
          // budget.
          if stats.depth < order.len() && !self.should_continue(&stats) {
            log::warn!("backtracking: aborted, {:?}", stats);
            return Err(Error::SearchAborted { nodes: stats.nodes });
          }
        }
        None => {
          frames.pop();
          if let Some(prev) = depth.checked_sub(1) {
            assignment.unassign(order[prev]);
            stats.backtracks += 1;
            stats.depth = prev;
          }
        }
      }
    }

    log::warn!("backtracking: search space exhausted, {:?}", stats);
    Err(Error::Unsatisfiable)
  }
}

impl fmt::Debug for BacktrackingColoringSolver {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BacktrackingColoringSolver")
      .field("node_limit", &self.node_limit)
      .field("keep_going", &self.keep_going.is_some())
      .finish()
  }
}

impl<V: Vertex> ColoringSolver<V> for BacktrackingColoringSolver {
  fn name(&self) -> &'static str {
    "backtracking"
  }

  fn solve(
    &self,
    graph: &Graph<V>,
    constraints: &ConstraintManager<V>,
  ) -> Result<ColorAssignment<V>> {
    self.search(graph, constraints).map(|(assignment, _)| assignment)
  }
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::*;
  use std::cell::Cell;
  use std::rc::Rc;

  fn path3() -> Graph<u32> {
    let mut g = Graph::new();
    for v in 0..3 {
      g.add_vertex(v);
    }
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g
  }

  fn cols(a: &ColorAssignment<u32>) -> Vec<usize> {
    a.iter().map(|(_, c)| c.index()).collect()
  }

  #[test]
  fn empty_graph() {
    let g = Graph::<u32>::new();
    let res = BacktrackingColoringSolver::new()
      .solve(&g, &ConstraintManager::new())
      .unwrap();
    assert!(res.is_empty());
  }

  #[test]
  fn simple_path() {
    let g = path3();
    let res = BacktrackingColoringSolver::new()
      .solve(&g, &ConstraintManager::new())
      .unwrap();
    assert_eq!(cols(&res), vec![0, 1, 0]);
  }

  #[test]
  fn pre_assigned_propagates() {
    let g = path3();
    let mut cm = ConstraintManager::new();
    cm.set_pre_assigned(0, Color(1));
    let res = BacktrackingColoringSolver::new().solve(&g, &cm).unwrap();
    assert_eq!(cols(&res), vec![1, 0, 1]);
  }

  #[test]
  fn exclusion_respected() {
    let g = path3();
    let mut cm = ConstraintManager::new();
    cm.add_exclusion(1, Color(0));
    let res = BacktrackingColoringSolver::new().solve(&g, &cm).unwrap();
    assert_eq!(cols(&res), vec![0, 1, 0]);
  }

  #[test]
  fn backtracks_where_greedy_dead_ends() {
    // 1 only accepts color 0, so 0 must give up its first choice. Greedy
    // never revisits 0 and dead-ends at 1.
    let g = path3();
    let mut cm = ConstraintManager::new();
    cm.add_exclusion(0, Color(2));
    cm.add_exclusion(1, Color(1));
    cm.add_exclusion(1, Color(2));

    let greedy = crate::coloring::GreedyColoringSolver.solve(&g, &cm);
    assert!(matches!(greedy, Err(Error::NoAvailableColor { .. })));

    let solver = BacktrackingColoringSolver::new();
    let (res, stats) = solver.search(&g, &cm).unwrap();
    assert_eq!(cols(&res), vec![1, 0, 1]);
    assert_eq!(stats.backtracks, 1);
  }

  #[test]
  fn undo_restores_state() {
    // triangle 0-1-2 plus pendant 3 on 2, where 3 only accepts colors that
    // force 2 to change after the first attempt.
    let mut g = Graph::new();
    for v in 0..4u32 {
      g.add_vertex(v);
    }
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(0, 2).unwrap();
    g.add_edge(2, 3).unwrap();
    let mut cm = ConstraintManager::new();
    for c in &[0, 1, 3] {
      cm.add_exclusion(3, Color(*c));
    }

    let solver = BacktrackingColoringSolver::new();
    let (res, stats) = solver.search(&g, &cm).unwrap();
    assert_eq!(cols(&res), vec![0, 1, 3, 2]);
    assert!(stats.backtracks > 0);
    assert_eq!(res.verify(&g, &cm), Ok(()));
  }

  #[test]
  fn unsatisfiable() {
    let mut g = Graph::new();
    g.add_vertex(0u32);
    g.add_vertex(1u32);
    g.add_edge(0, 1).unwrap();
    let mut cm = ConstraintManager::new();
    cm.add_exclusion(0, Color(1));
    cm.add_exclusion(1, Color(1));
    let res = BacktrackingColoringSolver::new().solve(&g, &cm);
    assert!(matches!(res, Err(Error::Unsatisfiable)));
  }

  #[test]
  fn pre_assigned_contradiction_fails_fast() {
    let g = path3();
    let mut cm = ConstraintManager::new();
    cm.set_pre_assigned(1, Color(0));
    cm.add_exclusion(1, Color(0));
    let res = BacktrackingColoringSolver::new().solve(&g, &cm);
    assert!(matches!(res, Err(Error::ConstraintConflict { .. })));
  }

  #[test]
  fn node_limit_aborts() {
    let g = path3();
    let res = BacktrackingColoringSolver::new()
      .with_node_limit(1)
      .solve(&g, &ConstraintManager::new());
    assert!(matches!(res, Err(Error::SearchAborted { nodes: 2 })));
  }

  #[test]
  fn continue_predicate_sees_every_node() {
    let g = path3();
    let seen = Rc::new(Cell::new(0u64));
    let seen_in_pred = Rc::clone(&seen);
    let solver = BacktrackingColoringSolver::new().with_continue(move |s| {
      seen_in_pred.set(s.nodes);
      true
    });
    solver.solve(&g, &ConstraintManager::new()).unwrap();
    assert_eq!(seen.get(), 2);

    let stop = BacktrackingColoringSolver::new().with_continue(|s| s.depth < 2);
    let res = stop.solve(&g, &ConstraintManager::new());
    assert!(matches!(res, Err(Error::SearchAborted { nodes: 2 })));
  }

  #[test]
  fn completing_node_is_never_aborted() {
    let g = path3();
    let cm = ConstraintManager::new();

    let solver =
      BacktrackingColoringSolver::new().with_continue(|s| s.depth < 3);
    let (res, stats) = solver.search(&g, &cm).unwrap();
    assert_eq!(cols(&res), vec![0, 1, 0]);
    assert_eq!(stats.nodes, 3);

    let solver = BacktrackingColoringSolver::new().with_node_limit(2);
    assert_eq!(cols(&solver.solve(&g, &cm).unwrap()), vec![0, 1, 0]);
  }
}
