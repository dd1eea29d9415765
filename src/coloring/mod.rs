//! Constraint-aware graph coloring.
//!
//! A [`Graph`] and a [`ConstraintManager`] describe the problem; any
//! [`ColoringSolver`] turns them into a [`ColorAssignment`]. Solvers keep no
//! state between calls, so one instance can be reused across mutations of
//! the graph.

use std::fmt::Debug;
use std::hash::Hash;

pub mod assignment;
pub mod backtracking;
pub mod constraints;
pub mod context;
pub mod factory;
pub mod graph;
pub mod greedy;
pub mod palette;

pub use assignment::{ColorAssignment, Violation};
pub use backtracking::{BacktrackingColoringSolver, SearchStats};
pub use constraints::ConstraintManager;
pub use context::{ColoringContext, HeuristicOptimizer};
pub use factory::{SolverFactory, Strategy};
pub use graph::{Graph, GraphChange};
pub use greedy::GreedyColoringSolver;
pub use palette::{Color, ColorPalette};

use crate::error::Result;

/// A trait designed for vertices that are used in graph coloring. The
/// ordering fixes the order in which solvers visit vertices.
pub trait Vertex: Clone + Eq + Ord + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Ord + Hash + Debug {}

/// A coloring strategy. Implementors read the graph and its constraints and
/// produce a total assignment of every vertex, or fail without a partial
/// result.
pub trait ColoringSolver<V: Vertex> {
  /// Short name of the strategy, as accepted by [`SolverFactory`].
  fn name(&self) -> &'static str;

  /// Colors every vertex of `graph` under `constraints`.
  fn solve(
    &self,
    graph: &Graph<V>,
    constraints: &ConstraintManager<V>,
  ) -> Result<ColorAssignment<V>>;
}

impl<V: Vertex, S: ColoringSolver<V> + ?Sized> ColoringSolver<V> for Box<S> {
  fn name(&self) -> &'static str {
    (**self).name()
  }

  fn solve(
    &self,
    graph: &Graph<V>,
    constraints: &ConstraintManager<V>,
  ) -> Result<ColorAssignment<V>> {
    (**self).solve(graph, constraints)
  }
}

/// Places every pre-assigned vertex of `graph` into `assignment`, in vertex
/// order, before any free vertex is colored. Fails on the first pre-assigned
/// color that is outside the palette, excluded at its own vertex, or shared
/// with an already placed neighbor.
pub(crate) fn place_pre_assigned<V: Vertex>(
  graph: &Graph<V>,
  constraints: &ConstraintManager<V>,
  assignment: &mut ColorAssignment<V>,
) -> Result<()> {
  use crate::error::Error;

  let palette = ColorPalette::new(graph.vertex_count());
  for v in graph.vertices() {
    let c = match constraints.get_pre_assigned(v) {
      Some(c) => c,
      None => continue,
    };

    if !palette.contains(c) {
      return Err(Error::conflict(
        v,
        format!("{} is outside a palette of {} colors", c, palette.size()),
      ));
    }
    if constraints.is_excluded(v, c) {
      return Err(Error::conflict(v, format!("{} is also excluded", c)));
    }
    if let Some(n) = assignment.neighbor_with(graph, v, c) {
      return Err(Error::conflict(
        v,
        format!("neighbor {:?} is pre-assigned {} too", n, c),
      ));
    }

    assignment.assign(v.clone(), c);
  }
  Ok(())
}
