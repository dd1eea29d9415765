//! Single-pass greedy coloring.

use super::{
  place_pre_assigned, Color, ColorAssignment, ColorPalette, ColoringSolver,
  ConstraintManager, Graph, Vertex,
};
use crate::error::{Error, Result};

/// Colors vertices one at a time, in vertex order, each with the lowest
/// color that no already-colored neighbor holds and that is not excluded.
/// Never looks ahead and never revisits a choice, so it may fail where
/// [`super::BacktrackingColoringSolver`] would succeed.
///
/// # Examples
/// ```
/// use colorsolve::coloring::*;
///
/// let mut g = Graph::new();
/// g.add_vertex("a");
/// g.add_vertex("b");
/// g.add_edge("a", "b").unwrap();
///
/// let cm = ConstraintManager::new();
/// let res = GreedyColoringSolver.solve(&g, &cm).unwrap();
/// assert_eq!((res[&"a"], res[&"b"]), (Color(0), Color(1)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyColoringSolver;

impl GreedyColoringSolver {
  pub fn new() -> Self {
    GreedyColoringSolver
  }

  /// Colors the _uncolored_ vertex `u` with the first color of a brand-new
  /// palette that does not conflict with its neighbors and is allowed at
  /// `u`. Returns the color chosen, or `None` if the palette runs dry.
  fn color_vertex<V: Vertex>(
    graph: &Graph<V>,
    constraints: &ConstraintManager<V>,
    assignment: &mut ColorAssignment<V>,
    u: &V,
  ) -> Option<Color> {
    let unavailable_col = assignment.neighbor_colors(graph, u);

    let selected_col = ColorPalette::new(graph.vertex_count()).find(|c| {
      !unavailable_col.contains(c) && !constraints.is_excluded(u, *c)
    })?;

    assignment.assign(u.clone(), selected_col);
    Some(selected_col)
  }
}

impl<V: Vertex> ColoringSolver<V> for GreedyColoringSolver {
  fn name(&self) -> &'static str {
    "greedy"
  }

  fn solve(
    &self,
    graph: &Graph<V>,
    constraints: &ConstraintManager<V>,
  ) -> Result<ColorAssignment<V>> {
    log::debug!("greedy: coloring {} vertices", graph.vertex_count());

    let mut assignment = ColorAssignment::new();
    place_pre_assigned(graph, constraints, &mut assignment)?;

    for u in graph.vertices() {
      if assignment.contains(u) {
        continue;
      }
      if Self::color_vertex(graph, constraints, &mut assignment, u).is_none() {
        log::warn!("greedy: dead end at vertex {:?}", u);
        return Err(Error::NoAvailableColor {
          vertex: format!("{:?}", u),
        });
      }
    }

    log::debug!("greedy: done, {} colors used", assignment.colors_used());
    Ok(assignment)
  }
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::*;

  fn path3() -> Graph<u32> {
    let mut g = Graph::new();
    for v in 0..3 {
      g.add_vertex(v);
    }
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g
  }

  #[test]
  fn empty_graph() {
    let g = Graph::<u32>::new();
    let res = GreedyColoringSolver.solve(&g, &ConstraintManager::new());
    assert!(res.unwrap().is_empty());
  }

  #[test]
  fn single_vertex_gets_color_zero() {
    let mut g = Graph::new();
    g.add_vertex(0u32);
    let res = GreedyColoringSolver.solve(&g, &ConstraintManager::new());
    assert_eq!(res.unwrap()[&0], Color(0));
  }

  #[test]
  fn path_is_two_colored() {
    let g = path3();
    let res = GreedyColoringSolver
      .solve(&g, &ConstraintManager::new())
      .unwrap();
    let cols: Vec<Color> = res.into_iter().map(|(_, c)| c).collect();
    assert_eq!(cols, vec![Color(0), Color(1), Color(0)]);
  }

  #[test]
  fn exclusion_skips_color() {
    let g = path3();
    let mut cm = ConstraintManager::new();
    cm.add_exclusion(0, Color(0));
    let res = GreedyColoringSolver.solve(&g, &cm).unwrap();
    assert_eq!((res[&0], res[&1], res[&2]), (Color(1), Color(0), Color(1)));
  }

  #[test]
  fn pre_assigned_placed_first() {
    // vertex 2 is pre-assigned 0, so vertex 1 must avoid 0 even though it is
    // visited first.
    let g = path3();
    let mut cm = ConstraintManager::new();
    cm.set_pre_assigned(2, Color(0));
    let res = GreedyColoringSolver.solve(&g, &cm).unwrap();
    assert_eq!(res[&1], Color(1));
    assert_eq!(res.verify(&g, &cm), Ok(()));
  }

  #[test]
  fn pre_assigned_neighbors_conflict() {
    let g = path3();
    let mut cm = ConstraintManager::new();
    cm.set_pre_assigned(0, Color(1));
    cm.set_pre_assigned(1, Color(1));
    let res = GreedyColoringSolver.solve(&g, &cm);
    assert!(matches!(res, Err(Error::ConstraintConflict { .. })));
  }

  #[test]
  fn pre_assigned_and_excluded_conflict() {
    let g = path3();
    let mut cm = ConstraintManager::new();
    cm.set_pre_assigned(1, Color(2));
    cm.add_exclusion(1, Color(2));
    let res = GreedyColoringSolver.solve(&g, &cm);
    assert!(matches!(res, Err(Error::ConstraintConflict { .. })));
  }

  #[test]
  fn pre_assigned_outside_palette() {
    let g = path3();
    let mut cm = ConstraintManager::new();
    cm.set_pre_assigned(0, Color(3));
    let res = GreedyColoringSolver.solve(&g, &cm);
    assert!(matches!(res, Err(Error::ConstraintConflict { .. })));
  }

  #[test]
  fn dead_end_is_reported() {
    // a two-vertex graph has a palette of two colors; exclude both at 1.
    let mut g = Graph::new();
    g.add_vertex(0u32);
    g.add_vertex(1u32);
    let mut cm = ConstraintManager::new();
    cm.add_exclusion(1, Color(0));
    cm.add_exclusion(1, Color(1));
    let res = GreedyColoringSolver.solve(&g, &cm);
    assert!(matches!(res, Err(Error::NoAvailableColor { .. })));
  }
}
