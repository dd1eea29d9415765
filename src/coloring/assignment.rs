//! The vertex-to-color map produced by every solver.

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::Serialize;

use super::{Color, ConstraintManager, Graph, Vertex};
use crate::util::datastructure::Counter;

/// A way in which an assignment fails to be a valid coloring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation<V> {
  /// A vertex of the graph has no color.
  Uncolored(V),
  /// Both endpoints of an edge share a color.
  SameColorEdge(V, V, Color),
  /// A vertex carries one of its excluded colors.
  Excluded(V, Color),
  /// A pre-assigned vertex carries another color.
  IgnoredPreAssignment(V, Color),
}

/// Maps vertices to colors. Partial while a solver works on it, total over
/// the graph's vertices once returned. Iterates in vertex order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorAssignment<V: Vertex>(BTreeMap<V, Color>);

impl<V: Vertex> Default for ColorAssignment<V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<V: Vertex> ColorAssignment<V> {
  pub fn new() -> Self {
    ColorAssignment(BTreeMap::new())
  }

  /// Gets the color of a certain vertex. `None` if it is uncolored.
  pub fn get(&self, v: &V) -> Option<Color> {
    self.0.get(v).copied()
  }

  /// Colors `v`, returning its previous color.
  pub fn assign(&mut self, v: V, c: Color) -> Option<Color> {
    self.0.insert(v, c)
  }

  /// Uncolors `v`, returning the color it had.
  pub fn unassign(&mut self, v: &V) -> Option<Color> {
    self.0.remove(v)
  }

  pub fn contains(&self, v: &V) -> bool {
    self.0.contains_key(v)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&V, &Color)> + '_ {
    self.0.iter()
  }

  /// Finds a neighbor of `v` in `graph` that currently holds color `c`.
  pub fn neighbor_with<'a>(
    &self,
    graph: &'a Graph<V>,
    v: &V,
    c: Color,
  ) -> Option<&'a V> {
    graph.neighbors(v).find(|n| self.get(n) == Some(c))
  }

  /// Gets the set of colors held by neighbors of `v`.
  pub fn neighbor_colors(&self, graph: &Graph<V>, v: &V) -> HashSet<Color> {
    graph.neighbors(v).filter_map(|n| self.get(n)).collect()
  }

  /// Tallies how many vertices hold each color.
  pub fn color_usage(&self) -> Counter<Color> {
    let mut ct = Counter::mk_empty();
    for c in self.0.values() {
      ct.insert(c);
    }
    ct
  }

  /// Number of distinct colors in use.
  pub fn colors_used(&self) -> usize {
    self.color_usage().distinct()
  }

  /// Checks this assignment against `graph` and `constraints`, returning the
  /// first violation found, in vertex order.
  pub fn verify(
    &self,
    graph: &Graph<V>,
    constraints: &ConstraintManager<V>,
  ) -> Result<(), Violation<V>> {
    for v in graph.vertices() {
      let c = self.get(v).ok_or_else(|| Violation::Uncolored(v.clone()))?;

      if constraints.is_excluded(v, c) {
        return Err(Violation::Excluded(v.clone(), c));
      }
      if let Some(pre) = constraints.get_pre_assigned(v) {
        if pre != c {
          return Err(Violation::IgnoredPreAssignment(v.clone(), c));
        }
      }
      if let Some(n) = self.neighbor_with(graph, v, c) {
        return Err(Violation::SameColorEdge(v.clone(), n.clone(), c));
      }
    }
    Ok(())
  }

  /// Consumes self and returns the underlying map.
  pub fn into_inner(self) -> BTreeMap<V, Color> {
    self.0
  }
}

impl<V: Vertex> std::ops::Index<&V> for ColorAssignment<V> {
  type Output = Color;

  /// Panics if `v` is uncolored, like indexing a map.
  fn index(&self, v: &V) -> &Color {
    &self.0[v]
  }
}

impl<V: Vertex> IntoIterator for ColorAssignment<V> {
  type Item = (V, Color);
  type IntoIter = std::collections::btree_map::IntoIter<V, Color>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<V: Vertex> std::iter::FromIterator<(V, Color)> for ColorAssignment<V> {
  fn from_iter<T: IntoIterator<Item = (V, Color)>>(iter: T) -> Self {
    ColorAssignment(iter.into_iter().collect())
  }
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::*;

  fn triangle() -> Graph<u32> {
    let mut g = Graph::new();
    for v in 0..3 {
      g.add_vertex(v);
    }
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(0, 2).unwrap();
    g
  }

  #[test]
  fn verify_accepts_proper_coloring() {
    let g = triangle();
    let a: ColorAssignment<u32> =
      vec![(0, Color(0)), (1, Color(1)), (2, Color(2))]
        .into_iter()
        .collect();
    assert_eq!(a.verify(&g, &ConstraintManager::new()), Ok(()));
    assert_eq!(a.colors_used(), 3);
    assert_eq!(a[&1], Color(1));
  }

  #[test]
  fn verify_reports_violations() {
    let g = triangle();
    let cm = ConstraintManager::new();

    let mut a: ColorAssignment<u32> =
      vec![(0, Color(0)), (1, Color(1))].into_iter().collect();
    assert_eq!(a.verify(&g, &cm), Err(Violation::Uncolored(2)));

    a.assign(2, Color(1));
    assert_eq!(
      a.verify(&g, &cm),
      Err(Violation::SameColorEdge(1, 2, Color(1)))
    );

    let mut cm = ConstraintManager::new();
    cm.add_exclusion(0, Color(0));
    a.assign(2, Color(2));
    assert_eq!(a.verify(&g, &cm), Err(Violation::Excluded(0, Color(0))));
  }

  #[test]
  fn neighbor_colors_skip_uncolored() {
    let g = triangle();
    let mut a = ColorAssignment::new();
    a.assign(1u32, Color(4));
    assert_eq!(a.neighbor_colors(&g, &0).len(), 1);
    assert_eq!(a.neighbor_with(&g, &0, Color(4)), Some(&1));
    assert_eq!(a.unassign(&1), Some(Color(4)));
    assert!(a.neighbor_colors(&g, &0).is_empty());
  }
}
