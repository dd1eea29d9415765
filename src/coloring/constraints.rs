//! Per-vertex coloring constraints: at most one pre-assigned color, and any
//! number of excluded colors. Constraints are keyed by vertex only; they are
//! not checked against any graph, and a constraint on a vertex that is not
//! in the graph being solved has no effect.

use std::collections::{HashMap, HashSet};

use super::{Color, Vertex};

#[derive(Debug, Clone)]
pub struct ConstraintManager<V: Vertex> {
  pre_assigned: HashMap<V, Color>,
  excluded: HashMap<V, HashSet<Color>>,
}

impl<V: Vertex> Default for ConstraintManager<V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<V: Vertex> ConstraintManager<V> {
  /// Creates a manager with no constraints.
  pub fn new() -> Self {
    Self {
      pre_assigned: HashMap::new(),
      excluded: HashMap::new(),
    }
  }

  /// Fixes the color of `v`, replacing any earlier pre-assignment.
  pub fn set_pre_assigned(&mut self, v: V, c: Color) {
    self.pre_assigned.insert(v, c);
  }

  /// Forbids color `c` at `v`. Adding the same exclusion twice does nothing.
  pub fn add_exclusion(&mut self, v: V, c: Color) {
    self.excluded.entry(v).or_default().insert(c);
  }

  pub fn get_pre_assigned(&self, v: &V) -> Option<Color> {
    self.pre_assigned.get(v).copied()
  }

  /// Tests whether `c` is excluded at `v`.
  pub fn is_excluded(&self, v: &V, c: Color) -> bool {
    self.excluded.get(v).map_or(false, |h| h.contains(&c))
  }

  /// Gets the exclusion set of `v`. `None` if `v` has no exclusions.
  pub fn excluded(&self, v: &V) -> Option<&HashSet<Color>> {
    self.excluded.get(v)
  }

  /// Iterates over all `(vertex, color)` pre-assignments, in no particular
  /// order.
  pub fn pre_assigned(&self) -> impl Iterator<Item = (&V, &Color)> + '_ {
    self.pre_assigned.iter()
  }

  /// Iterates over every vertex that has at least one exclusion.
  pub fn exclusions(&self) -> impl Iterator<Item = (&V, &HashSet<Color>)> + '_ {
    self.excluded.iter()
  }

  /// Drops the pre-assignment of `v`, returning it.
  pub fn clear_pre_assigned(&mut self, v: &V) -> Option<Color> {
    self.pre_assigned.remove(v)
  }

  /// Drops every constraint on every vertex.
  pub fn clear(&mut self) {
    self.pre_assigned.clear();
    self.excluded.clear();
  }

  pub fn is_empty(&self) -> bool {
    self.pre_assigned.is_empty() && self.excluded.is_empty()
  }
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::*;

  #[test]
  fn pre_assignment_overwrites() {
    let mut cm = ConstraintManager::new();
    assert_eq!(cm.get_pre_assigned(&0u32), None);
    cm.set_pre_assigned(0u32, Color(2));
    cm.set_pre_assigned(0u32, Color(1));
    assert_eq!(cm.get_pre_assigned(&0), Some(Color(1)));
    assert_eq!(cm.clear_pre_assigned(&0), Some(Color(1)));
    assert!(cm.is_empty());
  }

  #[test]
  fn exclusions_accumulate() {
    let mut cm = ConstraintManager::new();
    assert!(!cm.is_excluded(&1u32, Color(0)));
    cm.add_exclusion(1u32, Color(0));
    cm.add_exclusion(1u32, Color(0));
    cm.add_exclusion(1u32, Color(3));
    assert!(cm.is_excluded(&1, Color(0)) && cm.is_excluded(&1, Color(3)));
    assert!(!cm.is_excluded(&1, Color(1)));
    assert_eq!(cm.excluded(&1).map(HashSet::len), Some(2));
  }

  #[test]
  fn contradiction_is_not_prevalidated() {
    let mut cm = ConstraintManager::new();
    cm.set_pre_assigned("x", Color(0));
    cm.add_exclusion("x", Color(0));
    assert_eq!(cm.get_pre_assigned(&"x"), Some(Color(0)));
    assert!(cm.is_excluded(&"x", Color(0)));
    cm.clear();
    assert!(cm.is_empty());
  }
}
