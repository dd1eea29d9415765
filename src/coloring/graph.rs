//! An undirected graph of caller-supplied vertices, kept as a vertex set and
//! an adjacency multimap, together with the change records used to mutate it
//! between solves.
//!
//! The adjacency multimap may hold entries for vertices that are not (yet) in
//! the vertex set: an edge can be added before its endpoints are. Such ghost
//! entries never take part in a solve, but become live as soon as the vertex
//! is added.
use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::Vertex;
use crate::error::{Error, Result};

// ------------------------------ Vertex Multimap ------------------------------

/// A multimap datastructure similar to that of C++.
type VertexMultiMap<V> = HashMap<V, HashSet<V>>;

/// Insert `(k,v)` into multimap, initializing `k` to an empty set first if
/// needed.
fn mm_insert<V: Vertex>(mm: &mut VertexMultiMap<V>, k: &V, v: &V) {
  mm.entry(k.clone()).or_default().insert(v.clone());
}

/// Removes `v` from the values of `k`. Drops the key once its set becomes
/// empty, so that no stale entry survives a removal.
fn mm_remove_value<V: Vertex>(mm: &mut VertexMultiMap<V>, k: &V, v: &V) {
  if let Some(h) = mm.get_mut(k) {
    h.remove(v);
    if h.is_empty() {
      mm.remove(k);
    }
  }
}

/// Tests whether `v` is among the values of `k`.
fn mm_contains<V: Vertex>(mm: &VertexMultiMap<V>, k: &V, v: &V) -> bool {
  mm.get(k).map_or(false, |h| h.contains(v))
}

// ------------------------------- Change Record -------------------------------

/// One step of a dynamic update. Serialized with an `action` tag, eg.
/// `{"action": "add_edge", "u": 1, "v": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GraphChange<V> {
  AddVertex { u: V },
  RemoveVertex { u: V },
  AddEdge { u: V, v: V },
  RemoveEdge { u: V, v: V },
}

impl<V: Vertex> GraphChange<V> {
  /// Builds a change from an `(action, primary, secondary)` triple. The
  /// secondary vertex is ignored for vertex actions and required for edge
  /// actions.
  pub fn from_triple(action: &str, u: V, v: Option<V>) -> Result<Self> {
    let need_v = |v: Option<V>| {
      v.ok_or_else(|| {
        Error::MalformedChange(format!("`{}` needs a second vertex", action))
      })
    };

    match action {
      "add_vertex" => Ok(GraphChange::AddVertex { u }),
      "remove_vertex" => Ok(GraphChange::RemoveVertex { u }),
      "add_edge" => Ok(GraphChange::AddEdge { u, v: need_v(v)? }),
      "remove_edge" => Ok(GraphChange::RemoveEdge { u, v: need_v(v)? }),
      other => {
        Err(Error::MalformedChange(format!("unknown action `{}`", other)))
      }
    }
  }
}

// ------------------------------- Graph Proper -------------------------------

/// An undirected graph, implemented as adj-list.
///
/// Invariant: `v` is a neighbor of `u` iff `u` is a neighbor of `v`.
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
  vertices: BTreeSet<V>,
  edges: VertexMultiMap<V>,
}

impl<V: Vertex> Default for Graph<V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<V: Vertex> Graph<V> {
  /// Constructs a new graph with no vertices nor edges.
  pub fn new() -> Self {
    Self {
      vertices: BTreeSet::new(),
      edges: HashMap::new(),
    }
  }

  /// Inserts a vertex. Does nothing if it is already present.
  pub fn add_vertex(&mut self, v: V) {
    self.vertices.insert(v);
  }

  /// Given vertices u and v, add edges (u,v) and (v,u) into the graph.
  /// Neither endpoint has to be a vertex yet.
  pub fn add_edge(&mut self, u: V, v: V) -> Result<()> {
    if u == v {
      return Err(Error::SelfLoop {
        vertex: format!("{:?}", u),
      });
    }
    mm_insert(&mut self.edges, &u, &v);
    mm_insert(&mut self.edges, &v, &u);
    Ok(())
  }

  /// Removes a vertex along with every edge touching it.
  pub fn remove_vertex(&mut self, v: &V) -> Result<()> {
    if !self.vertices.remove(v) {
      return Err(Error::vertex_not_found(v));
    }

    // remove as out-vertex, then as in-vertex.
    if let Some(neighbs) = self.edges.remove(v) {
      for n in neighbs {
        mm_remove_value(&mut self.edges, &n, v);
      }
    }
    Ok(())
  }

  /// Removes the edge between u and v. Fails, leaving the graph untouched,
  /// unless the edge is present in both directions.
  pub fn remove_edge(&mut self, u: &V, v: &V) -> Result<()> {
    if !(mm_contains(&self.edges, u, v) && mm_contains(&self.edges, v, u)) {
      return Err(Error::edge_not_found(u, v));
    }
    mm_remove_value(&mut self.edges, u, v);
    mm_remove_value(&mut self.edges, v, u);
    Ok(())
  }

  /// Iterates over the neighbors of `v`. A vertex never mentioned by any
  /// edge simply has no neighbors.
  pub fn neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V> + 'a {
    self.edges.get(v).into_iter().flatten()
  }

  /// Number of neighbors of `v`, ghost neighbors included.
  pub fn degree(&self, v: &V) -> usize {
    self.edges.get(v).map_or(0, HashSet::len)
  }

  /// Applies `changes` one by one. The first failing change stops the
  /// batch; the changes before it stay applied.
  pub fn apply_dynamic_changes<I>(&mut self, changes: I) -> Result<()>
  where
    I: IntoIterator<Item = GraphChange<V>>,
  {
    for change in changes {
      log::trace!("applying {:?}", change);
      self.apply(change)?;
    }
    Ok(())
  }

  /// Applies a single change.
  pub fn apply(&mut self, change: GraphChange<V>) -> Result<()> {
    match change {
      GraphChange::AddVertex { u } => {
        self.add_vertex(u);
        Ok(())
      }
      GraphChange::RemoveVertex { u } => self.remove_vertex(&u),
      GraphChange::AddEdge { u, v } => self.add_edge(u, v),
      GraphChange::RemoveEdge { u, v } => self.remove_edge(&u, &v),
    }
  }

  /// The vertex set, in ascending order.
  pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
    self.vertices.iter()
  }

  /// Checks whether graph has a vertex v.
  pub fn contains_vertex(&self, v: &V) -> bool {
    self.vertices.contains(v)
  }

  /// Checks whether u and v are adjacent.
  pub fn has_edge(&self, u: &V, v: &V) -> bool {
    mm_contains(&self.edges, u, v)
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  /// Number of undirected edges, ghost edges included.
  pub fn edge_count(&self) -> usize {
    self.edges.values().map(HashSet::len).sum::<usize>() / 2
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Iterates over every undirected edge once, as `(u, v)` with `u < v`.
  pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
    self
      .edges
      .iter()
      .flat_map(|(u, h)| h.iter().map(move |v| (u, v)))
      .filter(|(u, v)| u < v)
  }

  /// Checks the symmetry invariant over the whole adjacency multimap.
  pub fn is_symmetric(&self) -> bool {
    self
      .edges
      .iter()
      .all(|(u, h)| h.iter().all(|v| mm_contains(&self.edges, v, u)))
  }
}

impl<V: Vertex> std::fmt::Display for Graph<V> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let mut keys: Vec<&V> = self.edges.keys().collect();
    keys.sort();

    writeln!(f, "vertices: {:?}", self.vertices)?;
    for u in keys {
      let mut neighb: Vec<&V> = self.neighbors(u).collect();
      neighb.sort();
      writeln!(f, "{:<5} ->  {:?}", format!("{:?}", u), neighb)?;
    }
    Ok(())
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
  fn add_vertex_is_idempotent() {
    let mut g = Graph::new();
    g.add_vertex(4u32);
    g.add_vertex(4u32);
    assert_eq!(g.vertex_count(), 1);
    assert_eq!(g.degree(&4), 0);
  }

  #[test]
  fn edges_are_symmetric() {
    let g = path3();
    assert!(g.has_edge(&0, &1) && g.has_edge(&1, &0));
    assert!(!g.has_edge(&0, &2));
    assert_eq!(g.edge_count(), 2);
    assert!(g.is_symmetric());
  }

  #[test]
  fn self_loop_is_rejected() {
    let mut g = path3();
    assert!(matches!(g.add_edge(1, 1), Err(Error::SelfLoop { .. })));
    assert_eq!(g.degree(&1), 2);
  }

  #[test]
  fn neighbors_of_unknown_vertex_is_empty() {
    let g = path3();
    assert_eq!(g.neighbors(&42).count(), 0);
  }

  #[test]
  fn remove_vertex_detaches_neighbors() {
    let mut g = path3();
    g.remove_vertex(&1).unwrap();
    assert!(!g.contains_vertex(&1));
    assert_eq!(g.neighbors(&0).count(), 0);
    assert_eq!(g.neighbors(&2).count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.is_symmetric());
  }

  #[test]
  fn remove_missing_vertex_fails() {
    let mut g = path3();
    assert!(matches!(g.remove_vertex(&9), Err(Error::NotFound { .. })));
    assert_eq!(g.vertex_count(), 3);
  }

  #[test]
  fn remove_edge_is_strict() {
    let mut g = path3();
    assert!(matches!(g.remove_edge(&0, &2), Err(Error::NotFound { .. })));
    g.remove_edge(&1, &0).unwrap();
    assert!(!g.has_edge(&0, &1) && !g.has_edge(&1, &0));
    assert!(matches!(g.remove_edge(&0, &1), Err(Error::NotFound { .. })));
    assert!(g.is_symmetric());
  }

  #[test]
  fn ghost_edge_becomes_live() {
    let mut g = path3();
    g.add_edge(2, 7).unwrap();
    assert!(!g.contains_vertex(&7));
    assert!(g.has_edge(&7, &2));

    // the ghost has no vertex entry, so it cannot be removed as a vertex.
    assert!(g.remove_vertex(&7).is_err());
    g.add_vertex(7);
    g.remove_vertex(&7).unwrap();
    assert!(!g.has_edge(&2, &7));
  }

  #[test]
  fn batch_stops_at_first_failure() {
    let mut g = path3();
    let changes = vec![
      GraphChange::AddVertex { u: 3 },
      GraphChange::AddEdge { u: 1, v: 3 },
      GraphChange::RemoveVertex { u: 8 },
      GraphChange::AddVertex { u: 4 },
    ];
    assert!(g.apply_dynamic_changes(changes).is_err());
    assert!(g.contains_vertex(&3) && g.has_edge(&3, &1));
    assert!(!g.contains_vertex(&4));
  }

  #[test]
  fn change_from_triple() {
    let c = GraphChange::from_triple("add_edge", 1u32, Some(3)).unwrap();
    assert_eq!(c, GraphChange::AddEdge { u: 1, v: 3 });

    let c = GraphChange::from_triple("add_vertex", 3u32, None).unwrap();
    assert_eq!(c, GraphChange::AddVertex { u: 3 });

    assert!(GraphChange::from_triple("remove_edge", 1u32, None).is_err());
    assert!(GraphChange::from_triple("paint", 1u32, None).is_err());
  }

  #[test]
  fn change_from_json() {
    let c: GraphChange<u32> =
      serde_json::from_str(r#"{"action": "remove_vertex", "u": 5}"#).unwrap();
    assert_eq!(c, GraphChange::RemoveVertex { u: 5 });
  }
}
