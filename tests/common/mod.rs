//! Common fixtures shared across integration tests.

#![allow(dead_code)]

use colorsolve::coloring::{ColorAssignment, ConstraintManager, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Graph and constraints set up the same way for both strategies.
pub struct Fixture {
  pub graph: Graph<u64>,
  pub constraints: ConstraintManager<u64>,
}

impl Fixture {
  pub fn empty() -> Self {
    Self {
      graph: Graph::new(),
      constraints: ConstraintManager::new(),
    }
  }

  /// The path 0 - 1 - 2.
  pub fn path3() -> Self {
    let mut f = Self::empty();
    for v in 0..3 {
      f.graph.add_vertex(v);
    }
    f.graph.add_edge(0, 1).unwrap();
    f.graph.add_edge(1, 2).unwrap();
    f
  }

  /// `num_vertices` vertices joined by up to `num_edges` random edges.
  /// Self-loops drawn by the generator are skipped.
  pub fn random(num_vertices: u64, num_edges: usize, seed: u64) -> Self {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut f = Self::empty();
    for v in 0..num_vertices {
      f.graph.add_vertex(v);
    }
    for _ in 0..num_edges {
      let u = rng.gen_range(0..num_vertices);
      let v = rng.gen_range(0..num_vertices);
      if u != v {
        f.graph.add_edge(u, v).unwrap();
      }
    }
    f
  }
}

/// Colors of vertices `0..n`, in order.
pub fn colors(a: &ColorAssignment<u64>, n: u64) -> Vec<usize> {
  (0..n).map(|v| a[&v].index()).collect()
}
