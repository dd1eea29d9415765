//! Problem files read by the command-line driver.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coloring::{Color, ConstraintManager, Graph, GraphChange, Strategy};
use crate::error::Result;

/// A coloring problem: a graph, its constraints, and optionally a batch of
/// changes to apply before solving a second time.
///
/// ```json
/// {
///   "vertices": [0, 1, 2],
///   "edges": [[0, 1], [1, 2]],
///   "pre_assigned": [[0, 1]],
///   "excluded": [[1, 0]],
///   "changes": [{"action": "add_vertex", "u": 3}],
///   "strategy": "backtracking"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Problem {
  pub vertices: Vec<u64>,
  #[serde(default)]
  pub edges: Vec<(u64, u64)>,
  #[serde(default)]
  pub pre_assigned: Vec<(u64, Color)>,
  #[serde(default)]
  pub excluded: Vec<(u64, Color)>,
  #[serde(default)]
  pub changes: Vec<GraphChange<u64>>,
  #[serde(default)]
  pub strategy: Option<Strategy>,
}

impl Problem {
  pub fn from_reader<R: Read>(r: R) -> Result<Self> {
    Ok(serde_json::from_reader(r)?)
  }

  pub fn from_file(path: &Path) -> Result<Self> {
    Self::from_reader(BufReader::new(File::open(path)?))
  }

  /// Builds the graph and constraints described by self. Vertices are added
  /// before edges, so an edge naming an unlisted vertex stays a ghost edge.
  pub fn build(&self) -> Result<(Graph<u64>, ConstraintManager<u64>)> {
    let mut graph = Graph::new();
    for v in &self.vertices {
      graph.add_vertex(*v);
    }
    for (u, v) in &self.edges {
      graph.add_edge(*u, *v)?;
    }

    let mut constraints = ConstraintManager::new();
    for (v, c) in &self.pre_assigned {
      constraints.set_pre_assigned(*v, *c);
    }
    for (v, c) in &self.excluded {
      constraints.add_exclusion(*v, *c);
    }

    Ok((graph, constraints))
  }
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::*;
  use crate::error::Error;

  #[test]
  fn parse_full_problem() {
    let src = r#"{
      "vertices": [0, 1, 2],
      "edges": [[0, 1], [1, 2]],
      "pre_assigned": [[0, 1]],
      "excluded": [[1, 0], [1, 2]],
      "changes": [
        {"action": "add_vertex", "u": 3},
        {"action": "add_edge", "u": 1, "v": 3}
      ],
      "strategy": "greedy"
    }"#;
    let p = Problem::from_reader(src.as_bytes()).unwrap();
    assert_eq!(p.strategy, Some(Strategy::Greedy));
    assert_eq!(p.changes.len(), 2);

    let (g, cm) = p.build().unwrap();
    assert_eq!((g.vertex_count(), g.edge_count()), (3, 2));
    assert_eq!(cm.get_pre_assigned(&0), Some(Color(1)));
    assert!(cm.is_excluded(&1, Color(2)));
  }

  #[test]
  fn only_vertices_required() {
    let p = Problem::from_reader(r#"{"vertices": [5]}"#.as_bytes()).unwrap();
    assert!(p.edges.is_empty() && p.changes.is_empty());
    assert_eq!(p.strategy, None);
  }

  #[test]
  fn bad_input() {
    let res = Problem::from_reader(r#"{"edges": []}"#.as_bytes());
    assert!(matches!(res, Err(Error::Json(_))));

    let src = r#"{"vertices": [1], "edges": [[1, 1]]}"#;
    let p = Problem::from_reader(src.as_bytes()).unwrap();
    assert!(matches!(p.build(), Err(Error::SelfLoop { .. })));
  }
}
