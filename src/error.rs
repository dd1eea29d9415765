//! Solver Errors

use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

/// Every failure the engine and its driver can report. Vertices are carried
/// in their `Debug` rendering so that the error type is not generic over the
/// vertex type.
#[derive(Error, Debug)]
pub enum Error {
  /// A removal referenced a vertex or an edge that is not in the graph.
  #[error("not found: {what}")]
  NotFound { what: String },

  /// An edge from a vertex to itself can never be properly colored.
  #[error("self-loop on vertex {vertex}")]
  SelfLoop { vertex: String },

  /// A pre-assigned color cannot be honored.
  #[error("conflict with pre-assigned color at vertex {vertex}: {reason}")]
  ConstraintConflict { vertex: String, reason: String },

  /// Greedy coloring ran out of candidates for a vertex.
  #[error("no available color for vertex {vertex}")]
  NoAvailableColor { vertex: String },

  /// Backtracking exhausted the search space.
  #[error("no valid coloring exists with the given constraints")]
  Unsatisfiable,

  /// The search continue predicate stopped the backtracking search.
  #[error("search aborted after {nodes} nodes")]
  SearchAborted { nodes: u64 },

  /// A returned assignment failed verification against its problem.
  #[error("invalid assignment: {0}")]
  InvalidAssignment(String),

  #[error("unknown strategy `{0}`")]
  UnknownStrategy(String),

  #[error("malformed change record: {0}")]
  MalformedChange(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

impl Error {
  /// Shorthand for a `NotFound` error describing a missing vertex.
  pub fn vertex_not_found<V: std::fmt::Debug>(v: &V) -> Self {
    Error::NotFound {
      what: format!("vertex {:?}", v),
    }
  }

  /// Shorthand for a `NotFound` error describing a missing edge.
  pub fn edge_not_found<V: std::fmt::Debug>(u: &V, v: &V) -> Self {
    Error::NotFound {
      what: format!("edge ({:?}, {:?})", u, v),
    }
  }

  /// Shorthand for a `ConstraintConflict` at vertex `v`.
  pub fn conflict<V: std::fmt::Debug>(v: &V, reason: String) -> Self {
    Error::ConstraintConflict {
      vertex: format!("{:?}", v),
      reason,
    }
  }
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::*;

  #[test]
  fn messages_name_the_vertex() {
    let e = Error::vertex_not_found(&7u64);
    assert_eq!(e.to_string(), "not found: vertex 7");

    let e = Error::edge_not_found(&1u64, &2u64);
    assert_eq!(e.to_string(), "not found: edge (1, 2)");

    let e = Error::conflict(&"a", String::from("excluded"));
    assert_eq!(
      e.to_string(),
      "conflict with pre-assigned color at vertex \"a\": excluded"
    );
  }
}
