//! Construction of solvers by strategy name.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
  BacktrackingColoringSolver, ColoringSolver, GreedyColoringSolver, Vertex,
};
use crate::error::{Error, Result};

/// The available coloring strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
  Greedy,
  Backtracking,
}

impl Strategy {
  pub fn as_str(self) -> &'static str {
    match self {
      Strategy::Greedy => "greedy",
      Strategy::Backtracking => "backtracking",
    }
  }
}

impl FromStr for Strategy {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "greedy" => Ok(Strategy::Greedy),
      "backtracking" => Ok(Strategy::Backtracking),
      other => Err(Error::UnknownStrategy(other.to_string())),
    }
  }
}

impl std::fmt::Display for Strategy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Builds solvers from strategy names. Holds no state.
pub struct SolverFactory;

impl SolverFactory {
  /// Creates a solver for the named strategy, `"greedy"` or
  /// `"backtracking"`.
  pub fn create_solver<V: Vertex>(
    strategy: &str,
  ) -> Result<Box<dyn ColoringSolver<V>>> {
    Ok(Self::for_strategy(strategy.parse()?))
  }

  /// Creates a solver for an already parsed strategy.
  pub fn for_strategy<V: Vertex>(
    strategy: Strategy,
  ) -> Box<dyn ColoringSolver<V>> {
    match strategy {
      Strategy::Greedy => Box::new(GreedyColoringSolver::new()),
      Strategy::Backtracking => Box::new(BacktrackingColoringSolver::new()),
    }
  }
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::*;

  #[test]
  fn known_names() {
    let g = SolverFactory::create_solver::<u32>("greedy").unwrap();
    assert_eq!(g.name(), "greedy");
    let b = SolverFactory::create_solver::<u32>("backtracking").unwrap();
    assert_eq!(b.name(), "backtracking");
  }

  #[test]
  fn unknown_name() {
    let res = SolverFactory::create_solver::<u32>("Greedy");
    assert!(matches!(res, Err(Error::UnknownStrategy(ref s)) if s == "Greedy"));
  }

  #[test]
  fn strategy_round_trips_through_text() {
    for s in &[Strategy::Greedy, Strategy::Backtracking] {
      assert_eq!(s.to_string().parse::<Strategy>().unwrap(), *s);
    }
    let s: Strategy = serde_json::from_str("\"backtracking\"").unwrap();
    assert_eq!(s, Strategy::Backtracking);
  }
}
