//! Constraint-aware graph coloring.
//!
//! Build a [`coloring::Graph`] and a [`coloring::ConstraintManager`], pick a
//! strategy through [`coloring::SolverFactory`], and call `solve`. After
//! mutating the graph with `apply_dynamic_changes`, simply solve again.
//!
//! ```
//! use colorsolve::coloring::*;
//!
//! let mut g = Graph::new();
//! for v in 0..3u32 {
//!   g.add_vertex(v);
//! }
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//!
//! let solver = SolverFactory::create_solver::<u32>("backtracking").unwrap();
//! let res = solver.solve(&g, &ConstraintManager::new()).unwrap();
//! assert_eq!((res[&0], res[&1], res[&2]), (Color(0), Color(1), Color(0)));
//! ```

pub mod coloring;
pub mod const_params;
pub mod emit;
pub mod error;
pub mod problem;
pub mod util;

pub use error::{Error, Result};
