//! End-to-end properties of both coloring strategies.

mod common;

use colorsolve::coloring::{
  Color, ColoringSolver, GraphChange, HeuristicOptimizer, SolverFactory,
};
use colorsolve::Error;

use common::{colors, Fixture};

const STRATEGIES: [&str; 2] = ["greedy", "backtracking"];

#[test]
fn empty_graph_gives_empty_mapping() {
  let f = Fixture::empty();
  for name in STRATEGIES.iter() {
    let solver = SolverFactory::create_solver::<u64>(name).unwrap();
    let res = solver.solve(&f.graph, &f.constraints).unwrap();
    assert!(res.is_empty(), "{} colored an empty graph", name);
  }
}

#[test]
fn isolated_vertex_gets_color_zero() {
  let mut f = Fixture::empty();
  f.graph.add_vertex(0);
  for name in STRATEGIES.iter() {
    let solver = SolverFactory::create_solver::<u64>(name).unwrap();
    let res = solver.solve(&f.graph, &f.constraints).unwrap();
    assert_eq!(res[&0], Color(0));
  }
}

#[test]
fn path_colorings() {
  let backtracking =
    SolverFactory::create_solver::<u64>("backtracking").unwrap();

  let f = Fixture::path3();
  let res = backtracking.solve(&f.graph, &f.constraints).unwrap();
  assert_eq!(colors(&res, 3), vec![0, 1, 0]);

  let mut f = Fixture::path3();
  f.constraints.set_pre_assigned(0, Color(1));
  let res = backtracking.solve(&f.graph, &f.constraints).unwrap();
  assert_eq!(colors(&res, 3), vec![1, 0, 1]);

  let mut f = Fixture::path3();
  f.constraints.add_exclusion(1, Color(0));
  let res = backtracking.solve(&f.graph, &f.constraints).unwrap();
  assert_eq!(colors(&res, 3), vec![0, 1, 0]);
}

#[test]
fn fresh_solvers_agree() {
  let mut f = Fixture::random(60, 200, 7);
  f.constraints.add_exclusion(3, Color(0));
  f.constraints.set_pre_assigned(10, Color(4));
  for name in STRATEGIES.iter() {
    let first = SolverFactory::create_solver::<u64>(name).unwrap();
    let second = SolverFactory::create_solver::<u64>(name).unwrap();
    assert_eq!(
      first.solve(&f.graph, &f.constraints).unwrap(),
      second.solve(&f.graph, &f.constraints).unwrap()
    );
  }
}

#[test]
fn dynamic_changes_then_resolve() {
  let mut f = Fixture::path3();
  let solver = SolverFactory::create_solver::<u64>("backtracking").unwrap();
  let res = solver.solve(&f.graph, &f.constraints).unwrap();
  assert_eq!(colors(&res, 3), vec![0, 1, 0]);

  let changes = vec![
    GraphChange::from_triple("add_vertex", 3, None).unwrap(),
    GraphChange::from_triple("add_edge", 1, Some(3)).unwrap(),
  ];
  f.graph.apply_dynamic_changes(changes).unwrap();

  let greedy = SolverFactory::create_solver::<u64>("greedy").unwrap();
  let optimizer = HeuristicOptimizer::new(greedy);
  let res = optimizer.optimize(&f.graph, &f.constraints).unwrap();
  assert_ne!(res[&3], res[&1]);
  assert!(res[&0] == Color(0) || res[&0] == Color(1));
  assert_eq!(res.verify(&f.graph, &f.constraints), Ok(()));
}

#[test]
fn failed_batch_keeps_earlier_changes() {
  let mut f = Fixture::path3();
  let res = f.graph.apply_dynamic_changes(vec![
    GraphChange::RemoveEdge { u: 0, v: 1 },
    GraphChange::RemoveEdge { u: 0, v: 1 },
  ]);
  assert!(matches!(res, Err(Error::NotFound { .. })));
  assert!(!f.graph.has_edge(&0, &1));
  assert!(f.graph.has_edge(&1, &2));
}

#[test]
fn symmetry_survives_edge_churn() {
  let mut f = Fixture::random(40, 300, 11);
  let edges: Vec<(u64, u64)> =
    f.graph.edges().map(|(u, v)| (*u, *v)).collect();
  for (i, (u, v)) in edges.iter().enumerate() {
    if i % 3 == 0 {
      f.graph.remove_edge(v, u).unwrap();
    }
  }
  for u in 0..40 {
    let _ = f.graph.add_edge(u, (u * 7 + 3) % 40);
  }
  assert!(f.graph.is_symmetric());
  for (u, v) in f.graph.edges() {
    assert!(f.graph.has_edge(v, u));
  }
}

#[test]
fn every_success_is_valid() {
  for seed in 0..8 {
    let mut f = Fixture::random(30, 90, seed);
    f.constraints.add_exclusion(0, Color(0));
    f.constraints.add_exclusion(5, Color(1));
    f.constraints.add_exclusion(5, Color(2));
    f.constraints.set_pre_assigned(7, Color(3));
    for name in STRATEGIES.iter() {
      let solver = SolverFactory::create_solver::<u64>(name).unwrap();
      let res = solver.solve(&f.graph, &f.constraints).unwrap();
      assert_eq!(res.len(), 30, "{} left vertices uncolored", name);
      assert_eq!(res.verify(&f.graph, &f.constraints), Ok(()));
    }
  }
}

#[test]
fn ghost_edges_and_foreign_constraints_are_inert() {
  let mut f = Fixture::empty();
  f.graph.add_vertex(0);
  f.graph.add_vertex(1);
  f.graph.add_edge(0, 1).unwrap();
  // 7 is never added, so this edge must not constrain 0.
  f.graph.add_edge(0, 7).unwrap();
  f.constraints.set_pre_assigned(7, Color(0));
  f.constraints.set_pre_assigned(42, Color(100));
  f.constraints.add_exclusion(42, Color(0));
  f.constraints.add_exclusion(1, Color(0));

  for name in STRATEGIES.iter() {
    let solver = SolverFactory::create_solver::<u64>(name).unwrap();
    let res = solver.solve(&f.graph, &f.constraints).unwrap();
    assert_eq!(colors(&res, 2), vec![0, 1], "{}", name);
    assert!(res.get(&7).is_none() && res.get(&42).is_none());
  }

  // 1 keeps its exclusion after removal; it only applies if 1 returns.
  f.graph.remove_vertex(&1).unwrap();
  for name in STRATEGIES.iter() {
    let solver = SolverFactory::create_solver::<u64>(name).unwrap();
    let res = solver.solve(&f.graph, &f.constraints).unwrap();
    assert_eq!(res.len(), 1);
    assert_eq!(res[&0], Color(0), "{}", name);
  }
}

#[test]
fn large_random_graph() {
  let f = Fixture::random(10_000, 50_000, 2024);
  for name in STRATEGIES.iter() {
    let solver = SolverFactory::create_solver::<u64>(name).unwrap();
    let res = solver.solve(&f.graph, &f.constraints).unwrap();
    assert_eq!(res.len(), 10_000);
    assert!(res.colors_used() <= 10_000);
    assert_eq!(res.verify(&f.graph, &f.constraints), Ok(()));
  }
}
