//! Assignment emission

use std::io::Write;

use serde::Serialize;

use crate::coloring::{ColorAssignment, Vertex};
use crate::error::Result;

/// Output format of the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitTarget {
  Json,
  Text,
}

/// One solve of a run: the assignment and a summary of it.
#[derive(Debug, Serialize)]
pub struct Round<'a, V: Vertex + Serialize> {
  pub label: &'a str,
  pub colors_used: usize,
  pub assignment: &'a ColorAssignment<V>,
}

impl<'a, V: Vertex + Serialize> Round<'a, V> {
  pub fn new(label: &'a str, assignment: &'a ColorAssignment<V>) -> Self {
    Self {
      label,
      colors_used: assignment.colors_used(),
      assignment,
    }
  }
}

/// Everything a run produced.
#[derive(Debug, Serialize)]
pub struct Report<'a, V: Vertex + Serialize> {
  pub strategy: &'a str,
  pub rounds: Vec<Round<'a, V>>,
}

/// Emits the report as pretty-printed JSON.
pub fn emit_json<W, V>(out: &mut W, report: &Report<V>) -> Result<()>
where
  W: Write,
  V: Vertex + Serialize,
{
  serde_json::to_writer_pretty(&mut *out, report)?;
  writeln!(out)?;
  Ok(())
}

/// Emits the report as one `vertex -> color` line per vertex.
pub fn emit_text<W, V>(out: &mut W, report: &Report<V>) -> Result<()>
where
  W: Write,
  V: Vertex + Serialize,
{
  writeln!(out, "// Coloring ({})", report.strategy)?;
  for round in &report.rounds {
    writeln!(out, "\n{}: {} colors", round.label, round.colors_used)?;
    for (v, c) in round.assignment.iter() {
      writeln!(out, "{:?} -> {}", v, c)?;
    }
    writeln!(out, "usage: {}", round.assignment.color_usage())?;
  }
  Ok(())
}

/// Emits the report in the requested format.
pub fn emit<W, V>(
  target: EmitTarget,
  out: &mut W,
  report: &Report<V>,
) -> Result<()>
where
  W: Write,
  V: Vertex + Serialize,
{
  match target {
    EmitTarget::Json => emit_json(out, report),
    EmitTarget::Text => emit_text(out, report),
  }
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::*;
  use crate::coloring::Color;

  fn sample() -> ColorAssignment<u64> {
    vec![(0, Color(0)), (1, Color(1)), (2, Color(0))]
      .into_iter()
      .collect()
  }

  #[test]
  fn json_output() {
    let a = sample();
    let report = Report {
      strategy: "greedy",
      rounds: vec![Round::new("initial", &a)],
    };
    let mut buf = Vec::new();
    emit(EmitTarget::Json, &mut buf, &report).unwrap();

    let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(v["strategy"], "greedy");
    assert_eq!(v["rounds"][0]["colors_used"], 2);
    assert_eq!(v["rounds"][0]["assignment"]["1"], 1);
  }

  #[test]
  fn text_output() {
    let a = sample();
    let report = Report {
      strategy: "backtracking",
      rounds: vec![Round::new("initial", &a)],
    };
    let mut buf = Vec::new();
    emit(EmitTarget::Text, &mut buf, &report).unwrap();

    let s = String::from_utf8(buf).unwrap();
    assert!(s.starts_with("// Coloring (backtracking)\n"));
    assert!(s.contains("initial: 2 colors\n"));
    assert!(s.contains("1 -> c1\n"));
    assert!(s.contains("usage: {c0=2, c1=1, }\n"));
  }
}
