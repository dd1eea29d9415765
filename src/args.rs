//! Parse command line arguments
//! A hand-rolled parser is good enough for the handful of flags we take.

use std::env;

use colorsolve::coloring::Strategy;
use colorsolve::emit::EmitTarget;

/// Configuration options for this run.
pub struct Config {
  pub verbose: bool,
  pub check: bool,

  pub emit: EmitTarget,
  pub file: Option<String>,
  pub strategy: Option<Strategy>,
  pub node_limit: Option<u64>,
}

impl Config {
  /// Set your defaults here!
  fn default() -> Self {
    Config {
      verbose: false, // Log solver progress at debug level
      check: false,   // Verify every assignment before emitting it

      emit: EmitTarget::Json, // Output format
      file: None,             // Problem file to solve
      strategy: None,         // Overrides the problem file's strategy
      node_limit: None,       // Backtracking node budget
    }
  }
}

const USAGE: &str = "usage: colorsolve [-v] [--check] [-s greedy|backtracking] \
                     [--node-limit N] [--emit json|text] <problem.json>";

/// Parses command line input into a configuration.
pub fn parse_args() -> Result<Config, String> {
  parse_from(env::args().skip(1))
}

/// Parses an argument list (without the program name).
pub fn parse_from<I>(args: I) -> Result<Config, String>
where
  I: IntoIterator<Item = String>,
{
  let mut config = Config::default();
  let mut args = args.into_iter();

  // Fetches the value following a flag.
  fn value_of<I: Iterator<Item = String>>(
    args: &mut I,
    flag: &str,
  ) -> Result<String, String> {
    args
      .next()
      .ok_or_else(|| format!("expected a value after `{}`", flag))
  }

  while let Some(arg) = args.next() {
    match arg.as_str() {
      "-v" | "--verbose" => config.verbose = true,
      "--check" => config.check = true,
      "-s" | "--strategy" => {
        let s = value_of(&mut args, &arg)?;
        config.strategy = Some(s.parse().map_err(|e| format!("{}", e))?);
      }
      "--node-limit" => {
        let n = value_of(&mut args, &arg)?;
        config.node_limit = Some(
          n.parse()
            .map_err(|_| format!("invalid node limit `{}`", n))?,
        );
      }
      "-e" | "--emit" => {
        config.emit = match value_of(&mut args, &arg)?.as_str() {
          "json" => EmitTarget::Json,
          "text" => EmitTarget::Text,
          other => return Err(format!("unknown emit type `{}`", other)),
        };
      }
      "-h" | "--help" => return Err(USAGE.to_string()),
      flag if flag.starts_with('-') => {
        return Err(format!("unknown flag `{}`\n{}", flag, USAGE))
      }
      file => config.file = Some(file.to_string()),
    }
  }

  if config.file.is_none() {
    return Err(format!("expected problem file\n{}", USAGE));
  }
  if config.node_limit.is_some() && config.strategy == Some(Strategy::Greedy) {
    return Err(String::from("`--node-limit` only applies to backtracking"));
  }

  Ok(config)
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::*;

  fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn flags_and_file() {
    let cfg = parse_from(args(&[
      "-v",
      "--check",
      "-s",
      "backtracking",
      "--node-limit",
      "500",
      "--emit",
      "text",
      "p.json",
    ]))
    .unwrap();
    assert!(cfg.verbose && cfg.check);
    assert_eq!(cfg.strategy, Some(Strategy::Backtracking));
    assert_eq!(cfg.node_limit, Some(500));
    assert_eq!(cfg.emit, EmitTarget::Text);
    assert_eq!(cfg.file.as_deref(), Some("p.json"));
  }

  #[test]
  fn errors() {
    assert!(parse_from(args(&[])).is_err());
    assert!(parse_from(args(&["-s", "dsatur", "p.json"])).is_err());
    assert!(parse_from(args(&["p.json", "--node-limit"])).is_err());
    assert!(parse_from(args(&["--frobnicate", "p.json"])).is_err());
  }

  #[test]
  fn node_limit_needs_backtracking() {
    let greedy = ["-s", "greedy", "--node-limit", "10", "p.json"];
    assert!(parse_from(args(&greedy)).is_err());

    let cfg = parse_from(args(&["--node-limit", "10", "p.json"])).unwrap();
    assert_eq!((cfg.strategy, cfg.node_limit), (None, Some(10)));
  }
}
