//! Command-line front end: parses one expression with a preset
//! operator set, then prints its syntax tree and value.

use opparse::{presets, Parser, UnmatchedInput};

use anyhow::Context;
use clap::{Parser as ClapParser, ValueEnum};

use std::io::{self, Read};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Expression to evaluate. Read from standard input if omitted.
  expr: Option<String>,
  /// Operator set to parse with
  #[arg(short, long, value_enum, default_value_t = Preset::Basic)]
  preset: Preset,
  /// Print the syntax tree as JSON
  #[arg(long)]
  json: bool,
  /// Reject characters which are neither whitespace nor part of a token
  #[arg(long)]
  strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
  /// Integers, `+`, `*`, prefix `~`, parentheses
  Basic,
  /// Decimals, `+ - * / % ^`, prefix `-`/`~`, postfix `!`, `()` and `[]`
  Scientific,
}

impl Preset {
  fn parser(self) -> Parser {
    match self {
      Preset::Basic => presets::basic_arithmetic(),
      Preset::Scientific => presets::scientific(),
    }
  }
}

fn main() -> anyhow::Result<()> {
  env_logger::init();

  let args = Args::parse();

  let input = match args.expr {
    Some(expr) => expr,
    None => {
      let mut buf = String::new();
      io::stdin().read_to_string(&mut buf).context("can't read standard input")?;
      buf
    }
  };

  let mut parser = args.preset.parser();
  if args.strict {
    parser = parser.with_unmatched_input(UnmatchedInput::Reject);
  }

  let ast = parser.parse_str(&input).with_context(|| format!("can't parse {:?}", input.trim()))?;
  if args.json {
    println!("{}", serde_json::to_string(&ast)?);
  } else {
    println!("{ast}");
  }
  let value = parser.evaluate(&ast).context("can't evaluate expression")?;
  println!("{value}");
  Ok(())
}
