use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gen_js::{generate_with_options, Dialect, GenerateOptions, Module, UnresolvedVariables};
use std::fs::File;
use std::io::stdin;
use std::io::stdout;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
  name = "gen-js",
  about = "Generate JavaScript or TypeScript from a JSON syntax tree"
)]
struct Cli {
  /// JSON module to generate from; omit for stdin.
  #[arg(short, long)]
  input: Option<PathBuf>,

  /// Output destination; omit for stdout.
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Output dialect.
  #[arg(long, value_enum, default_value_t = DialectArg::Ts)]
  dialect: DialectArg,

  /// Tool name or link credited in the banner comment. Repeatable.
  #[arg(long = "link", value_name = "LINK")]
  links: Vec<String>,

  /// Warn about references to undefined local variables instead of failing.
  #[arg(long)]
  allow_unresolved: bool,

  /// Log pipeline spans and events to stderr.
  #[arg(short, long)]
  verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DialectArg {
  Js,
  Ts,
}

impl From<DialectArg> for Dialect {
  fn from(value: DialectArg) -> Self {
    match value {
      DialectArg::Js => Dialect::JavaScript,
      DialectArg::Ts => Dialect::TypeScript,
    }
  }
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(if verbose { FmtSpan::CLOSE } else { FmtSpan::NONE })
    .with_writer(std::io::stderr)
    .with_ansi(false)
    .try_init();
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
  let mut source = String::new();
  match input {
    Some(path) => File::open(path)
      .with_context(|| format!("failed to open {}", path.display()))?
      .read_to_string(&mut source)
      .with_context(|| format!("failed to read {}", path.display()))?,
    None => stdin()
      .read_to_string(&mut source)
      .context("failed to read stdin")?,
  };
  Ok(source)
}

fn run(args: Cli) -> Result<()> {
  let source = read_input(args.input.as_ref())?;
  let module: Module = serde_json::from_str(&source).context("input is not a valid module")?;
  debug!(
    definitions = module.definitions.len(),
    statements = module.statements.len(),
    "parsed module"
  );

  let options = GenerateOptions {
    dialect: args.dialect.into(),
    attribution_links: args.links,
    unresolved_variables: if args.allow_unresolved {
      UnresolvedVariables::Warn
    } else {
      UnresolvedVariables::Error
    },
  };
  let code = generate_with_options(&module, &options).context("failed to generate code")?;

  match args.output.as_ref() {
    Some(path) => File::create(path)
      .and_then(|mut file| file.write_all(code.as_bytes()))
      .with_context(|| format!("failed to write {}", path.display()))?,
    None => stdout()
      .write_all(code.as_bytes())
      .context("failed to write <stdout>")?,
  };
  Ok(())
}

fn main() -> ExitCode {
  let args = Cli::parse();
  init_tracing(args.verbose);
  match run(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("{err:#}");
      ExitCode::FAILURE
    }
  }
}
