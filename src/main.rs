use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use fxcalc::{compute, config, repl};
use tracing_subscriber::EnvFilter;

/// fxcalc adds and subtracts amounts in different currencies and converts the
/// total into one target currency.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON settings file holding the rates and directives.
    #[arg(short, long, env = config::SETTINGS_ENV_VAR, default_value = config::DEFAULT_SETTINGS_PATH)]
    config: PathBuf,

    /// Logs every conversion and accumulation step.
    #[arg(short, long)]
    verbose: bool,

    /// Expression to evaluate, e.g. `usd: 10USD + 5EUR`. Starts an
    /// interactive session when omitted.
    expression: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
                             .with_writer(io::stderr)
                             .init();

    let table = config::load(&args.config).with_context(|| format!("Failed to load settings from '{}'",
                                                                   args.config.display()))?;

    if let Some(expression) = args.expression {
        let computation = compute(expression.trim(), &table)?;
        println!("{}", computation.result);
        return Ok(());
    }

    repl::run(&table, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
