use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use maxpath::{EvaluatorConfig, PathEvaluator, Triangle, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "maxpath", about = "Maximum root-to-leaf path sum of a number triangle")]
struct Cli {
    /// Triangle file: one row per line, whitespace-separated integers.
    input_file: Option<PathBuf>,

    /// Recompute every subtree instead of caching resolved sums.
    #[arg(long)]
    no_memo: bool,

    /// Print traversal statistics to stderr.
    #[arg(long)]
    stats: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(input) = cli.input_file.as_deref() else {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| Cli::command().get_name().to_string());
        eprintln!("Usage: {program} input_file");
        return ExitCode::from(1);
    };

    match run(&cli, input) {
        Ok(max_sum) => {
            println!("Max path sum: {max_sum}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli, input: &Path) -> Result<Value> {
    let file = File::open(input)
        .with_context(|| format!("can't open file: {}", input.display()))?;

    progress(&format!("Reading triangle from {}... ", input.display()));
    let triangle = Triangle::read_from(BufReader::new(file))?;
    eprintln!("done");

    let config = EvaluatorConfig::default()
        .with_memoization(!cli.no_memo)
        .with_statistics(cli.stats);

    progress("Processing... ");
    let result = PathEvaluator::new(config).evaluate(&triangle)?;
    eprintln!("done");

    if let Some(stats) = &result.stats {
        eprintln!("{}", stats.report());
    }

    Ok(result.max_sum)
}

/// Status line to stderr without a trailing newline
fn progress(message: &str) {
    let mut stderr = std::io::stderr();
    let _ = write!(stderr, "{message}");
    let _ = stderr.flush();
}
