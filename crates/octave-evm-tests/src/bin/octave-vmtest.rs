//! Command-line VMTest runner

use anyhow::{bail, Result};
use clap::Parser;
use octave_evm::Revision;
use octave_evm_tests::TestRunner;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Run ethereum/tests VMTest fixtures against the octave interpreter
#[derive(Parser, Debug)]
#[command(name = "octave-vmtest")]
#[command(version)]
struct Cli {
    /// Directory containing VMTest JSON files (searched recursively)
    tests_dir: PathBuf,

    /// Protocol revision, e.g. Homestead, Istanbul, Shanghai
    #[arg(long, default_value = "Homestead")]
    fork: Revision,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log every passing test
    #[arg(short, long)]
    verbose: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if !cli.tests_dir.is_dir() {
        bail!("not a directory: {}", cli.tests_dir.display());
    }

    let runner = TestRunner::new(cli.fork, cli.verbose);
    let stats = runner.run_vm_tests(&cli.tests_dir)?;

    if cli.json {
        println!("{}", stats.to_json()?);
    } else {
        stats.print_summary();
    }

    if stats.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
