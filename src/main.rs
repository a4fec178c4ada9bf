//! skillsite - static documentation site builder.
//!
//! Scans the current directory for SKILL.md files and writes the generated
//! site to `docs/`.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use skillsite::Result;
use skillsite::config::BuildConfig;
use skillsite::site;

#[derive(Parser, Debug)]
#[command(
    name = "skillsite",
    version,
    about = "Build a static documentation site from SKILL.md files"
)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let root = std::env::current_dir()?;
    let config = BuildConfig::new(root);
    let report = site::build(&config)?;

    println!(
        "{} {} skills, {} pages -> {}",
        "Built:".green(),
        report.skills,
        report.pages_written,
        config.output_dir.display()
    );
    if report.skipped > 0 {
        println!(
            "{} {} malformed documents skipped",
            "Warning:".yellow(),
            report.skipped
        );
    }
    Ok(())
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,skillsite=info",
        1 => "info,skillsite=debug",
        2 => "debug,skillsite=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
