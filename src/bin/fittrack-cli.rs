// ABOUTME: Command-line front end for the fittrack fitness metrics engine
// ABOUTME: Renders report lines for built-in demo packages or a JSON package file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Fittrack CLI
//!
//! Feeds sensor packages through the session factory and prints one report
//! line per package to stdout. Diagnostics go to stderr, so report output
//! stays pipeable.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use fittrack::logging::LoggingConfig;
use fittrack::models::SensorPackage;
use fittrack::report;

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "Fitness metrics for sensor-reported workout sessions",
    version
)]
struct Cli {
    /// Increase log verbosity to debug
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render report lines for the built-in sample packages
    Demo,
    /// Render report lines for packages read from a JSON file ("-" for stdin)
    Report {
        /// Path to a JSON array of sensor packages
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let packages = match cli.command {
        Command::Demo => SensorPackage::demo_set(),
        Command::Report { file } => load_from_path(&file)?,
    };

    tracing::info!(count = packages.len(), "processing sensor packages");
    for line in report::summarize(&packages) {
        println!("{line}");
    }

    Ok(())
}

fn load_from_path(path: &Path) -> Result<Vec<SensorPackage>> {
    if path.as_os_str() == "-" {
        return report::load_packages(io::stdin().lock())
            .context("failed to parse sensor packages from stdin");
    }

    let file = File::open(path)
        .with_context(|| format!("failed to open package file {}", path.display()))?;
    report::load_packages(io::BufReader::new(file))
        .with_context(|| format!("failed to parse sensor packages from {}", path.display()))
}
