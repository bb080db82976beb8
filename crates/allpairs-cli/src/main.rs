//! allpairs - pairwise test case generator
//!
//! Reads one or more tab-separated parameter tables and prints or writes a
//! set of test cases covering every pair of values.

#![forbid(unsafe_code)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use allpairs_core::report::{coverage_report, enumerated_base, scored_listing, write_outputs};
use allpairs_core::{GenerationConfig, GenerationSession};

#[derive(Parser, Debug)]
#[command(name = "allpairs")]
#[command(author, version, about = "Generate pairwise test cases from parameter tables")]
struct Cli {
    /// Tab-separated parameter tables (first line holds the labels)
    #[arg(required = true)]
    tables: Vec<PathBuf>,

    /// Output base path; writes <path>.txt and <path>.csv
    #[arg(short, long)]
    output: Option<String>,

    /// Print the scored case listing and the pair coverage report
    #[arg(short, long)]
    verbose: bool,

    /// Print nothing unless asked to
    #[arg(short, long)]
    quiet: bool,

    /// Sample a number from range values such as [2,8]
    #[arg(short, long)]
    range: bool,

    /// Seed for range sampling
    #[arg(long)]
    seed: Option<u64>,

    /// JSON generation config; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print each case's values as quoted program arguments
    #[arg(long)]
    print_args: bool,
}

impl Cli {
    fn generation_config(&self) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GenerationConfig::default(),
        };
        if self.range {
            config.range_sampling = true;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }

    /// Display is on when asked for, or when nothing would be written.
    fn show_verbose(&self) -> bool {
        self.verbose || (self.output.is_none() && !self.quiet)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.generation_config()?;
    let verbose = cli.show_verbose();

    for (index, path) in cli.tables.iter().enumerate() {
        let session = GenerationSession::from_path(path, &config, index as u64)
            .with_context(|| format!("generating cases for {}", path.display()))?;
        info!(
            table = %path.display(),
            cases = session.cases().len(),
            "generated table"
        );

        if let Some(base) = &cli.output {
            let base = if cli.tables.len() > 1 {
                enumerated_base(base, index)
            } else {
                base.clone()
            };
            let (txt, csv) = write_outputs(&session, &base)
                .with_context(|| format!("writing output {base}"))?;
            info!(txt = %txt.display(), csv = %csv.display(), "wrote output");
        }

        if verbose {
            writeln!(out)?;
            write!(out, "{}", scored_listing(&session))?;
            writeln!(out)?;
            write!(out, "{}", coverage_report(&session))?;
            writeln!(out)?;
        }

        if cli.print_args {
            for args in session.invocation_args() {
                writeln!(out, "{args}")?;
            }
        }
    }

    Ok(())
}
