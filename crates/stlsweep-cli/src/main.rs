//! stlsweep - slice an ASCII STL mesh into contour segments.
//!
//! Cuts the mesh with evenly spaced horizontal planes and prints one line
//! segment per crossed facet per slice.
//!
//! # Logging
//!
//! Logs go to stderr. Set `RUST_LOG` to control them, e.g.
//! `RUST_LOG=stlsweep_slicer=trace`, or pass `-v` / `-vv` / `-vvv`.
//!
//! # Example
//!
//! ```bash
//! stlsweep part.stl --z-min 0 --z-max 20 --slices 100 > part.xyz
//! stlsweep part.stl --fit --format json -o part.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod output;

/// Slice an ASCII STL mesh with horizontal planes.
#[derive(Parser, Debug)]
#[command(name = "stlsweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input ASCII STL file
    input: PathBuf,

    /// Height of the first slice
    #[arg(long, allow_hyphen_values = true)]
    z_min: Option<f32>,

    /// Upper bound of the sweep (not itself sliced)
    #[arg(long, allow_hyphen_values = true)]
    z_max: Option<f32>,

    /// Number of slices
    #[arg(long, short = 'n')]
    slices: Option<u32>,

    /// Take the sweep range from the mesh bounds
    #[arg(long)]
    fit: bool,

    /// TOML file with `z_min`, `z_max` and `slices`
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Write segments to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Suppress all log output except errors
    #[arg(long, short)]
    quiet: bool,

    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Segment output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two `x y z` lines per segment
    Text,
    /// JSON document with settings and segments
    Json,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "stlsweep_mesh=info,stlsweep_slicer=info",
            2 => "stlsweep_mesh=debug,stlsweep_slicer=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let mesh = stlsweep_mesh::read_stl(&cli.input)
        .with_context(|| format!("Failed to load mesh from {:?}", cli.input))?;

    let settings = config::resolve(&cli, &mesh)?;
    info!(
        "Slicing {} facets: {} slices from z={} to z={}",
        mesh.num_facets(),
        settings.slices,
        settings.z_min,
        settings.z_max
    );

    let sweep = stlsweep_slicer::Sweep::new(&mesh, &settings)?;
    let count = match &cli.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {:?}", path))?;
            output::write(file, cli.format, &settings, sweep)?
        }
        None => output::write(std::io::stdout().lock(), cli.format, &settings, sweep)?,
    };
    info!("Wrote {} segments", count);

    Ok(())
}
