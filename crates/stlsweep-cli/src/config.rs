//! Sweep settings from defaults, a config file, the mesh and flags.

use std::path::Path;

use anyhow::{Context, Result};
use stlsweep_mesh::Mesh;
use stlsweep_slicer::SliceSettings;

use crate::Cli;

/// Read settings from a TOML file. Missing keys keep their defaults.
pub fn load(path: &Path) -> Result<SliceSettings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {:?}", path))?;
    parse(&text).with_context(|| format!("Invalid config {:?}", path))
}

fn parse(text: &str) -> Result<SliceSettings> {
    Ok(toml::from_str(text)?)
}

/// Combine settings sources. Later sources win: defaults, config file,
/// mesh bounds (with `--fit`), then explicit flags.
pub fn resolve(cli: &Cli, mesh: &Mesh) -> Result<SliceSettings> {
    let mut settings = match &cli.config {
        Some(path) => load(path)?,
        None => SliceSettings::default(),
    };

    if cli.fit {
        let (min, max) = mesh
            .bounds()
            .context("--fit needs a mesh with at least one vertex")?;
        settings.z_min = min.z;
        settings.z_max = max.z;
    }

    if let Some(z) = cli.z_min {
        settings.z_min = z;
    }
    if let Some(z) = cli.z_max {
        settings.z_max = z;
    }
    if let Some(n) = cli.slices {
        settings.slices = n;
    }

    settings.validate()?;
    Ok(settings)
}
