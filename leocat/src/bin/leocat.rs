use clap::Parser;
use std::{fs, path::PathBuf};
use tracing::info;

use leocat_lib::{
    catalog::{CatalogSource, DEFAULT_GROUP},
    classify::{filter_catalog, FilterCriteria},
    config::FilterConfig,
    export::artifact_name,
};
use tletext::{scan_catalog, write_tle_set};
use tletypes::prelude::*;

/// Fetch a satellite catalog, keep the entries whose perigee altitude is
/// at or under the threshold, and export them as a TLE text file.
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Filter configuration toml file.
    ///
    /// Built-in defaults are used when not provided.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Inclusive perigee altitude threshold [km]
    #[arg(long)]
    max_perigee_km: Option<f64>,

    /// Keep only records whose name contains this substring
    /// (case-insensitive)
    #[arg(long)]
    name_contains: Option<String>,

    /// Export artifact basename, without extension
    #[arg(long)]
    export_basename: Option<String>,

    /// Directory the export artifact is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// The catalog source. This can be a CelesTrak group name, a gp.php
    /// style URL, or a path to a local TLE file for import mode
    #[arg(default_value = DEFAULT_GROUP)]
    source: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let mut cfg = match &opts.config {
        Some(path) => FilterConfig::load(path),
        None => FilterConfig::default(),
    };
    if let Some(max_perigee_km) = opts.max_perigee_km {
        cfg.max_perigee_km = max_perigee_km;
    }
    if opts.name_contains.is_some() {
        cfg.name_contains = opts.name_contains;
    }
    if let Some(basename) = opts.export_basename {
        cfg.export_basename = basename;
    }

    let source = CatalogSource::from_arg(&opts.source);
    info!(source = ?source, "Retrieving catalog");
    let raw = source.fetch()?;

    let records = scan_catalog(&raw);
    info!(records = records.len(), "Scanned catalog");

    let criteria = FilterCriteria {
        max_perigee_km: cfg.max_perigee_km,
        name_contains: cfg.name_contains.clone(),
    };
    let outcome = filter_catalog(records, &ReferenceBody::EARTH, &criteria);
    info!(
        matched = outcome.matched.len(),
        total = outcome.total,
        max_perigee_km = criteria.max_perigee_km,
        "Applied LEO filter"
    );

    let blob = write_tle_set(&outcome.matched);
    let path = opts
        .output_dir
        .join(artifact_name(&cfg.export_basename, chrono::Utc::now()));
    fs::write(&path, blob)?;
    info!(path = %path.display(), "Wrote export artifact");

    Ok(())
}
