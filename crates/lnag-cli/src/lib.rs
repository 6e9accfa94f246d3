#![deny(warnings)]
//! Command line front end for lnag.
//!
//! ```text
//! lnag 500 --unit m              # 500 m is about the length of 5 Soccer Fields.
//! lnag 2000 --dimension weight   # 2,000 Watermelons would weigh about as much as ...
//! ```

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser, ValueEnum};
use lnag_core::units;
use lnag_core::{ConceptStore, JsonDataset, LnagConfig, Matcher};
use lnag_formatter::{format_dimension_result, format_unit_result};
use lnag_types::Dimension;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Turn a number into a relatable comparison
#[derive(Parser, Debug, Clone)]
#[command(name = "lnag", version, about)]
#[command(group(ArgGroup::new("mode").required(true).args(["unit", "dimension"])))]
pub struct Cli {
    /// The number to put in perspective
    #[arg(allow_negative_numbers = true)]
    pub number: f64,

    /// Unit of NUMBER (m, km, ft, kg, lbs, liters, acres, sec, years, ...)
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Treat NUMBER as a count of items and compare them in this dimension
    #[arg(short, long)]
    pub dimension: Option<Dimension>,

    /// Configuration file (defaults to $LNAG_CONFIG_PATH, then ./lnag.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for picking among equally good comparisons
    #[arg(long)]
    pub seed: Option<u64>,

    /// Measurements JSON to use instead of the built-in dataset
    #[arg(long, requires = "durations")]
    pub measurements: Option<PathBuf>,

    /// Durations JSON to use instead of the built-in dataset
    #[arg(long, requires = "measurements")]
    pub durations: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log matcher decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// JSON output: the rendered sentence plus the raw match.
#[derive(Serialize)]
struct Report<'a, R: Serialize> {
    sentence: &'a str,
    mode: &'static str,
    result: &'a R,
}

/// Install the stderr subscriber. `RUST_LOG` wins unless `-v` is given.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run one comparison and write it to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = LnagConfig::load(cli.config.as_deref())
        .and_then(LnagConfig::apply_env_overrides)
        .context("failed to load configuration")?;
    let store = load_store(cli)?;
    let matcher = Matcher::with_config(&store, config.matcher);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!(number = cli.number, seed = ?cli.seed, concepts = store.len(), "Running comparison");

    if let Some(unit) = cli.unit.as_deref() {
        let (base_value, dimension) = units::convert(cli.number, unit).with_context(|| {
            format!("known units: {}", units::known_units().collect::<Vec<_>>().join(", "))
        })?;
        debug!(base_value, base_unit = dimension.base_unit(), %dimension, "Converted input");
        let result = matcher
            .find_unit_match(base_value, dimension, &mut rng)
            .with_context(|| format!("no comparison for {} {unit}", cli.number))?;
        let sentence = format_unit_result(&result, cli.number, unit);
        info!(concept = %result.concept.name, ratio = result.ratio, "Unit comparison");
        emit(out, cli.format, "unit", &sentence, &result)
    } else if let Some(dimension) = cli.dimension {
        let result = matcher
            .find_dimension_match(cli.number, dimension, &mut rng)
            .with_context(|| format!("no comparison for {} items by {dimension}", cli.number))?;
        let sentence = format_dimension_result(&result);
        info!(
            unit_item = %result.unit_item.name,
            target_item = %result.target_item.name,
            ratio = result.ratio,
            "Dimension comparison"
        );
        emit(out, cli.format, "dimension", &sentence, &result)
    } else {
        bail!("exactly one of --unit or --dimension must be provided")
    }
}

fn load_store(cli: &Cli) -> Result<ConceptStore> {
    match (&cli.measurements, &cli.durations) {
        (Some(measurements), Some(durations)) => {
            let measurements = fs::read_to_string(measurements)
                .with_context(|| format!("cannot read {}", measurements.display()))?;
            let durations = fs::read_to_string(durations)
                .with_context(|| format!("cannot read {}", durations.display()))?;
            Ok(ConceptStore::load(&JsonDataset::new(measurements, durations))?)
        }
        _ => Ok(ConceptStore::embedded()?),
    }
}

fn emit<R: Serialize>(
    out: &mut impl Write,
    format: OutputFormat,
    mode: &'static str,
    sentence: &str,
    result: &R,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{sentence}")?,
        OutputFormat::Json => {
            let report = Report { sentence, mode, result };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
