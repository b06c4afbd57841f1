//! Binary Fusion Tap CLI
//!
//! Command-line interface for the Binary Fusion Tap derivation pipeline.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use fusion_core::constants::MAX_EXACT_K;
use fusion_core::types::DerivationResult;
use fusion_explorer::{
    explore_with_progress, find_special, render_chart, render_detailed, render_special,
    render_summary_table, to_json, write_json, ExplorerConfig,
};
use fusion_tap::{
    bit_length, derive, render_report, to_prefixed_binary, verify_integrity, ChecksumAlgorithm,
    DerivationView, IntegrityReport,
};

use crate::config::FusionConfig;

/// Ranges at least this long get a progress bar.
const PROGRESS_BAR_MIN: u64 = 10_000;

/// Binary Fusion Tap - deterministic 8-fold heartbeat derivation
#[derive(Parser, Debug)]
#[command(name = "fusion-tap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Defaults to `tap` with the configured k
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Derive the tap state for one k and print the report
    Tap {
        /// Tap parameter (default: $FUSION_TAP_K, else 11)
        #[arg(short, allow_negative_numbers = true)]
        k: Option<i64>,
        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Explore a range of k values
    Explore {
        /// First k (inclusive)
        #[arg(short, long, default_value_t = fusion_core::DEFAULT_EXPLORE_START)]
        start: i64,
        /// Last k (inclusive)
        #[arg(short, long, default_value_t = fusion_core::DEFAULT_EXPLORE_END)]
        end: i64,
        /// Print a detailed block per k
        #[arg(short, long)]
        detailed: bool,
        /// Print the bit-length growth chart
        #[arg(short, long)]
        chart: bool,
        /// Print the special-values report
        #[arg(long)]
        special: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Write JSON results to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute integrity checksums of the seed and tap state
    Checksum {
        /// Tap parameter (default: $FUSION_TAP_K, else 11)
        #[arg(short, allow_negative_numbers = true)]
        k: Option<i64>,
        /// Digest algorithm (sha256 or sha512)
        #[arg(short, long)]
        algorithm: Option<ChecksumAlgorithm>,
        /// Expected seed checksum (hex)
        #[arg(long)]
        expect_seed: Option<String>,
        /// Expected tap-state checksum (hex)
        #[arg(long)]
        expect_tap: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_json);

    let config = FusionConfig::from_env();
    if !config.color {
        colored::control::set_override(false);
    }

    run(command_or_default(cli.command), &config)
}

/// No subcommand means `tap` with the configured k.
fn command_or_default(command: Option<Commands>) -> Commands {
    command.unwrap_or(Commands::Tap { k: None, json: false })
}

fn run(command: Commands, config: &FusionConfig) -> Result<()> {
    match command {
        Commands::Tap { k, json } => {
            let k = config.resolve_k(k).context("Invalid tap parameter")?;
            cmd_tap(k, json)
        }
        Commands::Explore {
            start,
            end,
            detailed,
            chart,
            special,
            json,
            output,
        } => cmd_explore(
            ExplorerConfig::new().range(start, end),
            ExploreOutput {
                detailed,
                chart,
                special,
                json,
                output,
            },
        ),
        Commands::Checksum {
            k,
            algorithm,
            expect_seed,
            expect_tap,
            json,
        } => {
            let k = config.resolve_k(k).context("Invalid tap parameter")?;
            let algorithm = match algorithm {
                Some(algorithm) => algorithm,
                None => config
                    .default_checksum_algorithm()
                    .context("Invalid checksum algorithm in configuration")?,
            };
            cmd_checksum(k, algorithm, expect_seed.as_deref(), expect_tap.as_deref(), json)
        }
    }
}

fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        "fusion=debug,info"
    } else {
        "fusion=info,warn"
    };

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(fmt_layer)
        .init();
}

fn warn_if_wrapped(k: i64) {
    if k > MAX_EXACT_K {
        warn!(
            k,
            max_exact_k = MAX_EXACT_K,
            "seed exceeds 64 bits; values are the low 64 bits of the true result"
        );
    } else if k < 1 {
        debug!(k, "non-positive k yields an empty seed");
    }
}

/// Derive and print one tap state
fn cmd_tap(k: i64, json: bool) -> Result<()> {
    warn_if_wrapped(k);
    let result = derive(k);

    if json {
        let view = DerivationView::from(result);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_report(&result));
    }

    Ok(())
}

struct ExploreOutput {
    detailed: bool,
    chart: bool,
    special: bool,
    json: bool,
    output: Option<PathBuf>,
}

/// Explore a range of k values
fn cmd_explore(config: ExplorerConfig, out: ExploreOutput) -> Result<()> {
    config.validate().context("Invalid exploration range")?;

    if config.includes_wrapped() {
        warn!(
            end = config.end,
            max_exact_k = MAX_EXACT_K,
            "range extends past the exact-precision limit; wrapped rows are marked"
        );
    }

    let pb = if config.len() >= PROGRESS_BAR_MIN {
        let pb = ProgressBar::new(config.len());
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let summaries = explore_with_progress(&config, |progress| {
        if let Some(pb) = &pb {
            pb.set_position(progress.explored);
        }
    })
    .context("Exploration failed")?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if out.json {
        println!("{}", to_json(&summaries)?);
    } else {
        print!("{}", render_summary_table(&summaries));
        if out.detailed {
            println!();
            print!("{}", render_detailed(&summaries));
        }
        if out.chart {
            println!();
            print!("{}", render_chart(&summaries));
        }
        if out.special {
            println!();
            print!("{}", render_special(&find_special(&summaries)));
        }
    }

    if let Some(path) = out.output {
        write_json(&summaries, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("{} {}", "✅ Results saved to:".green(), path.display());
    }

    Ok(())
}

/// Compute and optionally verify checksums
fn cmd_checksum(
    k: i64,
    algorithm: ChecksumAlgorithm,
    expect_seed: Option<&str>,
    expect_tap: Option<&str>,
    json: bool,
) -> Result<()> {
    warn_if_wrapped(k);
    let result = derive(k);

    let report = verify_integrity(
        result.seed_value(),
        result.tap_state(),
        algorithm,
        expect_seed,
        expect_tap,
    )
    .context("Invalid expected checksum")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} k = {} ({})", "Checksums for".cyan().bold(), k, algorithm);
        for line in checksum_lines(&result, &report) {
            println!("   {}", line);
        }

        if report.expected_seed.is_some() {
            println!("   {}", verdict("Seed", report.seed_valid));
        }
        if report.expected_tap.is_some() {
            println!("   {}", verdict("Tap state", report.tap_valid));
        }
    }

    report.ensure_valid().context("Integrity check failed")?;
    Ok(())
}

/// Values, binary renderings, bit lengths, and digests for the checksum report.
fn checksum_lines(result: &DerivationResult, report: &IntegrityReport) -> Vec<String> {
    let seed_bits = bit_length(result.seed_value());
    let tap_bits = bit_length(result.tap_state());
    let increase = i64::from(tap_bits) - i64::from(seed_bits);

    vec![
        format!("Seed: {}", result.seed_value()),
        format!("Seed Binary: {}", to_prefixed_binary(result.seed_value())),
        format!("Seed Bit Length: {}", seed_bits),
        format!("Seed Checksum: {}", report.seed_checksum),
        format!("Tap State: {}", result.tap_state()),
        format!("Tap State Binary: {}", to_prefixed_binary(result.tap_state())),
        format!("Tap State Bit Length: {}", tap_bits),
        format!("Tap State Checksum: {}", report.tap_checksum),
        format!("Bit Length Increase: {:+}", increase),
    ]
}

fn verdict(label: &str, valid: bool) -> ColoredString {
    if valid {
        format!("✅ {label} checksum matches").as_str().green()
    } else {
        format!("❌ {label} checksum does not match").as_str().red()
    }
}
