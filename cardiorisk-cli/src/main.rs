//! Cardiorisk CLI - Framingham-style cardiovascular risk assessment

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use cardiorisk_core::{
    assess_batch, assess_risk, render_json, render_text, PatientClinicalProfile,
    RiskAssessmentResult,
};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cardiorisk")]
#[command(about = "Framingham-style 10-year cardiovascular risk assessment")]
#[command(version = env!("CARDIORISK_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a single patient profile from a JSON file ("-" reads stdin)
    Assess {
        /// Path to a patient profile JSON file
        profile: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Assess a JSON-Lines file of patient profiles, one object per line
    Batch {
        /// Path to a .jsonl file of patient profiles
        path: PathBuf,

        /// Output format
        #[arg(long, default_value = "jsonl")]
        format: BatchFormat,

        /// Suppress the progress bar
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum BatchFormat {
    Jsonl,
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess { profile, format } => {
            let source = read_profile_source(&profile)?;
            let profile = PatientClinicalProfile::from_json(&source)?;
            let result = assess_risk(&profile).context("profile failed validation")?;

            match format {
                OutputFormat::Text => print!("{}", render_text(&result)),
                OutputFormat::Json => println!("{}", render_json(&result)),
            }
        }
        Commands::Batch {
            path,
            format,
            quiet,
        } => {
            let profiles = cardiorisk_core::profile::load_profiles_jsonl(&path)?;
            let results = assess_all(&profiles, quiet);
            let skipped = emit_batch_results(&results, format);
            if skipped > 0 {
                eprintln!("Skipped {} profile(s) due to validation errors", skipped);
            }
        }
    }

    Ok(())
}

/// Read a profile JSON document from a file, or stdin when the path is "-".
fn read_profile_source(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read profile from stdin")?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read profile file: {}", path.display()))
    }
}

/// Score all profiles in order, chunked so the progress bar stays live.
fn assess_all(
    profiles: &[PatientClinicalProfile],
    quiet: bool,
) -> Vec<Result<RiskAssessmentResult, cardiorisk_core::InvalidProfile>> {
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(profiles.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} profiles")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    };

    let mut results = Vec::with_capacity(profiles.len());
    for chunk in profiles.chunks(256) {
        results.extend(assess_batch(chunk));
        progress.inc(chunk.len() as u64);
    }
    progress.finish_and_clear();
    results
}

/// Emit batch results in input order; returns the number of skipped profiles.
fn emit_batch_results(
    results: &[Result<RiskAssessmentResult, cardiorisk_core::InvalidProfile>],
    format: BatchFormat,
) -> usize {
    if matches!(format, BatchFormat::Text) {
        println!(
            "{:<6} {:<8} {:<10} {}",
            "#", "RISK%", "CATEGORY", "FLAGGED FACTORS"
        );
    }

    let mut skipped = 0;
    for (idx, result) in results.iter().enumerate() {
        match result {
            Ok(assessment) => match format {
                BatchFormat::Jsonl => {
                    println!(
                        "{}",
                        serde_json::to_string(assessment)
                            .unwrap_or_else(|_| "{}".to_string())
                    );
                }
                BatchFormat::Text => {
                    let factors = if assessment.explanations.is_empty() {
                        "-".to_string()
                    } else {
                        assessment
                            .explanations
                            .iter()
                            .map(|e| e.factor.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    };
                    println!(
                        "{:<6} {:<8.1} {:<10} {}",
                        idx + 1,
                        assessment.risk_percentage,
                        assessment.risk_category.as_str(),
                        factors
                    );
                }
            },
            Err(e) => {
                eprintln!("warning: skipping profile {}: {}", idx + 1, e);
                skipped += 1;
            }
        }
    }
    skipped
}
