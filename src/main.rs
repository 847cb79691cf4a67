//! Command-line front-end for reddit-links.
//!
//! Normalizes and classifies links given as arguments, or one per line on
//! stdin when no arguments are given.
//!
//! # Usage
//!
//! ```bash
//! # Classify a single link
//! reddit-links https://np.reddit.com/live/wbjbjba8zrl6
//!
//! # Classify a list of links as JSON lines
//! cat links.txt | reddit-links --json
//! ```
//!
//! # Environment Variables
//!
//! See [`reddit_links::config`] for `RUST_LOG`, `LOG_FORMAT`, `OUTPUT_FORMAT`
//! and `COLOR`.

use reddit_links::config;
use reddit_links::telemetry;
use reddit_links::{LinkCategory, resolve};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use serde::Serialize;
use std::io::{self, BufRead, BufWriter, Write};

/// Normalize and classify Reddit links.
#[derive(Parser)]
#[command(name = "reddit-links")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print one JSON object per input
    #[arg(short, long)]
    json: bool,

    /// Links or site-relative paths (reads stdin when empty)
    links: Vec<String>,
}

/// One line of output.
#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    canonical: Option<String>,
    category: LinkCategory,
}

impl<'a> Report<'a> {
    fn new(input: &'a str) -> Self {
        match resolve(input) {
            Some(resolved) => Self {
                input,
                canonical: Some(resolved.link.to_string()),
                category: resolved.category,
            },
            None => Self {
                input,
                canonical: None,
                category: LinkCategory::NotReddit,
            },
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    telemetry::init_tracing(&config);
    config.print_summary();

    if let Some(enabled) = config.color_override() {
        colored::control::set_override(enabled);
    }

    let json = cli.json || config.json_output();
    let mut out = BufWriter::new(io::stdout().lock());

    if cli.links.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read link from stdin")?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            write_report(&mut out, &Report::new(input), json)?;
        }
    } else {
        for input in &cli.links {
            write_report(&mut out, &Report::new(input), json)?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

fn write_report(out: &mut impl Write, report: &Report<'_>, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, report).context("Failed to encode report")?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{}\t{}",
            paint(report.category),
            report.canonical.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}

fn paint(category: LinkCategory) -> ColoredString {
    let tag = format!("{:<22}", category.as_str());
    if category.is_routable() {
        tag.green()
    } else if category == LinkCategory::NotReddit {
        tag.red().bold()
    } else {
        tag.yellow()
    }
}
