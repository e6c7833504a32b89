//! Treemap Demo: plot `label=value` pairs as a terminal treemap.
//!
//! ```text
//! cargo run --example treemap_demo -- Petrobras=38.12 Vale=61.5 Itaú=33.9
//! cargo run --example treemap_demo -- --values --gray
//! ```
//!
//! With no pairs, a sample of five closing prices is plotted. The chart
//! fills the terminal minus one row for the shell prompt. Set `RUST_LOG`
//! (e.g. `RUST_LOG=tessera=debug`) for logs on stderr.

use std::io::{self, Write};
use std::process::ExitCode;
use tessera::terminal::size_or_default;
use tessera::{ChartConfig, Entry, Palette, TreeMap, TreemapError, GRAYSCALE};
use tracing_subscriber::EnvFilter;

/// Sample closing prices used when no pairs are given.
const SAMPLE: [(&str, f64); 5] = [
    ("Petrobras", 38.12),
    ("Vale", 61.50),
    ("Itaú", 33.90),
    ("Bradesco", 14.27),
    ("Ambev", 12.80),
];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("treemap_demo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), TreemapError> {
    let mut config = ChartConfig::default();
    let mut palette = Palette::default();
    let mut entries = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--values" => config = config.with_values(true),
            "--no-border" => config = config.with_border(None),
            "--gray" => palette = Palette::from_static(&GRAYSCALE),
            pair => entries.push(pair.parse::<Entry>()?),
        }
    }

    if entries.is_empty() {
        entries = SAMPLE.iter().map(|&(label, value)| Entry::new(label, value)).collect();
    }
    tracing::info!(entries = entries.len(), "plotting");

    let chart = TreeMap::from_entries(entries)
        .with_config(config)
        .with_palette(palette);

    let (width, height) = size_or_default();
    let mut stdout = io::stdout().lock();
    chart.plot(&mut stdout, width, height.saturating_sub(1).max(1))?;
    stdout.flush()?;
    Ok(())
}
