// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Result files and console rendering
//!
//! Every writer truncates an existing file at its path. Failures are
//! reported as [`Error::OutputFile`] for that path only.

mod console;

pub use console::{render, ConsoleProgress, OutputStyle};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{CheckOutcome, Classification, ResultSet, ScanSummary};

/// Human-readable one-line description of an outcome
pub fn describe(outcome: &CheckOutcome) -> String {
    let url = &outcome.url;
    let detail = &outcome.detail;
    match outcome.classification {
        Classification::Protected => format!("{} is protected ({})", url, detail),
        Classification::Vulnerable => {
            format!("{} is vulnerable to clickjacking ({})", url, detail)
        }
        Classification::Unreachable => format!("Failed to access {} ({})", url, detail),
        Classification::Error => format!("Error accessing {}: {}", url, detail),
    }
}

/// Write vulnerable URLs, one per line. Returns how many were written.
pub fn write_vulnerable(path: impl AsRef<Path>, results: &ResultSet) -> Result<usize> {
    let path = path.as_ref();
    let urls = results.vulnerable_urls();
    write_lines(path, urls.iter().copied())?;
    info!(path = %path.display(), count = urls.len(), "wrote vulnerable URLs");
    Ok(urls.len())
}

/// Write one description line per outcome. Returns how many were written.
pub fn write_results(path: impl AsRef<Path>, results: &ResultSet) -> Result<usize> {
    let path = path.as_ref();
    let lines: Vec<String> = results.iter().map(describe).collect();
    write_lines(path, lines.iter().map(String::as_str))?;
    info!(path = %path.display(), count = lines.len(), "wrote results");
    Ok(lines.len())
}

/// JSON report layout
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub version: &'static str,
    pub summary: ScanSummary,
    pub outcomes: &'a [CheckOutcome],
}

impl<'a> JsonReport<'a> {
    pub fn new(results: &'a ResultSet) -> Self {
        Self {
            generated_at: Utc::now(),
            version: crate::VERSION,
            summary: results.summary(),
            outcomes: results.outcomes(),
        }
    }
}

/// Write the full result set as pretty-printed JSON
pub fn write_json(path: impl AsRef<Path>, results: &ResultSet) -> Result<()> {
    let path = path.as_ref();
    let report = serde_json::to_string_pretty(&JsonReport::new(results))?;
    write_lines(path, std::iter::once(report.as_str()))?;
    info!(path = %path.display(), "wrote JSON report");
    Ok(())
}

fn write_lines<'a>(path: &Path, lines: impl Iterator<Item = &'a str>) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::output_file(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line).map_err(|e| Error::output_file(path, e))?;
    }
    writer.flush().map_err(|e| Error::output_file(path, e))
}
