// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! clickguard CLI - Concurrent Clickjacking Checker

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use clickguard::{
    load_targets, scan, write_json, write_results, write_vulnerable, ConsoleProgress, NoProgress,
    OutputStyle, PartialCspPolicy, Progress, ResultSet, ScanConfig, DEFAULT_CONCURRENCY,
    DEFAULT_USER_AGENT, DEFAULT_VULNERABLE_OUTPUT,
};

/// Check a list of URLs for clickjacking protection
#[derive(Parser, Debug)]
#[command(name = "clickguard", version, about, long_about = None)]
struct Cli {
    /// Path to the file containing URLs to check, one per line
    urls_file: PathBuf,

    /// Number of concurrent workers
    #[arg(short, long, visible_alias = "concurrency", default_value_t = DEFAULT_CONCURRENCY)]
    workers: usize,

    /// Where to write vulnerable URLs
    #[arg(short, long, default_value = DEFAULT_VULNERABLE_OUTPUT)]
    output: PathBuf,

    /// Also write a human-readable line for every URL to this file
    #[arg(short, long)]
    results: Option<PathBuf>,

    /// Also write a JSON report to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print per-check progress
    #[arg(short, long)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// HTTP/HTTPS proxy URL
    #[arg(long)]
    proxy: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long)]
    insecure: bool,

    /// Count a Content-Security-Policy without frame-ancestors as protection
    #[arg(long)]
    lenient_csp: bool,
}

impl Cli {
    fn scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig::new()
            .concurrency(self.workers)
            .timeout(Duration::from_secs(self.timeout))
            .user_agent(self.user_agent.clone())
            .accept_invalid_certs(self.insecure)
            .vulnerable_output(self.output.clone())
            .verbose(self.verbose)
            .color(!self.no_color);

        if self.lenient_csp {
            config = config.partial_csp(PartialCspPolicy::Protected);
        }
        if let Some(ref proxy) = self.proxy {
            config = config.proxy(proxy.clone());
        }
        if let Some(ref path) = self.results {
            config = config.results_output(path.clone());
        }
        if let Some(ref path) = self.json {
            config = config.json_output(path.clone());
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clickguard=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = cli.scan_config();
    config.validate().context("invalid options")?;

    let targets = load_targets(&cli.urls_file)?;
    if targets.is_empty() {
        println!("No URLs found in {}", cli.urls_file.display());
    }

    let style = OutputStyle {
        color: config.color,
    };
    let console = ConsoleProgress::new(style);
    let progress: &dyn Progress = if config.verbose { &console } else { &NoProgress };

    let results = scan(&config, targets, progress)
        .await
        .context("failed to start scan")?;

    let failed_writes = write_outputs(&config, &results);
    print_summary(&results);

    if failed_writes > 0 {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

/// Write every requested output; returns how many writes failed
fn write_outputs(config: &ScanConfig, results: &ResultSet) -> usize {
    let mut failed = 0;

    if let Some(ref path) = config.results_output {
        match write_results(path, results) {
            Ok(_) => println!("All results have been saved to {}", path.display()),
            Err(e) => {
                error!(error = %e, "results file not written");
                eprintln!("Error: {}", e);
                failed += 1;
            }
        }
    }

    match write_vulnerable(&config.vulnerable_output, results) {
        Ok(_) => println!(
            "Vulnerable URLs have been saved to {}",
            config.vulnerable_output.display()
        ),
        Err(e) => {
            error!(error = %e, "vulnerable URL file not written");
            eprintln!("Error: {}", e);
            failed += 1;
        }
    }

    if let Some(ref path) = config.json_output {
        match write_json(path, results) {
            Ok(()) => println!("JSON report has been saved to {}", path.display()),
            Err(e) => {
                error!(error = %e, "JSON report not written");
                eprintln!("Error: {}", e);
                failed += 1;
            }
        }
    }

    failed
}

fn print_summary(results: &ResultSet) {
    let summary = results.summary();
    println!(
        "\nSummary: {} checked, {} protected, {} vulnerable, {} unreachable, {} errors",
        summary.total, summary.protected, summary.vulnerable, summary.unreachable, summary.errors
    );
}
