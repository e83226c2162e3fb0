// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # clickguard - Concurrent Clickjacking Checker
//!
//! Checks a list of URLs for missing clickjacking protection by looking at
//! `X-Frame-Options` and the CSP `frame-ancestors` directive.
//!
//! ## Features
//!
//! - Bounded concurrency: at most N checks in flight
//! - One outcome per target: network failures become results, never aborts
//! - Explicit policy for a CSP that lacks frame-ancestors
//! - Plain-text, results and JSON output
//!
//! ## Example
//!
//! ```rust,no_run
//! use clickguard::{scan, ScanConfig, NoProgress, Target};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScanConfig::new().concurrency(5);
//!     let targets = vec![Target::from("https://example.com")];
//!
//!     let results = scan(&config, targets, &NoProgress).await?;
//!     for url in results.vulnerable_urls() {
//!         println!("vulnerable: {}", url);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod input;
pub mod models;
pub mod output;
pub mod scanner;
pub mod security;

// Re-exports for convenience

// Configuration
pub use config::{ScanConfig, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT, DEFAULT_VULNERABLE_OUTPUT};

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{HttpClient, HttpClientConfig, Response, Transport, DEFAULT_USER_AGENT};

// Input
pub use input::{load_targets, parse_targets};

// Data model
pub use models::{CheckOutcome, Classification, ResultSet, ScanSummary, Target};

// Output
pub use output::{
    describe, render, write_json, write_results, write_vulnerable, ConsoleProgress, OutputStyle,
};

// Scanner
pub use scanner::{scan, Checker, CheckerPool, NoProgress, PoolStats, Progress};

// Security
pub use security::{CspPolicy, FramingAnalyzer, PartialCspPolicy, Protection};

/// clickguard version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
