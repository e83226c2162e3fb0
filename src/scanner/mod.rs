// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Concurrent clickjacking scanner
//!
//! [`Checker`] classifies one target; [`CheckerPool`] runs it over a whole
//! target list with bounded concurrency.

mod checker;
mod pool;
mod progress;

pub use checker::Checker;
pub use pool::{CheckerPool, PoolStats};
pub use progress::{NoProgress, Progress};

use crate::config::ScanConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{ResultSet, Target};
use crate::security::FramingAnalyzer;

/// Scan targets over HTTP using `config`
///
/// Fails only if the configuration is invalid or the HTTP client cannot be
/// built; per-target failures end up in the result set.
pub async fn scan(
    config: &ScanConfig,
    targets: Vec<Target>,
    progress: &dyn Progress,
) -> Result<ResultSet> {
    config.validate()?;

    let client = HttpClient::with_config(config.http_config())?;
    let checker = Checker::new(client, FramingAnalyzer::new(config.partial_csp));
    let pool = CheckerPool::new(checker, config.concurrency);

    Ok(pool.run(targets, progress).await)
}
