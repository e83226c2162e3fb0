// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Single-target clickjacking check

use std::time::Instant;

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::http::Transport;
use crate::models::{CheckOutcome, Classification, Target};
use crate::security::FramingAnalyzer;

/// Classifies one target from a single GET
pub struct Checker<T> {
    transport: T,
    analyzer: FramingAnalyzer,
}

impl<T: Transport> Checker<T> {
    pub fn new(transport: T, analyzer: FramingAnalyzer) -> Self {
        Self {
            transport,
            analyzer,
        }
    }

    /// Check a target. Never fails: every failure becomes an outcome.
    pub async fn check(&self, target: &Target) -> CheckOutcome {
        let start = Instant::now();

        let outcome = match Url::parse(target.as_str()) {
            Ok(url) => self.check_url(target, &url).await,
            Err(e) => CheckOutcome::error(target.as_str(), Error::from(e).to_string()),
        };

        outcome.with_elapsed_ms(start.elapsed().as_millis() as u64)
    }

    async fn check_url(&self, target: &Target, url: &Url) -> CheckOutcome {
        let response = match self.transport.get(url).await {
            Ok(response) => response,
            Err(e) => {
                debug!(url = %target, error = %e, timeout = e.is_timeout(), "request failed");
                return CheckOutcome::error(target.as_str(), e.to_string());
            }
        };

        let status = response.status_code();
        let outcome = if response.is_ok() {
            let (classification, detail) = self.analyzer.classify(&response.headers);
            CheckOutcome::new(target.as_str(), classification, detail)
        } else {
            CheckOutcome::new(
                target.as_str(),
                Classification::Unreachable,
                format!("status code: {}", status),
            )
        }
        .with_status(status);

        debug!(
            url = %target,
            final_url = %response.url,
            redirected = response.redirected,
            response_ms = response.response_time_ms,
            classification = %outcome.classification,
            "classified"
        );

        if response.redirected {
            outcome.with_final_url(response.url.as_str())
        } else {
            outcome
        }
    }
}
