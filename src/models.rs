// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Core data types: targets, check outcomes and the result set

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single URL to check, as read from the input file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Target(String);

impl Target {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Target {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Target {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Verdict for one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// X-Frame-Options or CSP frame-ancestors present
    Protected,
    /// No framing protection found
    Vulnerable,
    /// Response arrived but was not 200 OK
    Unreachable,
    /// Request never produced a response
    Error,
}

impl Classification {
    /// Short uppercase label used in console output
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Protected => "PROTECTED",
            Classification::Vulnerable => "VULNERABLE",
            Classification::Unreachable => "UNREACHABLE",
            Classification::Error => "ERROR",
        }
    }

    pub fn is_vulnerable(&self) -> bool {
        matches!(self, Classification::Vulnerable)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of checking one target. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// The target URL exactly as it appeared in the input
    pub url: String,
    pub classification: Classification,
    /// Human-readable reason or header value
    pub detail: String,
    /// HTTP status, when a response arrived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Where redirects ended, when the response came from another URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_url: Option<String>,
    /// Wall time spent on the check
    pub elapsed_ms: u64,
    pub checked_at: DateTime<Utc>,
}

impl CheckOutcome {
    pub fn new(
        url: impl Into<String>,
        classification: Classification,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            classification,
            detail: detail.into(),
            status: None,
            final_url: None,
            elapsed_ms: 0,
            checked_at: Utc::now(),
        }
    }

    /// Outcome for a target whose request failed outright
    pub fn error(url: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(url, Classification::Error, detail)
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_final_url(mut self, final_url: impl Into<String>) -> Self {
        self.final_url = Some(final_url.into());
        self
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    pub fn is_vulnerable(&self) -> bool {
        self.classification.is_vulnerable()
    }
}

/// Outcomes in completion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    outcomes: Vec<CheckOutcome>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CheckOutcome> {
        self.outcomes.iter()
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Outcomes classified as vulnerable
    pub fn vulnerable(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| o.is_vulnerable())
    }

    /// URLs classified as vulnerable
    pub fn vulnerable_urls(&self) -> Vec<&str> {
        self.vulnerable().map(|o| o.url.as_str()).collect()
    }

    pub fn summary(&self) -> ScanSummary {
        let mut summary = ScanSummary {
            total: self.outcomes.len(),
            ..Default::default()
        };
        for outcome in &self.outcomes {
            match outcome.classification {
                Classification::Protected => summary.protected += 1,
                Classification::Vulnerable => summary.vulnerable += 1,
                Classification::Unreachable => summary.unreachable += 1,
                Classification::Error => summary.errors += 1,
            }
        }
        summary
    }

    pub fn into_outcomes(self) -> Vec<CheckOutcome> {
        self.outcomes
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a CheckOutcome;
    type IntoIter = std::slice::Iter<'a, CheckOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

impl FromIterator<CheckOutcome> for ResultSet {
    fn from_iter<I: IntoIterator<Item = CheckOutcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

/// Counts per classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total: usize,
    pub protected: usize,
    pub vulnerable: usize,
    pub unreachable: usize,
    pub errors: usize,
}
