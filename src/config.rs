// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Scan configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, DEFAULT_USER_AGENT};
use crate::security::PartialCspPolicy;

/// Default number of checks in flight
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default path for the vulnerable URL list
pub const DEFAULT_VULNERABLE_OUTPUT: &str = "vulnerable_urls.txt";

/// Scan configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum concurrent checks
    pub concurrency: usize,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Accept invalid TLS certificates
    pub accept_invalid_certs: bool,
    /// Proxy URL
    pub proxy: Option<String>,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Treatment of a CSP lacking frame-ancestors
    pub partial_csp: PartialCspPolicy,
    /// Where vulnerable URLs are written
    pub vulnerable_output: PathBuf,
    /// Optional human-readable results file
    pub results_output: Option<PathBuf>,
    /// Optional JSON report
    pub json_output: Option<PathBuf>,
    /// Print per-check progress
    pub verbose: bool,
    /// Colour console output
    pub color: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
            proxy: None,
            max_redirects: 10,
            partial_csp: PartialCspPolicy::default(),
            vulnerable_output: PathBuf::from(DEFAULT_VULNERABLE_OUTPUT),
            results_output: None,
            json_output: None,
            verbose: false,
            color: true,
        }
    }
}

impl ScanConfig {
    /// Create a new scan config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum concurrent checks
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Accept invalid TLS certificates
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn partial_csp(mut self, policy: PartialCspPolicy) -> Self {
        self.partial_csp = policy;
        self
    }

    pub fn vulnerable_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.vulnerable_output = path.into();
        self
    }

    pub fn results_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_output = Some(path.into());
        self
    }

    pub fn json_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_output = Some(path.into());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Reject settings the scanner cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(Error::config("concurrency must be at least 1"));
        }
        if self.timeout.is_zero() {
            return Err(Error::config("timeout must be greater than zero"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::config("user agent must not be empty"));
        }
        Ok(())
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout,
            max_redirects: self.max_redirects,
            accept_invalid_certs: self.accept_invalid_certs,
            proxy: self.proxy.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.concurrency, 10);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.vulnerable_output, PathBuf::from("vulnerable_urls.txt"));
        assert_eq!(config.partial_csp, PartialCspPolicy::Vulnerable);
        assert!(config.results_output.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ScanConfig::new()
            .concurrency(3)
            .timeout(Duration::from_secs(2))
            .user_agent("Custom Agent")
            .results_output("all.txt");

        assert_eq!(config.concurrency, 3);
        assert_eq!(config.results_output, Some(PathBuf::from("all.txt")));

        let http = config.http_config();
        assert_eq!(http.user_agent, "Custom Agent");
        assert_eq!(http.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let err = ScanConfig::new().concurrency(0).validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
