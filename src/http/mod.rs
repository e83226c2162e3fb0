// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for clickguard
//!
//! A reqwest-backed client behind the [`Transport`] trait, so the scanner
//! can be driven by an instrumented transport in tests.

mod client;
mod response;
mod transport;

pub use client::{HttpClient, HttpClientConfig};
pub use response::Response;
pub use transport::Transport;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:91.0) Gecko/20100101 Firefox/91.0";

/// Response headers relevant to framing protection
pub mod headers {
    pub const X_FRAME_OPTIONS: &str = "x-frame-options";
    pub const CONTENT_SECURITY_POLICY: &str = "content-security-policy";
    pub const CONTENT_SECURITY_POLICY_REPORT_ONLY: &str = "content-security-policy-report-only";
    pub const ACCEPT: &str = "accept";
    pub const ACCEPT_LANGUAGE: &str = "accept-language";
}
