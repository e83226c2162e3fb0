// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Framing protection analysis
//!
//! Decides from response headers whether a page can be framed by a foreign
//! origin. Priority: `X-Frame-Options`, then CSP `frame-ancestors`, then a
//! CSP lacking the directive, then nothing at all.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

use super::csp::CspPolicy;
use crate::http::headers::{
    CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY_REPORT_ONLY, X_FRAME_OPTIONS,
};
use crate::models::Classification;

/// How to treat a `Content-Security-Policy` that has no `frame-ancestors`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartialCspPolicy {
    /// A CSP without frame-ancestors does not restrict framing
    #[default]
    Vulnerable,
    /// Any CSP counts as protection
    Protected,
}

/// What the headers say about framing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Protection {
    /// `X-Frame-Options` value(s)
    XFrameOptions(String),
    /// CSP header value carrying `frame-ancestors`
    FrameAncestors(String),
    /// CSP header value(s) without `frame-ancestors`
    CspWithoutFrameAncestors(String),
    /// No relevant header
    Missing {
        /// Report-only CSP seen (never enforced)
        report_only: Option<String>,
    },
}

/// Framing protection analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct FramingAnalyzer {
    partial_csp: PartialCspPolicy,
}

impl FramingAnalyzer {
    /// Create new analyzer
    pub fn new(partial_csp: PartialCspPolicy) -> Self {
        Self { partial_csp }
    }

    /// Inspect response headers
    pub fn inspect(&self, headers: &HeaderMap) -> Protection {
        let xfo = header_values(headers, X_FRAME_OPTIONS);
        if !xfo.is_empty() {
            return Protection::XFrameOptions(xfo.join(", "));
        }

        let csp = header_values(headers, CONTENT_SECURITY_POLICY);
        if let Some(value) = csp
            .iter()
            .find(|value| CspPolicy::parse(value).frame_ancestors().is_some())
        {
            return Protection::FrameAncestors(value.clone());
        }
        if !csp.is_empty() {
            return Protection::CspWithoutFrameAncestors(csp.join(", "));
        }

        let report_only = header_values(headers, CONTENT_SECURITY_POLICY_REPORT_ONLY);
        Protection::Missing {
            report_only: (!report_only.is_empty()).then(|| report_only.join(", ")),
        }
    }

    /// Map an inspection result to a classification and detail
    pub fn verdict(&self, protection: &Protection) -> (Classification, String) {
        match protection {
            Protection::XFrameOptions(value) => (
                Classification::Protected,
                format!("X-Frame-Options: {}", value),
            ),
            Protection::FrameAncestors(csp) => {
                let mut detail = format!("Content-Security-Policy: {}", csp);
                if CspPolicy::parse(csp).allows_any_ancestor() {
                    detail.push_str(" (frame-ancestors allows any origin)");
                }
                (Classification::Protected, detail)
            }
            Protection::CspWithoutFrameAncestors(csp) => {
                let classification = match self.partial_csp {
                    PartialCspPolicy::Vulnerable => Classification::Vulnerable,
                    PartialCspPolicy::Protected => Classification::Protected,
                };
                (
                    classification,
                    format!("Content-Security-Policy without frame-ancestors: {}", csp),
                )
            }
            Protection::Missing { report_only: None } => (
                Classification::Vulnerable,
                "no X-Frame-Options or CSP frame-ancestors".to_string(),
            ),
            Protection::Missing {
                report_only: Some(csp),
            } => (
                Classification::Vulnerable,
                format!(
                    "no X-Frame-Options or CSP frame-ancestors; report-only policy is not enforced: {}",
                    csp
                ),
            ),
        }
    }

    /// Inspect and classify in one step
    pub fn classify(&self, headers: &HeaderMap) -> (Classification, String) {
        self.verdict(&self.inspect(headers))
    }
}

fn header_values(headers: &HeaderMap, name: &str) -> Vec<String> {
    headers
        .get_all(name)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_x_frame_options_protects() {
        let analyzer = FramingAnalyzer::default();
        let (classification, detail) = analyzer.classify(&headers(&[("X-Frame-Options", "DENY")]));

        assert_eq!(classification, Classification::Protected);
        assert_eq!(detail, "X-Frame-Options: DENY");
    }

    #[test]
    fn test_repeated_x_frame_options_are_joined() {
        let analyzer = FramingAnalyzer::default();
        let (classification, detail) = analyzer.classify(&headers(&[
            ("X-Frame-Options", "DENY"),
            ("X-Frame-Options", "SAMEORIGIN"),
        ]));

        assert_eq!(classification, Classification::Protected);
        assert_eq!(detail, "X-Frame-Options: DENY, SAMEORIGIN");
    }

    #[test]
    fn test_x_frame_options_wins_over_csp() {
        let analyzer = FramingAnalyzer::default();
        let protection = analyzer.inspect(&headers(&[
            ("Content-Security-Policy", "default-src 'self'"),
            ("x-frame-options", "SAMEORIGIN"),
        ]));

        assert_eq!(protection, Protection::XFrameOptions("SAMEORIGIN".to_string()));
    }

    #[test]
    fn test_frame_ancestors_protects() {
        let analyzer = FramingAnalyzer::default();
        let (classification, detail) = analyzer.classify(&headers(&[(
            "Content-Security-Policy",
            "frame-ancestors 'self'",
        )]));

        assert_eq!(classification, Classification::Protected);
        assert!(detail.contains("frame-ancestors 'self'"));
        assert!(!detail.contains("any origin"));
    }

    #[test]
    fn test_wildcard_frame_ancestors_is_flagged_in_detail() {
        let analyzer = FramingAnalyzer::default();
        let (classification, detail) = analyzer.classify(&headers(&[(
            "Content-Security-Policy",
            "frame-ancestors *",
        )]));

        assert_eq!(classification, Classification::Protected);
        assert!(detail.ends_with("(frame-ancestors allows any origin)"));
    }

    #[test]
    fn test_frame_ancestors_in_second_csp_header() {
        let analyzer = FramingAnalyzer::default();
        let protection = analyzer.inspect(&headers(&[
            ("Content-Security-Policy", "default-src 'self'"),
            ("Content-Security-Policy", "frame-ancestors 'none'"),
        ]));

        assert_eq!(
            protection,
            Protection::FrameAncestors("frame-ancestors 'none'".to_string())
        );
    }

    #[test]
    fn test_csp_without_frame_ancestors_follows_policy() {
        let map = headers(&[("Content-Security-Policy", "default-src 'self'")]);

        let (strict, _) = FramingAnalyzer::new(PartialCspPolicy::Vulnerable).classify(&map);
        let (lenient, detail) = FramingAnalyzer::new(PartialCspPolicy::Protected).classify(&map);

        assert_eq!(strict, Classification::Vulnerable);
        assert_eq!(lenient, Classification::Protected);
        assert!(detail.contains("without frame-ancestors"));
    }

    #[test]
    fn test_no_headers_is_vulnerable() {
        let analyzer = FramingAnalyzer::default();
        let (classification, detail) = analyzer.classify(&HeaderMap::new());

        assert_eq!(classification, Classification::Vulnerable);
        assert_eq!(detail, "no X-Frame-Options or CSP frame-ancestors");
    }

    #[test]
    fn test_report_only_is_not_protection() {
        let analyzer = FramingAnalyzer::new(PartialCspPolicy::Protected);
        let (classification, detail) = analyzer.classify(&headers(&[(
            "Content-Security-Policy-Report-Only",
            "frame-ancestors 'none'",
        )]));

        assert_eq!(classification, Classification::Vulnerable);
        assert!(detail.contains("report-only"));
    }
}
