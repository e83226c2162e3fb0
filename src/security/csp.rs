// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Content Security Policy (CSP) directive parsing
//!
//! Only what framing checks need: split a policy into directives and
//! answer whether `frame-ancestors` is among them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const FRAME_ANCESTORS: &str = "frame-ancestors";

/// A parsed CSP header value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CspPolicy {
    /// Raw CSP policy string
    pub policy: String,
    /// Directive name (lowercased) to source list
    pub directives: HashMap<String, Vec<String>>,
}

impl CspPolicy {
    /// Parse a CSP header value
    ///
    /// Per CSP3, the first occurrence of a directive wins; later duplicates
    /// are ignored.
    pub fn parse(csp: &str) -> Self {
        let mut policy = CspPolicy {
            policy: csp.to_string(),
            ..Default::default()
        };

        for directive in csp.split(';') {
            let mut parts = directive.split_whitespace();
            let Some(name) = parts.next() else {
                continue;
            };

            let values: Vec<String> = parts.map(|s| s.to_string()).collect();
            policy
                .directives
                .entry(name.to_ascii_lowercase())
                .or_insert(values);
        }

        policy
    }

    /// Check whether a directive is present
    pub fn has_directive(&self, name: &str) -> bool {
        self.directives.contains_key(&name.to_ascii_lowercase())
    }

    /// Source list of `frame-ancestors`, if the directive is present
    ///
    /// An empty list means the directive was given without sources, which
    /// browsers treat like `'none'`.
    pub fn frame_ancestors(&self) -> Option<&[String]> {
        self.directives.get(FRAME_ANCESTORS).map(|v| v.as_slice())
    }

    /// `frame-ancestors` allows any origin (`*`)
    pub fn allows_any_ancestor(&self) -> bool {
        self.frame_ancestors()
            .map(|sources| sources.iter().any(|s| s == "*"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csp() {
        let csp = "default-src 'self'; script-src 'self' 'unsafe-inline'; frame-ancestors 'self' https://partner.example";
        let policy = CspPolicy::parse(csp);

        assert!(policy.has_directive("default-src"));
        assert!(policy.has_directive("Script-Src"));
        assert_eq!(
            policy.frame_ancestors(),
            Some(&["'self'".to_string(), "https://partner.example".to_string()][..])
        );
    }

    #[test]
    fn test_directive_name_not_substring() {
        let policy = CspPolicy::parse("default-src 'self'; report-uri /csp/frame-ancestors");
        assert!(policy.frame_ancestors().is_none());
    }

    #[test]
    fn test_empty_frame_ancestors() {
        let policy = CspPolicy::parse("FRAME-ANCESTORS;");
        assert_eq!(policy.frame_ancestors(), Some(&[][..]));
        assert!(!policy.allows_any_ancestor());
    }

    #[test]
    fn test_first_directive_wins() {
        let policy = CspPolicy::parse("frame-ancestors 'none'; frame-ancestors *");
        assert_eq!(policy.frame_ancestors(), Some(&["'none'".to_string()][..]));
        assert!(!policy.allows_any_ancestor());
    }

    #[test]
    fn test_wildcard_ancestor() {
        let policy = CspPolicy::parse("frame-ancestors *");
        assert!(policy.allows_any_ancestor());
    }
}
