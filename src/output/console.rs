// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Console rendering

use colored::{ColoredString, Colorize};

use super::describe;
use crate::models::{CheckOutcome, Classification, Target};
use crate::scanner::Progress;

/// Console style, passed explicitly to every renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    pub color: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self { color: true }
    }
}

impl OutputStyle {
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, text: &str, classification: Classification) -> String {
        if !self.color {
            return text.to_string();
        }
        let painted: ColoredString = match classification {
            Classification::Protected => text.green(),
            Classification::Vulnerable => text.red().bold(),
            Classification::Unreachable => text.yellow(),
            Classification::Error => text.magenta(),
        };
        painted.to_string()
    }
}

/// `[LABEL] description`, with the label coloured when enabled
pub fn render(outcome: &CheckOutcome, style: OutputStyle) -> String {
    let label = format!("[{}]", outcome.classification.label());
    format!(
        "{} {}",
        style.paint(&label, outcome.classification),
        describe(outcome)
    )
}

/// Verbose progress printed to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress {
    style: OutputStyle,
}

impl ConsoleProgress {
    pub fn new(style: OutputStyle) -> Self {
        Self { style }
    }
}

impl Progress for ConsoleProgress {
    fn on_start(&self, target: &Target) {
        println!("Starting check for: {}", target);
    }

    fn on_finish(&self, outcome: &CheckOutcome) {
        println!("Finished check for: {}", outcome.url);
        println!("{}", render(outcome, self.style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let outcome = CheckOutcome::new(
            "https://bad.example",
            Classification::Vulnerable,
            "no X-Frame-Options or CSP frame-ancestors",
        );

        assert_eq!(
            render(&outcome, OutputStyle::plain()),
            "[VULNERABLE] https://bad.example is vulnerable to clickjacking (no X-Frame-Options or CSP frame-ancestors)"
        );
    }

    #[test]
    fn test_render_colored_keeps_text() {
        let outcome = CheckOutcome::error("https://down.example", "timed out");
        let rendered = render(&outcome, OutputStyle::default());

        assert!(rendered.contains("[ERROR]"));
        assert!(rendered.ends_with("Error accessing https://down.example: timed out"));
    }
}
