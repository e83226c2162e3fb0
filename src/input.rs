// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Target list loading

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Target;

/// Read targets from a newline-delimited file
///
/// Lines are trimmed and blank lines dropped; order is preserved. A missing
/// or unreadable file is an [`Error::InputFile`].
pub fn load_targets(path: impl AsRef<Path>) -> Result<Vec<Target>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| Error::input_file(path, e))?;
    let targets = parse_targets(&contents);
    debug!(path = %path.display(), count = targets.len(), "loaded targets");
    Ok(targets)
}

/// Split text into targets, one per non-blank line
pub fn parse_targets(contents: &str) -> Vec<Target> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Target::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let targets = parse_targets("  https://a.example  \n\n\t\nhttps://b.example\r\n   \n");
        assert_eq!(
            targets,
            vec![Target::from("https://a.example"), Target::from("https://b.example")]
        );
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        let targets = parse_targets("https://b.example\nhttps://a.example\nhttps://b.example");
        let urls: Vec<&str> = targets.iter().map(|t| t.as_str()).collect();
        assert_eq!(urls, vec!["https://b.example", "https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_load_targets_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://a.example").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "https://b.example").unwrap();

        let targets = load_targets(file.path()).unwrap();
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_targets(dir.path().join("missing.txt")).unwrap_err();

        assert!(matches!(err, Error::InputFile { .. }));
        assert!(err.is_fatal());
    }
}
