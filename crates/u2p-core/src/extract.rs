//! URL extraction from plain text.
//!
//! Scans the input one line at a time so memory stays bounded regardless of
//! file size. Matches come back in input order with duplicates preserved;
//! nothing beyond the pattern itself is validated.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Fixed URL pattern. Note `[$-_@.&+]` is a character *range* (0x24..0x5F),
/// which is what lets `/`, `:`, `?` and `=` match. Existing ledgers are
/// keyed by matches of this exact pattern, so it must not change.
pub const URL_PATTERN: &str =
    r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+";

/// Extracts every URL match from `reader`, line by line.
pub fn extract_urls<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let pattern = Regex::new(URL_PATTERN).expect("URL_PATTERN is valid");
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line.context("read input line")?;
        for m in pattern.find_iter(&line) {
            urls.push(m.as_str().to_string());
        }
    }
    Ok(urls)
}

/// Opens `path` and extracts every URL match from it.
pub fn extract_urls_from_path(path: &Path) -> Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("open input file: {}", path.display()))?;
    extract_urls(BufReader::new(file))
}
