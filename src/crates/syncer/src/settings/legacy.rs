//! Pre-JSON `key=value` settings layout

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tracing::warn;

static LEGACY_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*=").unwrap());

/// Whether `contents` uses the legacy layout, judged by its first line
pub fn is_legacy_format(contents: &str) -> bool {
    contents
        .lines()
        .next()
        .is_some_and(|line| LEGACY_LINE_REGEX.is_match(line.trim_start()))
}

/// Parse legacy `key=value` lines into a JSON object
///
/// Values are split on the first `=` only. Blank lines are ignored and lines
/// without a `=` are skipped with a warning.
pub fn parse_legacy(contents: &str) -> Map<String, Value> {
    let mut values = Map::new();

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) => {
                values.insert(key.to_string(), Value::String(value.to_string()));
            }
            None => warn!(line = index + 1, "Skipping legacy settings line without '='"),
        }
    }

    values
}
