use regex::Regex;
use std::sync::LazyLock;

use crate::models::WriterShare;

static WRITER_SHARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*)\s*\(([0-9]+)%\)").unwrap());

/// Parse `"Jane Doe (50%), John Roe (50%)"` into writer shares. The matched
/// percentage is used for both performance and mechanical splits; entries
/// without a percentage get zero splits.
pub fn parse_writers(display: &str) -> Vec<WriterShare> {
    display
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> WriterShare {
    let parsed = WRITER_SHARE_RE.captures(entry).map(|caps| {
        // The pattern only admits ASCII digits, so a parse failure is an overflow.
        let split = caps[2].parse::<u32>().unwrap_or_else(|_| {
            tracing::warn!(entry = entry.trim(), "writer percentage out of range; saturating");
            u32::MAX
        });
        (caps[1].trim().to_string(), split)
    });
    match parsed {
        Some((name, split)) => WriterShare {
            name,
            performance_split: split,
            mechanical_split: split,
        },
        None => WriterShare {
            name: entry.trim().to_string(),
            performance_split: 0,
            mechanical_split: 0,
        },
    }
}
