//! Message splitting and meta-block parsing.
//!
//! A message looks like:
//!
//! ```text
//! My Title
//! ===
//! +travel #japan #food @alice &note /notes/_posts
//! ===
//! Body text...
//! ```
//!
//! Delimiters are lines made only of `=` characters.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PostError, PostResult};

/// Meta symbol for categories.
pub const CATEGORY: &str = "+";
/// Meta symbol for tags.
pub const TAG: &str = "#";
/// Meta symbol for authors.
pub const AUTHOR: &str = "@";
/// Meta symbol for the front-matter layout.
pub const LAYOUT: &str = "&";
/// Meta symbol for an explicit destination folder.
pub const FOLDER: &str = "/";

const BASE_CHARS: &str = "-a-zA-Z0-9_";

fn delimiter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n=+\n").expect("delimiter regex is valid"))
}

/// The three sections of a message, each trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageParts {
    pub title: String,
    pub meta: String,
    pub body: String,
}

/// Split a message into title, meta block and body.
pub fn split_message(message: &str) -> PostResult<MessageParts> {
    let parts: Vec<&str> = delimiter().splitn(message, 3).collect();
    match parts.as_slice() {
        [title, meta, body] => Ok(MessageParts {
            title: title.trim().to_string(),
            meta: meta.trim().to_string(),
            body: body.trim().to_string(),
        }),
        _ => Err(PostError::InvalidFormat),
    }
}

/// Collect every value introduced by `symbol` in the meta block.
///
/// Values are runs of `[-a-zA-Z0-9_]` plus `extra_chars`. The result is
/// deduplicated and sorted.
pub fn parse_meta(meta_block: &str, symbol: &str, extra_chars: &str) -> Vec<String> {
    let pattern = format!(
        "{}([{}{}]+)",
        regex::escape(symbol),
        BASE_CHARS,
        regex::escape(extra_chars)
    );
    let Ok(re) = Regex::new(&pattern) else {
        tracing::warn!(%pattern, "Invalid meta pattern");
        return Vec::new();
    };

    re.captures_iter(meta_block)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
