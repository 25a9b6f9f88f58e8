//! Scans a block's comment lines for `[id:...]` and `[tag:...]` tokens.

use std::sync::OnceLock;

use regex::Regex;

/// First `[id:...]` token; the capture takes non-control characters with
/// `]` escapable as `\]`. There should be at most one, but with several the
/// first wins.
fn id_regex() -> &'static Regex {
    static ID: OnceLock<Regex> = OnceLock::new();
    ID.get_or_init(|| {
        Regex::new(r"\[id:((?:\\\]|[^\]\x00-\x1F\x7F])+)\]").expect("invalid id regex")
    })
}

/// Every `[tag:...]` token; the capture excludes control characters, `<`,
/// `>` and unescaped `]`.
fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| {
        Regex::new(r"\[tag:((?:\\\]|[^\]<>\x00-\x1F\x7F])+)\]").expect("invalid tag regex")
    })
}

/// Extract the id and tags declared in the comment block (the raw `//`
/// lines, concatenated with trailing newlines). Absent id yields `""`;
/// tags come back in order with duplicates preserved.
pub fn extract_id_and_tags(comments: &str) -> (String, Vec<String>) {
    let id = id_regex()
        .captures(comments)
        .map(|caps| unescape(caps[1].trim()))
        .unwrap_or_default();

    let tags = tag_regex()
        .captures_iter(comments)
        .map(|caps| unescape(caps[1].trim()))
        .collect();

    (id, tags)
}

fn unescape(s: &str) -> String {
    s.replace("\\]", "]")
}
