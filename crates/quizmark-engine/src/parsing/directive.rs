//! Bracketed author directives: `[format]` on any fragment, `[mode]` and
//! manual selection counts on the question body.

use std::sync::OnceLock;

use regex::Regex;

use super::escape::escape_post;
use crate::models::{SelectMode, TextFormat, TextFragment};

/// Bracket delimiters for all directives.
pub const OPEN: char = '[';
pub const CLOSE: char = ']';

/// Resolve a leading `[format]` directive and finish the fragment: the
/// remaining text is unescaped and trimmed.
///
/// A recognized name strips its bracket; an unrecognized one (or a `[`
/// with no closing `]`) leaves the text untouched and keeps the supplied
/// default, so author text like `[sic]` survives as literal text.
pub fn parse_fragment(text: &str, default_format: TextFormat) -> TextFragment {
    let (format, rest) = match leading_directive(text) {
        Some((name, rest)) => match TextFormat::from_name(name) {
            Some(format) => (format, rest),
            None => (default_format, text),
        },
        None => (default_format, text),
    };
    TextFragment::new(escape_post(rest).trim(), format)
}

/// A parsed `[mode]` directive with any manual counts that followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDirective {
    pub mode: SelectMode,
    /// Requested correct/incorrect counts, present only with `[manual]`.
    pub requested: Option<(u32, u32)>,
}

/// Strip a leading `[mode]` directive from `text`, if one is present.
///
/// With `[manual]`, the directive is only meaningful when a `C,I` count
/// pair follows it; a manual tag without counts is demoted to the default
/// mode (the counts are what manual selection consumes).
pub fn take_mode(text: &mut String) -> Option<ModeDirective> {
    let (name, rest) = leading_directive(text)?;
    let mode = SelectMode::from_name(name)?;
    let mut rest = rest.to_string();

    if mode == SelectMode::Manual {
        match take_manual_counts(&mut rest) {
            Some(requested) => {
                *text = rest;
                Some(ModeDirective {
                    mode,
                    requested: Some(requested),
                })
            }
            None => {
                *text = rest;
                Some(ModeDirective {
                    mode: SelectMode::Default,
                    requested: None,
                })
            }
        }
    } else {
        *text = rest;
        Some(ModeDirective {
            mode,
            requested: None,
        })
    }
}

/// Split a leading `[name]` bracket off `text`. Returns the inner name and
/// the remainder, or `None` when the text does not open with a directive.
fn leading_directive(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix(OPEN)?;
    let close = inner.find(CLOSE)?;
    Some((&inner[..close], &inner[close + CLOSE.len_utf8()..]))
}

/// Strip a `C,I` integer pair (optionally bracketed) from the front of
/// `text`, returning the requested correct/incorrect counts.
fn take_manual_counts(text: &mut String) -> Option<(u32, u32)> {
    static COUNTS: OnceLock<Regex> = OnceLock::new();
    let counts = COUNTS.get_or_init(|| {
        Regex::new(r"^\s*\[?(\d+)\s*,\s*(\d+)\]?").expect("invalid manual counts regex")
    });

    let caps = counts.captures(text)?;
    let correct = caps[1].parse().ok()?;
    let incorrect = caps[2].parse().ok()?;
    let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
    *text = text[end..].to_string();
    Some((correct, incorrect))
}
