//! Question name handling: sanitizing an explicit `::name::` title and
//! deriving a default name from the body text when none was written.

/// Longest stored question name, in characters.
const MAX_NAME_LEN: usize = 250;
/// Length of a name derived from the question body.
const DEFAULT_NAME_LEN: usize = 80;

/// Used when the body text yields nothing to name the question by.
const FALLBACK_NAME: &str = "Question";

/// Sanitize an extracted question title: control characters dropped,
/// whitespace runs collapsed, length capped.
pub fn clean_question_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.trim().chars() {
        if ch.is_control() {
            continue;
        }
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }
    truncate_chars(&out, MAX_NAME_LEN)
}

/// Derive a name from the question body when no `::name::` was given.
pub fn default_name_from_text(body: &str) -> String {
    let name = truncate_chars(&clean_question_name(body), DEFAULT_NAME_LEN);
    if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
