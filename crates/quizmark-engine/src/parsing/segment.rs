//! Splits one raw question block into its sections: comment lines, an
//! optional `::name::`, the question body, the `{...}` answer section and
//! `####`-separated general feedback.

use super::escape::escape_pre;
use super::{CATEGORY_PREFIX, FEEDBACK_SEPARATOR, NAME_DELIMITER, ParseError};

/// Sections of a non-category block. All text is still in escaped
/// (placeholder) form; directive parsing runs `escape_post` later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmented {
    /// The `//` lines, concatenated with trailing newlines, unescaped.
    pub comments: String,
    /// Name between `::` delimiters, if a closing delimiter was found.
    pub name: Option<String>,
    /// Question text with the answer span removed or blanked.
    pub body: String,
    /// Text strictly between `{` and `}`, trimmed, feedback stripped.
    pub answer_text: String,
    /// Text after the last `####` in the answer section.
    pub general_feedback: String,
    /// True when the block had no answer section at all.
    pub is_description: bool,
}

/// A segmented block: either a bare category directive or question sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentOutcome {
    Category(String),
    Question(Segmented),
}

/// Placeholder inserted where a mid-sentence answer span was removed,
/// rendering the question as fill-in-the-blank.
const BLANK: &str = "_____";

pub fn segment<S: AsRef<str>>(lines: &[S]) -> Result<SegmentOutcome, ParseError> {
    // Pull comment lines out first; they are scanned for metadata in raw
    // (unescaped) form. Blanked in place so line joins stay stable.
    let mut comments = String::new();
    let mut rest: Vec<&str> = Vec::with_capacity(lines.len());
    for line in lines {
        let trimmed = line.as_ref().trim();
        if trimmed.starts_with("//") {
            comments.push_str(trimmed);
            comments.push('\n');
            rest.push(" ");
        } else {
            rest.push(line.as_ref());
        }
    }

    let text = rest.join("\n").trim().to_string();
    if text.is_empty() {
        return Err(ParseError::EmptyBlock);
    }

    let text = escape_pre(&text);

    if let Some(category) = text.strip_prefix(CATEGORY_PREFIX) {
        return Ok(SegmentOutcome::Category(category.trim().to_string()));
    }

    // Question name. Only the opening `::` is consumed when no closing
    // delimiter exists; the name is then derived from the body later.
    let mut name = None;
    let mut text = text;
    if let Some(after) = text.strip_prefix(NAME_DELIMITER) {
        match after.find(NAME_DELIMITER) {
            Some(end) => {
                name = Some(after[..end].to_string());
                text = after[end + NAME_DELIMITER.len()..].trim().to_string();
            }
            None => {
                text = after.to_string();
            }
        }
    }

    // Answer section between the first `{` and the first `}`.
    let open = text.find('{');
    let close = text.find('}');
    let (answer_text, is_description, body) = match (open, close) {
        (None, None) => (String::new(), true, text),
        (Some(open), Some(close)) if open < close => {
            let answer = text[open + 1..close].trim().to_string();
            let body = if text.ends_with('}') {
                // Answers trail the question; drop the span outright.
                format!("{}{}", &text[..open], &text[close + 1..])
            } else {
                // Mid-sentence answers become a fill-in blank.
                format!("{}{}{}", &text[..open], BLANK, &text[close + 1..])
            };
            (answer, false, body.trim().to_string())
        }
        _ => return Err(ParseError::UnbalancedBraces { text }),
    };

    // General feedback sits after the last `####` in the answer section.
    let (answer_text, general_feedback) = match answer_text.rfind(FEEDBACK_SEPARATOR) {
        Some(sep) => (
            answer_text[..sep].trim().to_string(),
            answer_text[sep + FEEDBACK_SEPARATOR.len()..].trim().to_string(),
        ),
        None => (answer_text, String::new()),
    };

    Ok(SegmentOutcome::Question(Segmented {
        comments,
        name,
        body,
        answer_text,
        general_feedback,
        is_description,
    }))
}
