//! Tokenizes the answer section of a selectable-answer question into
//! weighted alternatives with per-alternative feedback.

use std::sync::OnceLock;

use regex::Regex;

use super::{ParseError, directive};
use crate::models::{AnswerToken, AnswerWeight, TextFormat, TextFragment};

/// Parsed answer list plus the token population counts manual selection
/// arithmetic needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAnswers {
    /// False when no `=`-marked alternative exists.
    pub single_answer: bool,
    pub answers: Vec<AnswerToken>,
    pub correct_total: u32,
    pub incorrect_total: u32,
}

/// Weight pattern at the front of a `%`-prefixed token: one or two digits,
/// an optional dot and optional fraction digits, so `%100%` parses as `10`
/// plus fraction `0`. Negative weights never match and fall to the
/// malformed-token branch.
fn weight_regex() -> &'static Regex {
    static WEIGHT: OnceLock<Regex> = OnceLock::new();
    WEIGHT.get_or_init(|| {
        Regex::new(r"^%([0-9]{1,2})\.?([0-9]*)%").expect("invalid answer weight regex")
    })
}

/// Parse the raw answer section of a selectable-answer question.
///
/// `format` is the question's resolved text format, inherited by every
/// alternative and feedback fragment. `context` is the full question text,
/// attached to the error when fewer than two alternatives exist.
pub fn parse_answers(
    answer_text: &str,
    format: TextFormat,
    context: &str,
) -> Result<ParsedAnswers, ParseError> {
    // No 100%-correct `=` marker means several answers may be correct at once.
    let single_answer = answer_text.contains('=');

    // Uniform delimiting: prefix every `=` with `~` so both correct and
    // weighted/wrong alternatives split on the same marker.
    let normalized = answer_text.replace('=', "~=");
    let mut tokens: Vec<&str> = normalized.split('~').collect();
    if tokens.first().is_some_and(|first| first.trim().is_empty()) {
        tokens.remove(0);
    }

    if tokens.len() < 2 {
        return Err(ParseError::TooFewAnswers {
            text: context.to_string(),
        });
    }

    let mut answers = Vec::with_capacity(tokens.len());
    let mut correct_total = 0;
    let mut incorrect_total = 0;
    for token in tokens {
        let token = token.trim();
        let (weight, rest) = split_weight(token);
        match weight {
            AnswerWeight::Correct => correct_total += 1,
            AnswerWeight::Incorrect => incorrect_total += 1,
        }

        let (text, feedback) = split_feedback(rest, format);
        answers.push(AnswerToken {
            weight,
            text,
            feedback,
        });
    }

    Ok(ParsedAnswers {
        single_answer,
        answers,
        correct_total,
        incorrect_total,
    })
}

/// Resolve the weight marker at the front of one token and strip it.
fn split_weight(token: &str) -> (AnswerWeight, &str) {
    if let Some(rest) = token.strip_prefix('=') {
        return (AnswerWeight::Correct, rest);
    }
    if !token.starts_with('%') {
        // A bare `~`-prefixed alternative is wrong.
        return (AnswerWeight::Incorrect, token);
    }
    if let Some(matched) = weight_regex().find(token) {
        // Any well-formed weight marks the token correct; the magnitude
        // is consumed but not retained.
        return (AnswerWeight::Correct, &token[matched.end()..]);
    }
    // Malformed weight: wrong answer, and strip one `%...%`-shaped span.
    // With no second `%` only the leading one goes.
    match token[1..].find('%') {
        Some(pos) => (AnswerWeight::Incorrect, &token[pos + 2..]),
        None => (AnswerWeight::Incorrect, &token[1..]),
    }
}

/// Split one alternative on its first `#` into text and feedback.
fn split_feedback(token: &str, format: TextFormat) -> (TextFragment, TextFragment) {
    match token.split_once('#') {
        Some((text, feedback)) => (
            directive::parse_fragment(text.trim(), format),
            directive::parse_fragment(feedback.trim(), format),
        ),
        None => (
            directive::parse_fragment(token.trim(), format),
            TextFragment::empty(format),
        ),
    }
}
