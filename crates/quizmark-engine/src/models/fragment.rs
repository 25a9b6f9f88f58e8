use serde::{Deserialize, Serialize};

/// Text format of a fragment, settable per-fragment with a `[name]` directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Moodle,
    Html,
    Plain,
    Markdown,
}

impl TextFormat {
    /// Map a directive name to a format. Names are case-sensitive; anything
    /// unrecognized returns `None` so the caller can fall back to its default.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "moodle" => Some(TextFormat::Moodle),
            "html" => Some(TextFormat::Html),
            "plain" => Some(TextFormat::Plain),
            "markdown" => Some(TextFormat::Markdown),
            _ => None,
        }
    }
}

/// How answers of a selectable-answer question are chosen for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectMode {
    /// Use all authored answers.
    #[default]
    Default,
    /// Author states how many correct/incorrect answers to exclude.
    Manual,
    /// Automatic random selection.
    Auto,
}

impl SelectMode {
    /// Map a directive name to a mode; unrecognized names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(SelectMode::Default),
            "manual" => Some(SelectMode::Manual),
            "auto" => Some(SelectMode::Auto),
            _ => None,
        }
    }
}

/// A piece of author text with its resolved format.
///
/// The select mode is not carried here: it is only meaningful on the
/// question body, so it lives on [`QuestionRecord`](super::QuestionRecord)
/// instead of being dragged through every answer and feedback fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: String,
    pub format: TextFormat,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, format: TextFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    /// An empty fragment in the given format, used for absent feedback.
    pub fn empty(format: TextFormat) -> Self {
        Self::new("", format)
    }
}
