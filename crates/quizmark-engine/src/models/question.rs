use serde::{Deserialize, Serialize};

use super::{SelectMode, TextFragment};

/// The question categories the classifier can produce.
///
/// Only `SelectableAnswer` carries a parsed answer list; the other
/// categories keep their raw answer section in
/// [`QuestionRecord::answer_text`] for an external per-type parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QType {
    /// Pseudo-question carrying a `$CATEGORY:` directive.
    Category,
    Description,
    Essay,
    Numerical,
    SelectableAnswer,
    Match,
    TrueFalse,
    ShortAnswer,
}

/// Binary weight of one answer alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerWeight {
    Correct,
    Incorrect,
}

/// One `~`/`=`-delimited alternative of a selectable-answer question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerToken {
    pub weight: AnswerWeight,
    pub text: TextFragment,
    pub feedback: TextFragment,
}

/// Remaining answer counts after manual selection.
///
/// The author's `[manual]C,I` directive states how many alternatives of
/// each kind to consume from the authored set; these are the counts left
/// over once the full token population is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualSelection {
    pub correct: i32,
    pub incorrect: i32,
}

/// Display numbering style for answer alternatives, read from
/// configuration rather than from the authoring syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerNumbering {
    #[default]
    #[serde(rename = "abc")]
    LowerAlpha,
    #[serde(rename = "ABCD")]
    UpperAlpha,
    #[serde(rename = "123")]
    Numeric,
    #[serde(rename = "iii")]
    LowerRoman,
    #[serde(rename = "IIII")]
    UpperRoman,
    #[serde(rename = "none")]
    None,
}

/// Fully parsed question block, built in one pass and then immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Explicit `::name::` if given, otherwise derived from the body text.
    /// `None` only on `Category` records.
    pub name: Option<String>,
    pub qtype: QType,
    pub question: TextFragment,
    pub general_feedback: TextFragment,
    /// For `Category` records, the category the directive names; for all
    /// other records, the current category the import session stamped on.
    pub category: Option<String>,
    /// Raw answer section, kept for the external parsers that handle the
    /// non-selectable categories. Empty for descriptions and essays.
    pub answer_text: String,
    /// Parsed alternatives; non-empty only for `SelectableAnswer`.
    pub answers: Vec<AnswerToken>,
    /// False when no `=`-marked alternative exists, which permits several
    /// simultaneously correct answers.
    pub single_answer: bool,
    pub select_mode: SelectMode,
    pub manual_selection: Option<ManualSelection>,
    /// Numbering style for displayed alternatives; set for
    /// `SelectableAnswer` records from the injected configuration.
    pub numbering: Option<AnswerNumbering>,
    /// Id declared in the comment lines, empty when absent.
    pub id_number: String,
    /// Tags declared in the comment lines, in order, duplicates kept.
    pub tags: Vec<String>,
}

impl QuestionRecord {
    /// A record holding only a category directive.
    pub fn category(name: impl Into<String>) -> Self {
        Self {
            name: None,
            qtype: QType::Category,
            question: TextFragment::empty(Default::default()),
            general_feedback: TextFragment::empty(Default::default()),
            category: Some(name.into()),
            answer_text: String::new(),
            answers: Vec::new(),
            single_answer: true,
            select_mode: SelectMode::Default,
            manual_selection: None,
            numbering: None,
            id_number: String::new(),
            tags: Vec::new(),
        }
    }
}
