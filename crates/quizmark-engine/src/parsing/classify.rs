//! Question type classification from the raw answer section.

use crate::models::{QType, QuestionRecord};

/// First-refusal hook: an external type-specific parser may claim a block
/// before the built-in classifier runs. `partial` holds the record as
/// assembled so far (name, body, feedback); `answer_text` is the raw
/// answer section. A `Some` return is used unchanged as the parse result.
pub trait TypeHook {
    fn try_classify(
        &self,
        lines: &[String],
        partial: &QuestionRecord,
        answer_text: &str,
    ) -> Option<QuestionRecord>;
}

/// Exact forms accepted as a true/false answer.
const TRUE_FALSE_ANSWERS: [&str; 4] = ["T", "TRUE", "F", "FALSE"];

/// Assign a question type from the raw answer section.
///
/// The rule order encodes disambiguation priority: a tilde can only occur
/// in selectable-answer syntax, so its check runs before the matching
/// check even though match answers also contain `=`.
pub fn classify(answer_text: &str, is_description: bool) -> QType {
    if is_description {
        return QType::Description;
    }
    if answer_text.is_empty() {
        return QType::Essay;
    }
    if answer_text.starts_with('#') {
        return QType::Numerical;
    }
    if answer_text.contains('~') {
        return QType::SelectableAnswer;
    }
    if answer_text.contains('=') && answer_text.contains("->") {
        return QType::Match;
    }

    // True/false or short answer. Strip a trailing `#` comment before
    // comparing; a `#` at position 0 was already taken as numerical.
    let check = match answer_text.find('#') {
        Some(pos) if pos > 0 => answer_text[..pos].trim(),
        _ => answer_text,
    };
    if TRUE_FALSE_ANSWERS.contains(&check) {
        QType::TrueFalse
    } else {
        QType::ShortAnswer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", QType::Essay)]
    #[case("#3.14:0.01", QType::Numerical)]
    #[case("=Paris~Lyon", QType::SelectableAnswer)]
    #[case("=cat -> feline =dog -> canine", QType::Match)]
    #[case("T", QType::TrueFalse)]
    #[case("TRUE", QType::TrueFalse)]
    #[case("F", QType::TrueFalse)]
    #[case("FALSE", QType::TrueFalse)]
    #[case("Paris", QType::ShortAnswer)]
    fn classifies_by_answer_section(#[case] answer: &str, #[case] expected: QType) {
        assert_eq!(classify(answer, false), expected);
    }

    #[test]
    fn description_flag_wins_over_everything() {
        assert_eq!(classify("", true), QType::Description);
    }

    #[test]
    fn tilde_beats_match_markers() {
        // Both `=` and `->` present, but the tilde decides.
        assert_eq!(
            classify("=cat -> feline ~dog -> canine", false),
            QType::SelectableAnswer
        );
    }

    #[test]
    fn true_false_comparison_is_exact_and_case_sensitive() {
        assert_eq!(classify("true", false), QType::ShortAnswer);
        assert_eq!(classify("True", false), QType::ShortAnswer);
        assert_eq!(classify("TRUEISH", false), QType::ShortAnswer);
    }

    #[test]
    fn trailing_comment_is_stripped_for_true_false_check() {
        assert_eq!(classify("T#Well done", false), QType::TrueFalse);
        assert_eq!(classify("FALSE # nope", false), QType::TrueFalse);
    }
}
