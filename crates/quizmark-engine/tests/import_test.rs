//! End-to-end coverage of the observable import contract: whole blocks
//! go in, question records or block errors come out.

use pretty_assertions::assert_eq;
use quizmark_engine::{
    AnswerWeight, ImportSession, ManualSelection, ParseError, ParseOptions, QType, SelectMode,
    TextFormat, parse_block,
};

#[test]
fn capital_of_france() {
    let record = parse_block(
        &[
            "::Capital::",
            "The capital of France is {=Paris#Correct!~Lyon#Wrong}.",
            "// [id:geo1]",
            "// [tag:geography]",
        ],
        &ParseOptions::default(),
    )
    .unwrap();

    assert_eq!(record.name.as_deref(), Some("Capital"));
    assert_eq!(record.qtype, QType::SelectableAnswer);
    assert_eq!(record.id_number, "geo1");
    assert_eq!(record.tags, ["geography"]);

    let answers: Vec<(&str, AnswerWeight)> = record
        .answers
        .iter()
        .map(|a| (a.text.text.as_str(), a.weight))
        .collect();
    assert_eq!(
        answers,
        [
            ("Paris", AnswerWeight::Correct),
            ("Lyon", AnswerWeight::Incorrect),
        ]
    );
}

#[test]
fn selectable_answer_lengths_stay_aligned() {
    let record = parse_block(
        &["Pick all primes. {~2#yes~4#no~5~=never}"],
        &ParseOptions::default(),
    )
    .unwrap();
    // One token owns its text, feedback and weight, so the three views
    // share one index space.
    let n = record.answers.len();
    assert_eq!(record.answers.iter().filter(|a| !a.text.text.is_empty()).count(), n);
    if record.single_answer {
        assert!(
            record
                .answers
                .iter()
                .any(|a| a.weight == AnswerWeight::Correct)
        );
    }
}

#[test]
fn manual_selection_arithmetic() {
    // 5 alternatives: 2 correct, 3 incorrect. Requesting 1 correct and
    // 2 incorrect leaves 1 and 1.
    let record = parse_block(
        &["[manual]1,2 Which are fish? {=cod=eel~cow~hen~pig}"],
        &ParseOptions::default(),
    )
    .unwrap();
    assert_eq!(record.select_mode, SelectMode::Manual);
    assert_eq!(
        record.manual_selection,
        Some(ManualSelection {
            correct: 1,
            incorrect: 1
        })
    );
}

#[test]
fn unbalanced_brace_is_fatal_for_the_block() {
    let err = parse_block(
        &["Question with { no closing brace"],
        &ParseOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::UnbalancedBraces { .. }));
    assert_eq!(err.key(), "braceerror");
    assert!(err.text().unwrap().contains("no closing brace"));
}

#[test]
fn description_block_is_untouched() {
    let record = parse_block(
        &["Read the next three questions carefully."],
        &ParseOptions::default(),
    )
    .unwrap();
    assert_eq!(record.qtype, QType::Description);
    assert_eq!(
        record.question.text,
        "Read the next three questions carefully."
    );
}

#[test]
fn html_directive_block() {
    let record = parse_block(&["[html]<b>Bold</b> {=a~b}"], &ParseOptions::default()).unwrap();
    assert_eq!(record.question.format, TextFormat::Html);
    assert_eq!(record.question.text, "<b>Bold</b>");
}

#[test]
fn classifier_precedence_over_a_whole_file() {
    let text = "\
$CATEGORY: zoo

A cat is a mammal. {T}

Match them. {=cat -> feline =dog -> canine}

Pick one. {=cat -> feline ~dog -> canine}

Write an essay about cats. {}
";
    let mut session = ImportSession::new(ParseOptions::default());
    let outcome = session.run(text);
    assert!(outcome.errors.is_empty());

    let qtypes: Vec<QType> = outcome.records.iter().map(|r| r.qtype).collect();
    assert_eq!(
        qtypes,
        [
            QType::Category,
            QType::TrueFalse,
            QType::Match,
            QType::SelectableAnswer,
            QType::Essay,
        ]
    );
    // Everything after the directive belongs to its category.
    assert!(
        outcome.records[1..]
            .iter()
            .all(|r| r.category.as_deref() == Some("zoo"))
    );
}

#[test]
fn escaped_markers_survive_an_import() {
    let record = parse_block(
        &["What does \\{x\\} mean? {=a set#right\\: well done~a brace}"],
        &ParseOptions::default(),
    )
    .unwrap();
    assert_eq!(record.question.text, "What does {x} mean?");
    assert_eq!(record.answers[0].feedback.text, "right: well done");
}
