//! Core engine for quizmark: parses blocks of the GIFT authoring syntax,
//! extended with answers-select directives, into structured question
//! records ready for downstream storage.

pub mod io;
pub mod models;
pub mod name;
pub mod parsing;
pub mod session;

// Re-export key types for easier usage
pub use models::{
    AnswerNumbering, AnswerToken, AnswerWeight, ManualSelection, QType, QuestionRecord,
    SelectMode, TextFormat, TextFragment,
};
pub use parsing::{ParseError, ParseOptions, TypeHook, parse_block};
pub use session::{ImportOutcome, ImportSession, split_blocks};
