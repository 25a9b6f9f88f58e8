mod fragment;
mod question;

pub use fragment::{SelectMode, TextFormat, TextFragment};
pub use question::{
    AnswerNumbering, AnswerToken, AnswerWeight, ManualSelection, QType, QuestionRecord,
};
