//! Import session: splits a whole file into blocks, parses them in order
//! and threads the current `$CATEGORY:` across subsequent questions.

use crate::models::{QType, QuestionRecord};
use crate::parsing::{ParseError, ParseOptions, parse_block};

/// One question block: its raw lines and the 1-based line number the
/// block starts on, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub first_line: usize,
    pub lines: Vec<String>,
}

/// Split file text into question blocks on blank-line boundaries.
pub fn split_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut first_line = 0;

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(Block {
                    first_line,
                    lines: std::mem::take(&mut current),
                });
            }
        } else {
            if current.is_empty() {
                first_line = idx + 1;
            }
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        blocks.push(Block {
            first_line,
            lines: current,
        });
    }
    blocks
}

/// A block that failed to parse, by starting line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockError {
    pub line: usize,
    pub error: ParseError,
}

/// Everything an import run produced. Category pseudo-records stay in
/// `records` in order, so downstream storage can create categories as it
/// reaches them.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub records: Vec<QuestionRecord>,
    pub errors: Vec<BlockError>,
}

/// Ordered import over many blocks with shared options.
///
/// Blocks parse independently, but the category directive is stateful at
/// session level: each non-category record is stamped with the most recent
/// `$CATEGORY:` seen. Fatal block errors are collected; they never stop
/// the rest of the run.
pub struct ImportSession<'a> {
    options: ParseOptions<'a>,
    current_category: Option<String>,
}

impl<'a> ImportSession<'a> {
    pub fn new(options: ParseOptions<'a>) -> Self {
        Self {
            options,
            current_category: None,
        }
    }

    /// Parse a whole file's text.
    pub fn run(&mut self, text: &str) -> ImportOutcome {
        let mut outcome = ImportOutcome::default();
        for block in split_blocks(text) {
            match parse_block(&block.lines, &self.options) {
                Ok(record) => {
                    if record.qtype == QType::Category {
                        self.current_category = record.category.clone();
                        outcome.records.push(record);
                    } else {
                        let mut record = record;
                        record.category = self.current_category.clone();
                        outcome.records.push(record);
                    }
                }
                // Comment-only or blank blocks are skipped quietly.
                Err(ParseError::EmptyBlock) => {}
                Err(error) => outcome.errors.push(BlockError {
                    line: block.first_line,
                    error,
                }),
            }
        }
        outcome
    }
}
