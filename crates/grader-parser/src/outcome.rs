//! Parse results: the exam, what was skipped, or why nothing came out.

use grader_core::entities::{ProblemDraft, TestDraft};
use serde::Serialize;

use crate::error::ParseFailure;

/// Something the parser skipped or overrode while reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningKind {
    /// A closed block lacked required fields and was discarded.
    DroppedProblem { missing: Vec<&'static str> },
    /// A `type:` value other than `essay` / `multiple_choices`.
    UnknownType { value: String },
    /// A `number:` value that is not an integer.
    InvalidNumber { value: String },
    /// A later problem reused this number and replaced the earlier one.
    DuplicateNumber { number: i64 },
    /// A problem field appeared before any `type:` line.
    OrphanField { key: &'static str },
}

/// A warning anchored to the 1-based input line it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    pub line: usize,
    #[serde(flatten)]
    pub kind: WarningKind,
}

/// Successfully parsed analysis text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedExam {
    pub test: TestDraft,
    /// Problems in input order.
    pub problems: Vec<ProblemDraft>,
    pub warnings: Vec<ParseWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(ParsedExam),
    Failed(ParseFailure),
}

impl ParseOutcome {
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    /// Convert into a `Result` for `?`-style callers.
    ///
    /// # Errors
    ///
    /// Returns the `ParseFailure` when nothing usable was parsed.
    pub fn into_result(self) -> Result<ParsedExam, ParseFailure> {
        match self {
            Self::Parsed(exam) => Ok(exam),
            Self::Failed(failure) => Err(failure),
        }
    }

    /// The fail-closed pair: an empty test and no problems on failure.
    #[must_use]
    pub fn into_parts(self) -> (TestDraft, Vec<ProblemDraft>) {
        match self {
            Self::Parsed(exam) => (exam.test, exam.problems),
            Self::Failed(_) => (TestDraft::default(), Vec::new()),
        }
    }
}
