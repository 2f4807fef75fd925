//! Two-state problem accumulator.
//!
//! ```text
//! NoActiveRecord --open--> BuildingRecord(partial)
//! BuildingRecord --open--> BuildingRecord(fresh)   (previous block closed)
//! BuildingRecord --close-> NoActiveRecord          (block validated)
//! ```
//!
//! Closing a block validates it: a block becomes a `ProblemDraft` only when
//! type, number, and content are all present.

use grader_core::entities::ProblemDraft;
use grader_core::enums::ProblemType;

/// State of the `number` field inside an open block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NumberSlot {
    #[default]
    Unset,
    /// The value could not be converted; the block will be dropped.
    NotANumber(String),
    Value(i64),
}

impl NumberSlot {
    /// Convert a trimmed value. Integral decimals such as `3.0` are accepted.
    /// Anything beyond a sign, ASCII digits and a decimal point (such as `1e2`) is rejected.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if let Ok(n) = value.parse::<i64>() {
            return Self::Value(n);
        }
        let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
        if !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Self::NotANumber(value.to_string());
        }
        match value.parse::<f64>() {
            #[allow(clippy::cast_possible_truncation)]
            Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= 9.0e15 => {
                Self::Value(f as i64)
            }
            _ => Self::NotANumber(value.to_string()),
        }
    }
}

/// Fields collected for the block currently being built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialProblem {
    /// 1-based line of the `type:` line that opened this block.
    pub line: usize,
    pub problem_type: Option<ProblemType>,
    pub number: NumberSlot,
    pub content: Option<String>,
    pub figure: Option<String>,
    pub options: Option<String>,
    pub correct_answer: Option<String>,
    pub selected_answer: Option<String>,
}

/// A closed block that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Malformed {
    pub line: usize,
    pub missing: Vec<&'static str>,
}

impl PartialProblem {
    #[must_use]
    pub fn opened(line: usize, problem_type: Option<ProblemType>) -> Self {
        Self {
            line,
            problem_type,
            ..Self::default()
        }
    }

    /// Validate and convert into a draft.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` listing every required field that is missing.
    pub fn finish(self) -> Result<ProblemDraft, Malformed> {
        let number = match self.number {
            NumberSlot::Value(n) => Some(n),
            NumberSlot::Unset | NumberSlot::NotANumber(_) => None,
        };
        let content = self.content.filter(|c| !c.trim().is_empty());

        match (self.problem_type, number, content) {
            (Some(problem_type), Some(number), Some(content)) => Ok(ProblemDraft {
                problem_type,
                number,
                content,
                figure: self.figure,
                options: self.options,
                correct_answer: self.correct_answer,
                selected_answer: self.selected_answer,
            }),
            (problem_type, number, content) => {
                let mut missing = Vec::new();
                if problem_type.is_none() {
                    missing.push("type");
                }
                if number.is_none() {
                    missing.push("number");
                }
                if content.is_none() {
                    missing.push("content");
                }
                Err(Malformed {
                    line: self.line,
                    missing,
                })
            }
        }
    }
}

/// Result of closing a block, if one was open.
pub type Closed = Option<Result<ProblemDraft, Malformed>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Accumulator {
    #[default]
    NoActiveRecord,
    BuildingRecord(PartialProblem),
}

impl Accumulator {
    /// Close any open block and start a new one.
    pub fn open(&mut self, line: usize, problem_type: Option<ProblemType>) -> Closed {
        let closed = self.close();
        *self = Self::BuildingRecord(PartialProblem::opened(line, problem_type));
        closed
    }

    /// Close the open block, leaving `NoActiveRecord` behind.
    pub fn close(&mut self) -> Closed {
        match std::mem::take(self) {
            Self::NoActiveRecord => None,
            Self::BuildingRecord(partial) => Some(partial.finish()),
        }
    }

    /// The block fields arrive into, if any.
    pub const fn current_mut(&mut self) -> Option<&mut PartialProblem> {
        match self {
            Self::NoActiveRecord => None,
            Self::BuildingRecord(partial) => Some(partial),
        }
    }

    /// Line of the `type:` that opened the current block.
    #[must_use]
    pub const fn current_line(&self) -> Option<usize> {
        match self {
            Self::NoActiveRecord => None,
            Self::BuildingRecord(partial) => Some(partial.line),
        }
    }

    #[must_use]
    pub const fn is_building(&self) -> bool {
        matches!(self, Self::BuildingRecord(_))
    }
}
