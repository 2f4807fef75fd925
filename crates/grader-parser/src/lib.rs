//! # grader-parser
//!
//! Turns the free-form analysis text returned by the grading service into a
//! [`TestDraft`](grader_core::entities::TestDraft) and an ordered list of
//! [`ProblemDraft`](grader_core::entities::ProblemDraft)s.
//!
//! The input is line-oriented `key: value` text. A `type:` line starts a new
//! problem block; every other known key fills in the block that is currently
//! open. Parsing is a single forward pass and never fails loudly: the caller
//! gets either [`ParseOutcome::Parsed`] (with any warnings about dropped
//! blocks) or [`ParseOutcome::Failed`] with a typed reason.
//!
//! ```
//! use grader_parser::parse;
//!
//! let text = "#test_name: Math Quiz\n#type: essay\n#number: 1\n#content: Prove it.";
//! let exam = parse(text).into_result().expect("well-formed text");
//! assert_eq!(exam.test.name, "Math Quiz");
//! assert_eq!(exam.problems.len(), 1);
//! ```

mod accumulator;
mod document;
pub mod error;
mod line;
mod outcome;

pub use accumulator::{Accumulator, Malformed, NumberSlot, PartialProblem};
pub use document::parse;
pub use error::ParseFailure;
pub use line::{NONE_SENTINELS, is_none_sentinel};
pub use outcome::{ParseOutcome, ParseWarning, ParsedExam, WarningKind};
