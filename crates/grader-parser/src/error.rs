//! Parse failure reasons for grader-parser.

/// Why a block of analysis text produced nothing worth saving.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    #[error("analysis text is empty")]
    EmptyInput,

    #[error("no well-formed problems found ({dropped} malformed block(s) dropped)")]
    NoProblems { dropped: usize },
}
