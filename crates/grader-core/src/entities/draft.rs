use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProblemType;
use crate::errors::CoreError;

/// A test as read from analysis text, before the store assigns an id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TestDraft {
    pub name: String,
}

impl TestDraft {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A well-formed problem as read from analysis text.
///
/// Type, number, and content are guaranteed present; the optional fields are
/// `None` when the source said "none" or left them blank.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProblemDraft {
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    pub number: i64,
    pub content: String,
    pub figure: Option<String>,
    pub options: Option<String>,
    pub correct_answer: Option<String>,
    pub selected_answer: Option<String>,
}

impl ProblemDraft {
    /// A draft with only the required fields set.
    #[must_use]
    pub fn new(problem_type: ProblemType, number: i64, content: impl Into<String>) -> Self {
        Self {
            problem_type,
            number,
            content: content.into(),
            figure: None,
            options: None,
            correct_answer: None,
            selected_answer: None,
        }
    }
}

/// Check that a test and its problems may be persisted.
///
/// Rules, checked in order: the name is non-blank, there is at least one
/// problem, every problem has non-blank content, and no two problems share a
/// number.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the first rule that fails.
pub fn validate_exam(test: &TestDraft, problems: &[ProblemDraft]) -> Result<(), CoreError> {
    if test.name.trim().is_empty() {
        return Err(CoreError::Validation("test name is empty".into()));
    }
    if problems.is_empty() {
        return Err(CoreError::Validation(format!(
            "test '{}' has no problems",
            test.name
        )));
    }
    if let Some(problem) = problems.iter().find(|p| p.content.trim().is_empty()) {
        return Err(CoreError::Validation(format!(
            "problem {} has empty content",
            problem.number
        )));
    }
    let mut seen = HashSet::with_capacity(problems.len());
    for problem in problems {
        if !seen.insert(problem.number) {
            return Err(CoreError::Validation(format!(
                "problem number {} appears more than once",
                problem.number
            )));
        }
    }
    Ok(())
}
