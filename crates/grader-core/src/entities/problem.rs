use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProblemType;

/// One question within a stored test.
///
/// Owned by exactly one `Test`; deleting the test cascades to its problems.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Problem {
    pub id: i64,
    pub test_id: i64,
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    pub number: i64,
    pub content: String,
    pub figure: Option<String>,
    pub options: Option<String>,
    pub correct_answer: Option<String>,
    pub selected_answer: Option<String>,
}
