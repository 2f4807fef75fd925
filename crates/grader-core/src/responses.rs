//! Response types returned by the store and rendered by `grader` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ChatMessage, Problem, Test};
use crate::grading::{Graded, Score};

/// A test and its problems as they were committed by one save.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SavedExam {
    pub test: Test,
    pub problems: Vec<Problem>,
}

/// One problem with its grading verdict, for review listings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewedProblem {
    #[serde(flatten)]
    pub problem: Problem,
    pub correct: bool,
}

/// Response from `grader review`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewResponse {
    pub test: Test,
    pub score: Score,
    pub problems: Vec<ReviewedProblem>,
}

impl ReviewResponse {
    /// Grade stored problems for display. The score is recomputed from the
    /// rows so it always agrees with the per-problem flags.
    #[must_use]
    pub fn new(test: Test, problems: Vec<Problem>) -> Self {
        let score = Score::tally(&problems);
        let problems = problems
            .into_iter()
            .map(|problem| ReviewedProblem {
                correct: problem.is_correct(),
                problem,
            })
            .collect();
        Self {
            test,
            score,
            problems,
        }
    }
}

/// Response from `grader tutor`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TutorResponse {
    pub problem_id: i64,
    pub messages: Vec<ChatMessage>,
    pub reply: String,
}
