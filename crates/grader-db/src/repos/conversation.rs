//! Tutoring seeds built from stored problems.

use grader_core::entities::ChatMessage;
use grader_core::tutor;

use crate::error::DatabaseError;
use crate::service::ExamService;

impl ExamService {
    /// Build the opening conversation for a stored problem.
    ///
    /// The first message is always the rendered system prompt. A non-blank
    /// `first_question` is appended as a user turn. Unknown problems yield
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the problem cannot be read.
    pub async fn seed_conversation(
        &self,
        problem_id: i64,
        first_question: Option<&str>,
    ) -> Result<Option<Vec<ChatMessage>>, DatabaseError> {
        let Some(problem) = self.get_problem(problem_id).await? else {
            tracing::debug!(problem_id, "no problem to seed a conversation from");
            return Ok(None);
        };
        Ok(Some(tutor::seed_conversation(&problem, first_question)))
    }
}
