//! Problem repository (read path).

use grader_core::entities::Problem;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_enum};
use crate::service::ExamService;

const PROBLEM_COLUMNS: &str = "problem_id, test_id, type, number, content, figure, options, \
                               correct_answer, selected_answer";

fn row_to_problem(row: &libsql::Row) -> Result<Problem, DatabaseError> {
    Ok(Problem {
        id: row.get::<i64>(0)?,
        test_id: row.get::<i64>(1)?,
        problem_type: parse_enum(&row.get::<String>(2)?)?,
        number: row.get::<i64>(3)?,
        content: row.get::<String>(4)?,
        figure: get_opt_string(row, 5)?,
        options: get_opt_string(row, 6)?,
        correct_answer: get_opt_string(row, 7)?,
        selected_answer: get_opt_string(row, 8)?,
    })
}

impl ExamService {
    /// Problems of one test in ascending `number` order.
    ///
    /// Returns an empty list for unknown tests and for tests without problems.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn list_problems(&self, test_id: i64) -> Result<Vec<Problem>, DatabaseError> {
        let _guard = self.lock().await;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {PROBLEM_COLUMNS} FROM problems WHERE test_id = ?1
                     ORDER BY number ASC, problem_id ASC"
                ),
                [test_id],
            )
            .await?;

        let mut problems = Vec::new();
        while let Some(row) = rows.next().await? {
            problems.push(row_to_problem(&row)?);
        }
        Ok(problems)
    }

    /// Fetch one problem by id. Unknown ids yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn get_problem(&self, problem_id: i64) -> Result<Option<Problem>, DatabaseError> {
        let _guard = self.lock().await;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PROBLEM_COLUMNS} FROM problems WHERE problem_id = ?1"),
                [problem_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => row_to_problem(&row).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use grader_core::entities::{ProblemDraft, TestDraft};
    use grader_core::enums::ProblemType;
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{answered, test_service};

    #[tokio::test]
    async fn list_problems_sorts_by_number() {
        let svc = test_service().await;
        let problems = vec![answered(3, "C", "C"), answered(1, "A", "B"), answered(2, "B", "B")];
        let saved = svc.save(&TestDraft::new("Sorted"), &problems).await.unwrap();

        let numbers: Vec<i64> = svc
            .list_problems(saved.test.id)
            .await
            .unwrap()
            .iter()
            .map(|p| p.number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn list_problems_unknown_test_is_empty() {
        let svc = test_service().await;
        assert!(svc.list_problems(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_problems_only_returns_own_children() {
        let svc = test_service().await;
        let first = svc
            .save(&TestDraft::new("one"), &[answered(1, "A", "A")])
            .await
            .unwrap();
        svc.save(&TestDraft::new("two"), &[answered(1, "B", "B"), answered(2, "C", "D")])
            .await
            .unwrap();

        let problems = svc.list_problems(first.test.id).await.unwrap();
        assert_eq!(problems, first.problems);
    }

    #[tokio::test]
    async fn get_problem_preserves_optional_fields() {
        let svc = test_service().await;
        let draft = ProblemDraft {
            figure: Some("A triangle".into()),
            ..ProblemDraft::new(ProblemType::Essay, 1, "Find the area.")
        };
        let saved = svc.save(&TestDraft::new("Fields"), &[draft]).await.unwrap();

        let problem = svc
            .get_problem(saved.problems[0].id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(problem.problem_type, ProblemType::Essay);
        assert_eq!(problem.figure.as_deref(), Some("A triangle"));
        assert_eq!(problem.options, None);
        assert_eq!(problem.correct_answer, None);
        assert_eq!(problem.selected_answer, None);
    }

    #[tokio::test]
    async fn get_problem_unknown_is_none() {
        let svc = test_service().await;
        assert_eq!(svc.get_problem(99).await.unwrap(), None);
    }
}
