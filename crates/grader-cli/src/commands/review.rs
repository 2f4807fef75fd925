use grader_core::errors::CoreError;
use grader_core::responses::ReviewResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReviewArgs;
use crate::context::AppContext;
use crate::output::{Tabular, opt_cell, output_tabular};

impl Tabular for ReviewResponse {
    fn caption(&self) -> Option<String> {
        Some(format!(
            "{} (test {}): {}/{} correct",
            self.test.name, self.test.id, self.score.correct, self.score.total
        ))
    }

    fn headers(&self) -> Vec<&'static str> {
        vec!["id", "number", "content", "correct_answer", "selected_answer", "correct"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.problems
            .iter()
            .map(|reviewed| {
                let p = &reviewed.problem;
                vec![
                    p.id.to_string(),
                    p.number.to_string(),
                    opt_cell(Some(p.content.as_str())),
                    opt_cell(p.correct_answer.as_deref()),
                    opt_cell(p.selected_answer.as_deref()),
                    reviewed.correct.to_string(),
                ]
            })
            .collect()
    }
}

/// Handle `grader review`.
pub async fn handle(args: &ReviewArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = build(args, ctx).await?;
    output_tabular(&response, flags.format)
}

async fn build(args: &ReviewArgs, ctx: &AppContext) -> anyhow::Result<ReviewResponse> {
    let test = ctx
        .service
        .get_test(args.test_id)
        .await?
        .ok_or_else(|| CoreError::not_found("test", args.test_id))?;
    let problems = ctx.service.list_problems(args.test_id).await?;

    let mut response = ReviewResponse::new(test, problems);
    if args.wrong {
        // The score still covers the whole test.
        response.problems.retain(|reviewed| !reviewed.correct);
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use grader_core::entities::{ProblemDraft, TestDraft};
    use grader_core::enums::ProblemType;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::test_support::memory_context;

    fn answered(number: i64, correct: &str, selected: &str) -> ProblemDraft {
        ProblemDraft {
            correct_answer: Some(correct.into()),
            selected_answer: Some(selected.into()),
            ..ProblemDraft::new(ProblemType::MultipleChoices, number, format!("Q{number}"))
        }
    }

    async fn seeded() -> (AppContext, i64) {
        let ctx = memory_context().await;
        let saved = ctx
            .service
            .save(
                &TestDraft::new("Review me"),
                &[answered(2, "B", "C"), answered(1, "A", "A"), answered(3, "D", "D")],
            )
            .await
            .unwrap();
        (ctx, saved.test.id)
    }

    #[tokio::test]
    async fn review_lists_problems_by_number_with_score() {
        let (ctx, test_id) = seeded().await;
        let response = build(&ReviewArgs { test_id, wrong: false }, &ctx).await.unwrap();

        let numbers: Vec<i64> = response.problems.iter().map(|r| r.problem.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!((response.score.correct, response.score.total), (2, 3));
        assert_eq!(
            response.caption().as_deref(),
            Some(format!("Review me (test {test_id}): 2/3 correct").as_str())
        );
    }

    #[tokio::test]
    async fn wrong_only_keeps_full_score() {
        let (ctx, test_id) = seeded().await;
        let response = build(&ReviewArgs { test_id, wrong: true }, &ctx).await.unwrap();

        assert_eq!(response.problems.len(), 1);
        assert_eq!(response.problems[0].problem.number, 2);
        assert_eq!(response.score.total, 3);
    }

    #[tokio::test]
    async fn unknown_test_is_an_error() {
        let ctx = memory_context().await;
        let err = build(&ReviewArgs { test_id: 77, wrong: false }, &ctx)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Record not found: test 77");
    }
}
