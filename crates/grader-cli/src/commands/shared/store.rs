use anyhow::{Context, anyhow};
use grader_core::entities::{Problem, Test};
use grader_core::grading::Graded;
use grader_parser::{ParseWarning, ParsedExam};
use serde::Serialize;

use crate::context::AppContext;
use crate::output::{Tabular, opt_cell};

/// Response from `grader ingest` and `grader analyze`.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub test: Test,
    pub problems: Vec<Problem>,
    pub warnings: Vec<ParseWarning>,
}

impl Tabular for IngestResponse {
    fn caption(&self) -> Option<String> {
        Some(format!(
            "Saved test {} \"{}\": {}/{} correct, {} warning(s)",
            self.test.id,
            self.test.name,
            self.test.correct_problems,
            self.test.total_problems,
            self.warnings.len()
        ))
    }

    fn headers(&self) -> Vec<&'static str> {
        vec!["id", "number", "type", "correct_answer", "selected_answer", "correct"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.problems
            .iter()
            .map(|p| {
                vec![
                    p.id.to_string(),
                    p.number.to_string(),
                    p.problem_type.to_string(),
                    opt_cell(p.correct_answer.as_deref()),
                    opt_cell(p.selected_answer.as_deref()),
                    p.is_correct().to_string(),
                ]
            })
            .collect()
    }
}

/// Parse analysis text, applying an optional name override.
///
/// A parse failure becomes an error so the process exits non-zero.
pub fn parse_analysis(text: &str, name: Option<&str>) -> anyhow::Result<ParsedExam> {
    let mut exam = grader_parser::parse(text)
        .into_result()
        .map_err(|failure| anyhow!("could not read a graded test from the analysis: {failure}"))?;

    if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
        exam.test.name = name.to_string();
    }
    if !exam.warnings.is_empty() {
        tracing::warn!(count = exam.warnings.len(), "analysis parsed with warnings");
    }
    Ok(exam)
}

/// Persist a parsed exam and build the response.
pub async fn save_exam(exam: ParsedExam, ctx: &AppContext) -> anyhow::Result<IngestResponse> {
    let saved = ctx
        .service
        .save(&exam.test, &exam.problems)
        .await
        .context("failed to save graded test")?;

    Ok(IngestResponse {
        test: saved.test,
        problems: saved.problems,
        warnings: exam.warnings,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::test_support::memory_context;

    const TEXT: &str = "test_name: Quiz\ntype: essay\nnumber: 1\ncontent: c\ncorrect_answer: A\nselected_answer: A\ntype: essay\nnumber: 2";

    #[test]
    fn name_override_replaces_parsed_name() {
        let exam = parse_analysis(TEXT, Some(" Retake ")).unwrap();
        assert_eq!(exam.test.name, "Retake");
    }

    #[test]
    fn blank_override_keeps_parsed_name() {
        let exam = parse_analysis(TEXT, Some("  ")).unwrap();
        assert_eq!(exam.test.name, "Quiz");
    }

    #[test]
    fn parse_failure_is_an_error() {
        let err = parse_analysis("\n\n", None).unwrap_err();
        assert!(err.to_string().contains("analysis text is empty"));
    }

    #[tokio::test]
    async fn save_exam_keeps_parse_warnings() {
        let ctx = memory_context().await;
        let exam = parse_analysis(TEXT, None).unwrap();

        let response = save_exam(exam, &ctx).await.unwrap();

        assert_eq!(response.test.total_problems, 1);
        assert_eq!(response.test.correct_problems, 1);
        assert_eq!(response.warnings.len(), 1);
        assert_eq!(response.rows()[0][5], "true");
    }

    #[tokio::test]
    async fn unnamed_analysis_is_rejected_by_save() {
        let ctx = memory_context().await;
        let exam = parse_analysis("type: essay\nnumber: 1\ncontent: c", None).unwrap();

        let err = save_exam(exam, &ctx).await.unwrap_err();
        assert!(format!("{err:#}").contains("test name is empty"));
        assert!(ctx.service.list_tests(10).await.unwrap().is_empty());
    }
}
