//! Serde and JsonSchema checks for the records that cross crate boundaries.

use chrono::Utc;
use grader_core::entities::{Problem, Test};
use grader_core::enums::ProblemType;
use grader_core::responses::ReviewResponse;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn stored_problem(number: i64, correct: Option<&str>, selected: Option<&str>) -> Problem {
    Problem {
        id: number * 10,
        test_id: 1,
        problem_type: ProblemType::MultipleChoices,
        number,
        content: format!("Question {number}"),
        figure: None,
        options: Some("A) 1 B) 2".into()),
        correct_answer: correct.map(String::from),
        selected_answer: selected.map(String::from),
    }
}

#[test]
fn problem_with_absent_fields_matches_schema() {
    let problem = stored_problem(1, None, None);
    let schema = serde_json::to_value(schema_for!(Problem)).unwrap();
    let instance = serde_json::to_value(&problem).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "Schema validation failed: {errors:?}");

    let recovered: Problem = serde_json::from_value(instance).unwrap();
    assert_eq!(recovered, problem);
}

#[test]
fn review_response_flags_follow_grading() {
    let test = Test {
        id: 1,
        name: "Math Quiz".into(),
        total_problems: 3,
        correct_problems: 1,
        created_at: Utc::now(),
    };
    let review = ReviewResponse::new(
        test,
        vec![
            stored_problem(1, Some("B"), Some(" B ")),
            stored_problem(2, Some("A"), Some("C")),
            stored_problem(3, None, None),
        ],
    );

    assert_eq!(review.score.total, 3);
    assert_eq!(review.score.correct, 1);
    let flags: Vec<bool> = review.problems.iter().map(|p| p.correct).collect();
    assert_eq!(flags, vec![true, false, false]);

    // Flattened problem fields sit beside the verdict.
    let json = serde_json::to_value(&review).unwrap();
    assert_eq!(json["problems"][0]["number"], 1);
    assert_eq!(json["problems"][0]["type"], "multiple_choices");
    assert_eq!(json["problems"][0]["correct"], true);
}
