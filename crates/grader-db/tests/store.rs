//! Storage behavior observed through the public `ExamService` API.

use grader_core::entities::{ProblemDraft, TestDraft};
use grader_core::enums::ProblemType;
use grader_db::ExamDb;
use grader_db::error::DatabaseError;
use grader_db::service::ExamService;
use pretty_assertions::assert_eq;
use rstest::rstest;

async fn memory_service() -> ExamService {
    ExamService::new_local(":memory:").await.unwrap()
}

async fn count(svc: &ExamService, table: &str) -> i64 {
    let mut rows = svc
        .db()
        .conn()
        .query(&format!("SELECT COUNT(*) FROM {table}"), ())
        .await
        .unwrap();
    rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
}

fn draft(number: i64, content: &str) -> ProblemDraft {
    ProblemDraft::new(ProblemType::MultipleChoices, number, content)
}

const ANALYSIS: &str = "\
test_name: Weekly Check
type: multiple_choices
number: 3
content: 9 / 3 = ?
options: A)2 B)3
correct_answer: B
selected_answer: B
type: essay
number: 1
content: Describe a prime number.
figure: none
correct_answer: A number with exactly two divisors
selected_answer: A number with exactly two  divisors
type: multiple_choices
number: 2
content: 7 x 6 = ?
options: A)42 B)36
correct_answer: A
selected_answer: B
";

#[tokio::test]
async fn parse_save_list_sorts_by_number() {
    let svc = memory_service().await;
    let exam = grader_parser::parse(ANALYSIS).into_result().unwrap();
    let parsed_order: Vec<i64> = exam.problems.iter().map(|p| p.number).collect();
    assert_eq!(parsed_order, vec![3, 1, 2]);

    let saved = svc.save(&exam.test, &exam.problems).await.unwrap();
    assert_eq!(saved.test.name, "Weekly Check");
    assert_eq!(saved.test.total_problems, 3);
    assert_eq!(saved.test.correct_problems, 2);

    let stored = svc.list_problems(saved.test.id).await.unwrap();
    let numbers: Vec<i64> = stored.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(stored[0].figure, None);
    assert_eq!(stored[2].options.as_deref(), Some("A)2 B)3"));
}

#[tokio::test]
async fn deleting_a_test_cascades_to_problems() {
    let svc = memory_service().await;
    let saved = svc
        .save(&TestDraft::new("Cascade"), &[draft(1, "a"), draft(2, "b")])
        .await
        .unwrap();
    assert_eq!(count(&svc, "problems").await, 2);

    svc.db()
        .conn()
        .execute("DELETE FROM tests WHERE test_id = ?1", [saved.test.id])
        .await
        .unwrap();

    assert_eq!(count(&svc, "problems").await, 0);
    assert!(svc.list_problems(saved.test.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_problem_insert_leaves_no_partial_test() {
    let svc = memory_service().await;
    svc.db()
        .conn()
        .execute_batch(
            "CREATE TRIGGER reject_99 BEFORE INSERT ON problems
             WHEN NEW.number = 99
             BEGIN SELECT RAISE(ABORT, 'boom'); END;",
        )
        .await
        .unwrap();

    let result = svc
        .save(&TestDraft::new("Atomic"), &[draft(1, "ok"), draft(99, "fails")])
        .await;

    assert!(result.is_err());
    assert!(!result.unwrap_err().is_validation());
    assert_eq!(count(&svc, "tests").await, 0);
    assert_eq!(count(&svc, "problems").await, 0);

    // The connection is usable again after the rollback.
    let saved = svc
        .save(&TestDraft::new("After"), &[draft(1, "ok")])
        .await
        .unwrap();
    assert_eq!(svc.list_tests(10).await.unwrap(), vec![saved.test]);
}

#[tokio::test]
async fn concurrent_saves_keep_their_own_problems() {
    let svc = memory_service().await;
    let (first_name, second_name) = (TestDraft::new("First"), TestDraft::new("Second"));
    let first_problems = [draft(1, "first a"), draft(2, "first b")];
    let second_problems = [draft(1, "second a")];

    let (first, second) = tokio::join!(
        svc.save(&first_name, &first_problems),
        svc.save(&second_name, &second_problems),
    );
    let (first, second) = (first.unwrap(), second.unwrap());

    assert_ne!(first.test.id, second.test.id);
    let first_stored = svc.list_problems(first.test.id).await.unwrap();
    let second_stored = svc.list_problems(second.test.id).await.unwrap();
    assert_eq!(first_stored, first.problems);
    assert_eq!(second_stored, second.problems);
    assert!(first_stored.iter().all(|p| p.test_id == first.test.id));
    assert!(second_stored.iter().all(|p| p.test_id == second.test.id));
    assert_eq!(count(&svc, "problems").await, 3);
}

#[tokio::test]
async fn failed_read_is_an_error_not_an_empty_list() {
    let svc = memory_service().await;
    svc.save(&TestDraft::new("Gone"), &[draft(1, "a")])
        .await
        .unwrap();
    svc.db()
        .conn()
        .execute("DROP TABLE problems", ())
        .await
        .unwrap();

    let result = svc.list_problems(1).await;

    assert!(matches!(result, Err(DatabaseError::LibSql(_))));
}

#[rstest]
#[case::blank_name("  ", vec![draft(1, "a")], "test name is empty")]
#[case::no_problems("Empty", vec![], "test 'Empty' has no problems")]
#[case::blank_content("T", vec![draft(1, "a"), draft(2, " ")], "problem 2 has empty content")]
#[case::duplicate_number("T", vec![draft(4, "a"), draft(4, "b")], "problem number 4 appears more than once")]
#[tokio::test]
async fn invalid_exams_are_rejected_before_writing(
    #[case] name: &str,
    #[case] problems: Vec<ProblemDraft>,
    #[case] message: &str,
) {
    let svc = memory_service().await;

    let error = svc.save(&TestDraft::new(name), &problems).await.unwrap_err();

    assert!(matches!(error, DatabaseError::Validation(_)));
    assert_eq!(error.to_string(), format!("Validation error: {message}"));
    assert_eq!(count(&svc, "tests").await, 0);
}

#[tokio::test]
async fn on_disk_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grader.db");
    let path = path.to_str().unwrap();

    let saved = {
        let svc = ExamService::new_local(path).await.unwrap();
        svc.save(&TestDraft::new("Persisted"), &[draft(1, "kept")])
            .await
            .unwrap()
    };

    let db = ExamDb::open_local(path).await.unwrap();
    assert!(db.foreign_keys_enabled().await.unwrap());
    let svc = ExamService::from_db(db);
    assert_eq!(svc.get_test(saved.test.id).await.unwrap(), Some(saved.test.clone()));
    assert_eq!(svc.list_problems(saved.test.id).await.unwrap(), saved.problems);
}
