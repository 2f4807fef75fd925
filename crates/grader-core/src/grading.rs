//! Answer comparison and aggregate scoring.
//!
//! Two answers are equal when they match character for character after every
//! whitespace character has been removed. Comparison is case-sensitive and an
//! absent answer normalizes to the empty string.
//!
//! Equality alone does not make a problem correct: both answers must also be
//! non-empty, so an unanswered problem with no recorded key never scores.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Problem, ProblemDraft};

/// Strip all whitespace from an answer. `None` becomes `""`.
#[must_use]
pub fn normalize_answer(answer: Option<&str>) -> String {
    answer
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Whitespace-insensitive equality. `answers_equal(None, None)` is `true`.
#[must_use]
pub fn answers_equal(a: Option<&str>, b: Option<&str>) -> bool {
    normalize_answer(a) == normalize_answer(b)
}

/// A problem counts as correct only when both answers are present and equal.
#[must_use]
pub fn is_correct(correct: Option<&str>, selected: Option<&str>) -> bool {
    let correct = normalize_answer(correct);
    !correct.is_empty() && correct == normalize_answer(selected)
}

/// Anything carrying an answer key and a student answer.
pub trait Graded {
    fn correct_answer(&self) -> Option<&str>;
    fn selected_answer(&self) -> Option<&str>;

    fn is_correct(&self) -> bool {
        is_correct(self.correct_answer(), self.selected_answer())
    }
}

impl Graded for ProblemDraft {
    fn correct_answer(&self) -> Option<&str> {
        self.correct_answer.as_deref()
    }

    fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }
}

impl Graded for Problem {
    fn correct_answer(&self) -> Option<&str> {
        self.correct_answer.as_deref()
    }

    fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }
}

/// Aggregate result for a set of problems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Score {
    pub total: u32,
    pub correct: u32,
}

impl Score {
    /// Count problems and correct answers.
    #[must_use]
    pub fn tally<T: Graded>(problems: &[T]) -> Self {
        problems.iter().fold(Self::default(), |score, problem| Self {
            total: score.total.saturating_add(1),
            correct: score.correct + u32::from(problem.is_correct()),
        })
    }
}

/// Problems whose selected answer does not earn credit, in input order.
#[must_use]
pub fn mismatches<T: Graded>(problems: &[T]) -> Vec<&T> {
    problems.iter().filter(|p| !p.is_correct()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::enums::ProblemType;

    fn answered(correct: Option<&str>, selected: Option<&str>) -> ProblemDraft {
        let mut draft = ProblemDraft::new(ProblemType::MultipleChoices, 1, "2+2=?");
        draft.correct_answer = correct.map(String::from);
        draft.selected_answer = selected.map(String::from);
        draft
    }

    #[rstest]
    #[case(Some("  1, 2 "), Some("1,2"), true)]
    #[case(Some("B"), Some("B"), true)]
    #[case(Some("b"), Some("B"), false)]
    #[case(Some("x =\t4\n"), Some("x=4"), true)]
    #[case(None, None, true)]
    #[case(None, Some("   "), true)]
    #[case(Some("A"), None, false)]
    fn equality_ignores_whitespace_only(
        #[case] a: Option<&str>,
        #[case] b: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(answers_equal(a, b), expected);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), Some(""))]
    #[case(Some(" "), None)]
    fn empty_pairs_never_count_as_correct(#[case] a: Option<&str>, #[case] b: Option<&str>) {
        assert!(answers_equal(a, b));
        assert!(!is_correct(a, b));
    }

    #[test]
    fn tally_counts_only_answered_matches() {
        let problems = vec![
            answered(Some("4"), Some("4")),
            answered(Some("4"), Some("3")),
            answered(None, None),
            answered(Some("1, 2"), Some("1,2")),
        ];
        assert_eq!(
            Score::tally(&problems),
            Score {
                total: 4,
                correct: 2
            }
        );
    }

    #[test]
    fn tally_of_nothing_is_zero() {
        assert_eq!(Score::tally::<ProblemDraft>(&[]), Score::default());
    }

    #[test]
    fn mismatches_keep_input_order() {
        let problems = vec![
            answered(Some("A"), Some("B")),
            answered(Some("C"), Some("C")),
            answered(Some("D"), None),
        ];
        let wrong = mismatches(&problems);
        assert_eq!(wrong.len(), 2);
        assert_eq!(wrong[0].selected_answer.as_deref(), Some("B"));
        assert_eq!(wrong[1].selected_answer, None);
    }
}
