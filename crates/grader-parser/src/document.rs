//! Whole-document driver: feeds lines through the accumulator.

use grader_core::entities::{ProblemDraft, TestDraft};
use grader_core::enums::ProblemType;

use crate::accumulator::{Accumulator, Closed, NumberSlot};
use crate::error::ParseFailure;
use crate::line::{Field, answer_value, optional_value, read_line};
use crate::outcome::{ParseOutcome, ParseWarning, ParsedExam, WarningKind};

/// Parse analysis text into a test and its problems.
///
/// Never panics and never returns an error directly: failures come back as
/// [`ParseOutcome::Failed`]. Problems keep the order they appear in the text.
/// When two well-formed problems share a number, the later one wins and the
/// earlier one is removed. A leading byte-order mark is skipped.
#[must_use]
pub fn parse(raw: &str) -> ParseOutcome {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut builder = DocumentBuilder::default();
    for (index, line) in raw.lines().enumerate() {
        builder.feed(index + 1, line);
    }
    builder.finish()
}

#[derive(Debug, Default)]
struct DocumentBuilder {
    test_name: Option<String>,
    accumulator: Accumulator,
    problems: Vec<ProblemDraft>,
    warnings: Vec<ParseWarning>,
    non_blank_lines: usize,
    dropped: usize,
}

impl DocumentBuilder {
    fn feed(&mut self, line_no: usize, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        self.non_blank_lines += 1;

        let Some(field) = read_line(raw) else {
            return;
        };

        match field {
            Field::TestName(value) => self.test_name = Some(value.to_string()),
            Field::Type(value) => {
                let problem_type = ProblemType::from_wire(value);
                if problem_type.is_none() {
                    self.warn(
                        line_no,
                        WarningKind::UnknownType {
                            value: value.to_string(),
                        },
                    );
                }
                let block_line = self.accumulator.current_line();
                let closed = self.accumulator.open(line_no, problem_type);
                self.settle(block_line, closed);
            }
            Field::Unknown => {}
            field => self.apply(line_no, field),
        }
    }

    fn apply(&mut self, line_no: usize, field: Field<'_>) {
        if !self.accumulator.is_building() {
            self.warn(line_no, WarningKind::OrphanField { key: field.key() });
            return;
        }
        let Some(current) = self.accumulator.current_mut() else {
            return;
        };

        match field {
            Field::Number(value) => {
                current.number = NumberSlot::from_value(value);
                if let NumberSlot::NotANumber(bad) = &current.number {
                    let value = bad.clone();
                    self.warn(line_no, WarningKind::InvalidNumber { value });
                }
            }
            Field::Content(value) => current.content = Some(value.to_string()),
            Field::Figure(value) => current.figure = optional_value(value),
            Field::Options(value) => current.options = optional_value(value),
            Field::CorrectAnswer(value) => current.correct_answer = answer_value(value),
            Field::SelectedAnswer(value) => current.selected_answer = answer_value(value),
            Field::TestName(_) | Field::Type(_) | Field::Unknown => {}
        }
    }

    fn settle(&mut self, block_line: Option<usize>, closed: Closed) {
        match closed {
            None => {}
            Some(Ok(draft)) => self.push(block_line.unwrap_or_default(), draft),
            Some(Err(malformed)) => {
                tracing::warn!(
                    line = malformed.line,
                    missing = ?malformed.missing,
                    "dropping malformed problem block"
                );
                self.dropped += 1;
                self.warn(
                    malformed.line,
                    WarningKind::DroppedProblem {
                        missing: malformed.missing,
                    },
                );
            }
        }
    }

    fn push(&mut self, line: usize, draft: ProblemDraft) {
        if let Some(pos) = self.problems.iter().position(|p| p.number == draft.number) {
            tracing::warn!(
                number = draft.number,
                "duplicate problem number; keeping the later block"
            );
            self.problems.remove(pos);
            self.warn(
                line,
                WarningKind::DuplicateNumber {
                    number: draft.number,
                },
            );
        }
        self.problems.push(draft);
    }

    fn warn(&mut self, line: usize, kind: WarningKind) {
        self.warnings.push(ParseWarning { line, kind });
    }

    fn finish(mut self) -> ParseOutcome {
        let block_line = self.accumulator.current_line();
        let closed = self.accumulator.close();
        self.settle(block_line, closed);

        if self.non_blank_lines == 0 {
            return ParseOutcome::Failed(ParseFailure::EmptyInput);
        }
        if self.problems.is_empty() {
            tracing::warn!(dropped = self.dropped, "analysis text contained no usable problems");
            return ParseOutcome::Failed(ParseFailure::NoProblems {
                dropped: self.dropped,
            });
        }

        tracing::debug!(
            problems = self.problems.len(),
            warnings = self.warnings.len(),
            "parsed analysis text"
        );
        ParseOutcome::Parsed(ParsedExam {
            test: TestDraft::new(self.test_name.unwrap_or_default()),
            problems: self.problems,
            warnings: self.warnings,
        })
    }
}
