//! Initial tutoring context for a stored problem.
//!
//! The assistant service receives the whole conversation on every call. The
//! first message is always a system message rendered here from the problem
//! record. Rendering is pure and deterministic so identical problems produce
//! byte-identical prompts.

use crate::entities::{ChatMessage, Problem};

/// Rendered in place of a missing figure or option list.
pub const NONE_MARKER: &str = "none";

/// Rendered in place of a missing or blank answer.
pub const NO_ANSWER_MARKER: &str = "no answer";

const INSTRUCTIONS: &str = "You are a patient tutor reviewing a graded exam problem with a student. \
Explain the reasoning that leads to the correct answer step by step. \
If the student's answer is wrong, point out where their reasoning most likely went astray \
without scolding them. Keep explanations concise and ask the student a follow-up question \
to check their understanding.";

/// Render the system prompt for one problem.
#[must_use]
pub fn build_initial_prompt(problem: &Problem) -> String {
    format!(
        "{INSTRUCTIONS}\n\n\
         Problem type: {}\n\
         Problem number: {}\n\
         Content: {}\n\
         Figure: {}\n\
         Options: {}\n\
         Student's answer: {}\n\
         Correct answer: {}",
        problem.problem_type.display_label(),
        problem.number,
        problem.content,
        or_marker(problem.figure.as_deref(), NONE_MARKER),
        or_marker(problem.options.as_deref(), NONE_MARKER),
        or_marker(problem.selected_answer.as_deref(), NO_ANSWER_MARKER),
        or_marker(problem.correct_answer.as_deref(), NO_ANSWER_MARKER),
    )
}

/// The system message that opens a tutoring conversation.
#[must_use]
pub fn initial_message(problem: &Problem) -> ChatMessage {
    ChatMessage::system(build_initial_prompt(problem))
}

/// The seed conversation, optionally with the student's first question.
#[must_use]
pub fn seed_conversation(problem: &Problem, first_question: Option<&str>) -> Vec<ChatMessage> {
    let mut messages = vec![initial_message(problem)];
    if let Some(question) = first_question.map(str::trim).filter(|q| !q.is_empty()) {
        messages.push(ChatMessage::user(question));
    }
    messages
}

fn or_marker<'a>(value: Option<&'a str>, marker: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => marker,
    }
}
