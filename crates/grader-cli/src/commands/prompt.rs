use grader_core::tutor::build_initial_prompt;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::ProblemArgs;
use crate::commands::problem::require_problem;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PromptResponse {
    problem_id: i64,
    prompt: String,
}

/// Handle `grader prompt`.
///
/// `--format raw` prints the prompt text itself so it can be piped.
pub async fn handle(args: &ProblemArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let problem = require_problem(args.problem_id, ctx).await?;
    let prompt = build_initial_prompt(&problem);

    if flags.format == OutputFormat::Raw {
        println!("{prompt}");
        return Ok(());
    }
    output(
        &PromptResponse {
            problem_id: problem.id,
            prompt,
        },
        flags.format,
    )
}
