use grader_core::entities::Problem;
use grader_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProblemArgs;
use crate::context::AppContext;
use crate::output::output;

/// Load a problem or fail with a user-facing message.
pub async fn require_problem(problem_id: i64, ctx: &AppContext) -> anyhow::Result<Problem> {
    let problem = ctx
        .service
        .get_problem(problem_id)
        .await?
        .ok_or_else(|| CoreError::not_found("problem", problem_id))?;
    Ok(problem)
}

/// Handle `grader problem`.
pub async fn handle(args: &ProblemArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let problem = require_problem(args.problem_id, ctx).await?;
    output(&problem, flags.format)
}
