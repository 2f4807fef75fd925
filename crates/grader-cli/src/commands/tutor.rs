use anyhow::Context;
use grader_core::errors::CoreError;
use grader_core::responses::TutorResponse;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::TutorArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grader tutor`.
///
/// Seeds the conversation from the stored problem, appends the question, and
/// prints the assistant's reply. `--format raw` prints only the reply text.
pub async fn handle(args: &TutorArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.message.trim().is_empty() {
        anyhow::bail!("--message must not be blank");
    }

    let mut messages = ctx
        .service
        .seed_conversation(args.problem_id, Some(&args.message))
        .await?
        .ok_or_else(|| CoreError::not_found("problem", args.problem_id))?;

    let client = ctx.assistant_client()?;
    let reply = client
        .exchange(&mut messages)
        .await
        .with_context(|| format!("assistant request to {} failed", client.url()))?;
    if reply.is_empty() {
        tracing::warn!(problem_id = args.problem_id, "assistant returned an empty reply");
    }

    if flags.format == OutputFormat::Raw {
        println!("{reply}");
        return Ok(());
    }
    output(
        &TutorResponse {
            problem_id: args.problem_id,
            messages,
            reply,
        },
        flags.format,
    )
}
