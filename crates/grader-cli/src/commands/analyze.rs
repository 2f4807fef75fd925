use anyhow::Context;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::commands::shared::store::{parse_analysis, save_exam};
use crate::context::AppContext;
use crate::output::output_tabular;

/// Handle `grader analyze`.
pub async fn handle(args: &AnalyzeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let image = std::fs::read(&args.image)
        .with_context(|| format!("failed to read image {}", args.image.display()))?;
    let encoded = STANDARD.encode(&image);
    let prompt = args.prompt.as_deref().unwrap_or(&ctx.config.analysis.prompt);

    let client = ctx.analysis_client()?;
    let text = client
        .analyze(prompt, &encoded)
        .await
        .with_context(|| format!("analysis request to {} failed", client.url()))?
        .into_text()?;
    tracing::debug!(chars = text.chars().count(), "received analysis text");

    let exam = parse_analysis(&text, args.name.as_deref())?;
    let response = save_exam(exam, ctx).await?;
    output_tabular(&response, flags.format)
}
