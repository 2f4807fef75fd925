use std::io::Read;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IngestArgs;
use crate::commands::shared::store::{parse_analysis, save_exam};
use crate::context::AppContext;
use crate::output::{output, output_tabular};

/// Handle `grader ingest`.
pub async fn handle(args: &IngestArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_input(args)?;
    let exam = parse_analysis(&text, args.name.as_deref())?;

    if args.dry_run {
        return output(&exam, flags.format);
    }

    let response = save_exam(exam, ctx).await?;
    output_tabular(&response, flags.format)
}

fn read_input(args: &IngestArgs) -> anyhow::Result<String> {
    if args.file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read analysis text from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))
}
