use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Ingest(args) => commands::ingest::handle(&args, ctx, flags).await,
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags).await,
        Commands::Tests => commands::tests::handle(ctx, flags).await,
        Commands::Review(args) => commands::review::handle(&args, ctx, flags).await,
        Commands::Problem(args) => commands::problem::handle(&args, ctx, flags).await,
        Commands::Prompt(args) => commands::prompt::handle(&args, ctx, flags).await,
        Commands::Tutor(args) => commands::tutor::handle(&args, ctx, flags).await,
    }
}
