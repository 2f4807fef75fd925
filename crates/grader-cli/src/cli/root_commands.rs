use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Parse a saved analysis text file and store the graded test.
    Ingest(IngestArgs),
    /// Send an exam photo to the analysis service, then store the result.
    Analyze(AnalyzeArgs),
    /// List saved tests, newest first (bounded by --limit).
    Tests,
    /// Show a test's problems with grading verdicts.
    Review(ReviewArgs),
    /// Show one stored problem.
    Problem(ProblemArgs),
    /// Print the tutoring system prompt for a problem.
    Prompt(ProblemArgs),
    /// Ask the tutoring assistant about a problem.
    Tutor(TutorArgs),
}

#[derive(Clone, Debug, Args)]
pub struct IngestArgs {
    /// Analysis text file (`-` reads stdin).
    pub file: PathBuf,

    /// Test name to use instead of the one in the text.
    #[arg(long)]
    pub name: Option<String>,

    /// Parse and report without saving.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Image of the graded exam page.
    pub image: PathBuf,

    /// Grading instruction to send instead of the configured prompt.
    #[arg(long)]
    pub prompt: Option<String>,

    /// Test name to use instead of the one in the analysis.
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ReviewArgs {
    /// Test id.
    pub test_id: i64,

    /// Only list problems that did not earn credit.
    #[arg(long)]
    pub wrong: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ProblemArgs {
    /// Problem id.
    pub problem_id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct TutorArgs {
    /// Problem id.
    pub problem_id: i64,

    /// Question to ask about the problem.
    #[arg(short, long)]
    pub message: String,
}
