use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Find and cross-check the Nash equilibria of two-player game definitions",
    long_about = None
)]
pub struct Args {
    /// worker threads for category stages, one per core by default
    #[arg(long, global = true)]
    pub threads: Option<usize>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Structurally validate every pass in each category file",
        alias = "val"
    )]
    Validate {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    #[command(
        about = "Solve every valid pass and match the observed outcome",
        alias = "sol"
    )]
    Solve {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    #[command(
        about = "Attach feedback to one pass of every item and print statistics",
        alias = "fb"
    )]
    Feedback {
        /// which pass of each item to judge
        #[arg(long, default_value_t = 0)]
        pass: usize,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    #[command(
        about = "Gather validated single-equilibrium games from each category",
        alias = "col"
    )]
    Collect {
        /// one file for all categories instead of <category>-validated.json each
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    #[command(about = "Validate, solve and give feedback in one go")]
    Run {
        #[arg(long, default_value_t = 0)]
        pass: usize,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    #[command(about = "Evaluate a single game definition file", alias = "eval")]
    Inspect {
        #[arg(required = true)]
        game: PathBuf,
        /// observed outcome as JSON, e.g. '{"P1": "Defect", "P2": "Defect"}'
        #[arg(long)]
        outcome: Option<String>,
    },
}
