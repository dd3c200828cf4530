//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "problem-diff",
    version,
    about = "Compare two static-analysis result sets",
    long_about = "problem-diff: split two analysis JSON documents into problems only in the first, only in the second, and in both.\n\nPaths not given as flags or in problem-diff.toml are prompted for interactively.\nConfiguration precedence: CLI > problem-diff.toml > defaults.",
    after_help = "Examples:\n  problem-diff\n  problem-diff compare --first old.json --second new.json --only-first gone.json --only-second added.json --both kept.json\n  problem-diff compare --duplicates first --output json"
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
/// Supported subcommands. Without one, `compare` runs fully interactive.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current problem-diff version.")]
    Version,
    /// Compare two analysis files
    #[command(
        about = "Compare two analysis files",
        long_about = "Partition problems by hash. Problems with empty data are never written. Common problems must carry the same data in any order.",
        after_help = "Examples:\n  problem-diff compare --first a.json --second b.json\n  problem-diff compare --pretty --output json"
    )]
    Compare(CompareArgs),
}

#[derive(Args, Default)]
/// Options for `problem-diff compare`.
pub struct CompareArgs {
    #[arg(long, help = "Directory to start config discovery from (default: current dir)")]
    pub root: Option<String>,
    #[arg(long, help = "First analysis file")]
    pub first: Option<String>,
    #[arg(long, help = "Second analysis file")]
    pub second: Option<String>,
    #[arg(long, help = "Output for problems only in the first analysis")]
    pub only_first: Option<String>,
    #[arg(long, help = "Output for problems only in the second analysis")]
    pub only_second: Option<String>,
    #[arg(long, help = "Output for problems in both analyses")]
    pub both: Option<String>,
    #[arg(long, help = "Summary mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Repeated-hash tie-break when matching: first|last (default: last)")]
    pub duplicates: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Pretty-print output documents")]
    pub pretty: bool,
}
