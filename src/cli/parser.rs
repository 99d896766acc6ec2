use clap::Parser;

/// Command-line interface definition for daylog
/// CLI application to keep a one-line-per-day journal in a flat text file
#[derive(Parser, Debug)]
#[command(
    name = "daylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple daily journal CLI: append one dated note per day to a plain text log",
    long_about = None
)]
pub struct Cli {
    /// What you did today. If omitted, defaults to "Showed up."
    pub note: Vec<String>,

    /// Log for a specific date rather than today
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// Show the last N entries instead of writing a new entry
    #[arg(long = "list", value_name = "N", allow_negative_numbers = true)]
    pub list: Option<i64>,

    /// Allow multiple entries on the same date
    #[arg(long = "force")]
    pub force: bool,

    /// Read the note interactively from standard input
    #[arg(long = "prompt")]
    pub prompt: bool,

    /// Override journal file path (useful for tests or custom logs)
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<String>,
}
