use clap::Parser;
use std::path::PathBuf;

/// Score a document against the DeCS highlighter service
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Document text, or file=<path> to read it from a file.
    #[arg(allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Settings file to load instead of config/default.toml.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pretty-print the scores.
    #[arg(long)]
    pub pretty: bool,

    /// Words after TEXT; only the first argument is scored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}
