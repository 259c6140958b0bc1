//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Path to a CSS file or a directory containing CSS files
    pub path: PathBuf,

    /// Output file for the token document (overrides config file)
    #[arg(short, long, env = "CSSDIG_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Pattern to skip when scanning a directory (glob or literal path).
    /// Can be specified multiple times: --ignore "**/vendor/**" --ignore dist
    #[arg(long, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
