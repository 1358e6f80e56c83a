use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "List every file in a directory tree and optionally save the report"
)]
pub struct Cli {
    /// Folder to list; prompted for interactively when omitted
    pub path: Option<PathBuf>,
}
