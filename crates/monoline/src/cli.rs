use clap::Parser;
use std::path::PathBuf;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name = "monoline",
    version,
    about = "Single-line text editor driven by short vi-like commands"
)]
pub struct Args {
    /// Read commands from this file, one per line, instead of standard input.
    pub script: Option<PathBuf>,
    /// Configuration file path (overrides MONOLINE_CONFIG_PATH and the default location).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Mark the cursor with brackets instead of a coloured cell.
    #[arg(long)]
    pub no_color: bool,
    /// Print the final editor state as JSON when the session ends.
    #[arg(long)]
    pub dump_state: bool,
    /// Write the default configuration file and exit.
    #[arg(long)]
    pub write_default_config: bool,
}
