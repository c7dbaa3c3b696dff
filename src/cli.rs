//! CLI 模块

use clap::Parser;

#[derive(Parser)]
#[command(name = "sprig")]
#[command(version)]
#[command(about = "Ephemeral todo list TUI")]
pub struct Cli {
    /// Theme override for this run (e.g. "Dark", "Nord"); unknown names fall back to Auto
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Start with a few sample tasks instead of an empty list
    #[arg(long)]
    pub demo: bool,
}
