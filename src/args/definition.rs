//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// questlist - Filter, sort and lay out a quest list panel snapshot
#[derive(Parser, Debug)]
#[command(name = "questlist")]
#[command(version)]
#[command(about = "Filter, sort and lay out a quest list panel snapshot", long_about = None)]
pub struct Args {
    /// Panel snapshot to lay out (JSON)
    #[arg(long)]
    pub panel: PathBuf,

    /// Player snapshot used for requirement checks (JSON); every requirement is met when omitted
    #[arg(long)]
    pub player: Option<PathBuf>,

    /// Quest catalog to use instead of the built-in one (TOML)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Settings file (default: ~/.config/questlist/settings.conf)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Click a menu entry by label before laying out; repeatable, applied in order
    #[arg(long = "click", value_name = "LABEL")]
    pub clicks: Vec<String>,

    /// Reset every quest list option to its default first
    #[arg(long)]
    pub reset: bool,

    /// Print the menu entries the quest tab would offer
    #[arg(long)]
    pub menu: bool,

    /// Print the resulting panel as JSON
    #[arg(long)]
    pub json: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}
