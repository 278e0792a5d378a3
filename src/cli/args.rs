//! CLI argument definitions using Clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "gfxhat-update")]
#[command(about = "Install GFX HAT display driver files into a pwnagotchi deployment")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Use this install directory instead of probing the known locations
    #[arg(long, value_name = "PATH")]
    pub install_dir: Option<PathBuf>,

    /// Use this directory of new driver files instead of searching for it
    #[arg(long, value_name = "PATH")]
    pub source_dir: Option<PathBuf>,

    /// Where to search for the driver files directory (default: home directory)
    #[arg(long, value_name = "PATH")]
    pub search_root: Option<PathBuf>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Do not restart the service after updating
    #[arg(long)]
    pub no_restart: bool,

    /// Updater settings file
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
