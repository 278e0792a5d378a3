//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::model::Settings;
use crate::utils::path::expand_tilde;

/// Everything an update run needs, resolved from the CLI and settings
pub struct Context {
    pub settings: Settings,
    pub install_dir: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub search_root: Option<PathBuf>,
    pub assume_yes: bool,
    pub restart: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings = crate::config::load_settings(cli.settings.as_deref())?;
        Ok(Self::new(settings, cli))
    }

    pub fn new(settings: Settings, cli: &Cli) -> Self {
        let search_root = cli
            .search_root
            .as_deref()
            .map(expand_tilde)
            .or_else(dirs::home_dir);

        Self {
            settings,
            install_dir: cli.install_dir.as_deref().map(expand_tilde),
            source_dir: cli.source_dir.as_deref().map(expand_tilde),
            search_root,
            assume_yes: cli.yes,
            restart: !cli.no_restart,
        }
    }

    /// Print a plain informational line
    pub fn print_info(&self, message: &str) {
        println!("{}", message);
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
