//! gfxhat-update - GFX HAT display driver installer

use anyhow::Result;
use clap::Parser;

use gfxhat_updater::cli::{actions, Cli, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();
    gfxhat_updater::logging::init(cli.verbose);

    let ctx = Context::from_cli(&cli)?;
    actions::update::execute(&ctx)?;
    Ok(())
}
