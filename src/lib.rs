//! gfxhat-updater - GFX HAT display driver installer
//!
//! Updates an existing pwnagotchi deployment in place.
//!
//! # Steps
//!
//! - Locate the install directory and the new driver files
//! - Back up the top-level scripts of the install directory
//! - Overlay the new `.py`/`.sh` files, keeping their relative layout
//! - Normalize script permissions
//! - Select the new display driver in `config.toml`
//! - Restart the service

pub mod backup;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod model;
pub mod overlay;
pub mod patch;
pub mod permissions;
pub mod service;
pub mod utils;

pub use error::UpdateError;
pub use model::{ScriptKind, Settings};
