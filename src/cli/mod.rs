//! CLI module

pub mod actions;
pub mod args;
pub mod context;
pub mod prompt;

pub use args::Cli;
pub use context::Context;
