//! Top-level actions

pub mod update;
