//! Diff the JSON chunk embedded in binary glTF (`.glb`) files.
//!
//! The crate is laid out the same way as the binary uses it:
//!
//! - `areas`: the invocation session (output writer) and scratch files
//! - `artifacts`: the `.glb` container parser, JSON rendering and the diff tool
//! - `commands`: mode selection and the textconv / diff commands

pub mod areas;
pub mod artifacts;
pub mod commands;

use clap::ValueEnum;

/// When to colorize diff output written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(&self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}
