//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the easel binary.

mod check;
mod commands;
mod generate;
mod serve;

pub use check::handle_check_config;
pub use commands::{Cli, Commands, GenerateTarget};
pub use generate::{backoff, handle_generate};
pub use serve::handle_serve;
