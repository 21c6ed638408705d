//! Kindred CLI library.
//!
//! Configuration, logging, output formatting, and command execution for the
//! `kindred` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
