//! CLI layer: argument parsing, command dispatch and reporting

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod report;

pub use args::{Cli, Commands, Strategy};
pub use commands::execute_command;
pub use error::{CliError, CliResult};
