//! CLI library for testing purposes

pub mod args;
pub mod config;
pub mod error;
pub mod exit_status;
pub mod report;
pub mod run;

pub use args::Args;
pub use error::CliError;
pub use exit_status::ExitStatus;
pub use run::{init_logging, resolve_options, run_cli};
