pub mod dashboard;
pub mod output;
pub mod register_screen;
mod shell;

pub use shell::{run_cli, CliError, SCRIPT_MODE_ENV};
