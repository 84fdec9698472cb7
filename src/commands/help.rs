use clap::CommandFactory;
use crate::Cli;

/// Usage text printed when no query is given
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
