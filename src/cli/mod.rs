// CLI module
// Command-line interface, argument parsing, and the interactive menu

mod args;
pub mod menu;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g. invalid arguments or the --help flag), clap will
/// automatically display an error message or help text and exit the
/// process.
///
/// # Returns
///
/// Returns a `CliArgs` struct with the parsed command-line arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
