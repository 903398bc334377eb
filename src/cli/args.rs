use clap::Parser;
use std::path::PathBuf;

/// Manage bank account records from an interactive session
#[derive(Parser, Debug)]
#[command(name = "bank-store")]
#[command(about = "Single-user bank account record manager", long_about = None)]
pub struct CliArgs {
    /// Path to the durable account data file
    #[arg(
        long = "data-file",
        value_name = "FILE",
        default_value = "Bank.data",
        help = "Path to the account data file (created on first mutation)"
    )]
    pub data_file: PathBuf,
}
