//! Rust Bank Store CLI
//!
//! Interactive command-line manager for bank account records.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-file accounts.data
//! ```
//!
//! The program loads the account set from the data file (starting empty if
//! the file does not exist), runs the interactive menu session on
//! stdin/stdout, and flushes the full record set back to the file before
//! exiting.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unreadable data file, terminal I/O failure, failed final flush)

use rust_bank_store::cli;
use rust_bank_store::AccountStore;
use std::io;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Load the account set; an absent file means a first run
    let mut store = match AccountStore::open(&args.data_file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Run the interactive session over stdin/stdout
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = cli::menu::run(&mut store, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Final flush; every mutation already persisted, so this is a no-op
    // unless the last write failed mid-session
    if let Err(e) = store.shutdown() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
