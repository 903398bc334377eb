//! Whole-file access to the durable account store
//!
//! Reads and rewrites the flat data file holding the full account set.
//! Record-level format concerns are delegated to the data_format module.
//!
//! # Design
//!
//! The file is accessed via exclusive open/read-or-write/close per call; no
//! handle is held across operations. Truncate-and-rewrite is the only write
//! mode: there is no append, no incremental update, and no transaction
//! boundary across records.
//!
//! # Error Handling
//!
//! - An absent file on read yields an empty record set (first run)
//! - A trailing partial record (end of file in the middle of a record's
//!   four lines) is dropped silently and reading stops
//! - A malformed field inside a complete record is a `ParseError` with the
//!   offending line number
//! - All other I/O failures surface as `IoError`

use crate::io::data_format::{parse_record, write_accounts_text, LINES_PER_RECORD};
use crate::types::{AccountRecord, BankError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Read all account records from the data file
///
/// Records are read in groups of four lines until end of file. An absent
/// file is not an error: the store starts empty on first run.
///
/// # Arguments
///
/// * `path` - Path to the data file
///
/// # Returns
///
/// * `Ok(Vec<AccountRecord>)` - All complete records in file order
/// * `Err(BankError)` - If the file exists but cannot be read or parsed
pub fn read_accounts(path: &Path) -> Result<Vec<AccountRecord>, BankError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(BankError::IoError {
                message: format!("Failed to open data file '{}': {}", path.display(), e),
            })
        }
    };

    let reader = BufReader::new(file);
    let mut lines = reader.lines();
    let mut accounts = Vec::new();
    let mut line_num = 0;

    loop {
        let mut fields: Vec<String> = Vec::with_capacity(LINES_PER_RECORD);
        for _ in 0..LINES_PER_RECORD {
            match lines.next() {
                Some(line) => {
                    line_num += 1;
                    fields.push(line?);
                }
                None => break,
            }
        }

        if fields.is_empty() {
            break; // clean end of file
        }
        if fields.len() < LINES_PER_RECORD {
            break; // trailing partial record, dropped
        }

        let first_line = line_num - (LINES_PER_RECORD - 1);
        let record = parse_record(
            [&fields[0], &fields[1], &fields[2], &fields[3]],
            first_line,
        )?;
        accounts.push(record);
    }

    Ok(accounts)
}

/// Write the full account set to the data file, replacing prior content
///
/// Truncates the file and rewrites every record. The write is buffered and
/// flushed before the file is closed on return.
///
/// # Arguments
///
/// * `path` - Path to the data file
/// * `accounts` - All records to persist, in the order they should appear
///
/// # Errors
///
/// Returns `IoError` if the file cannot be created or written.
pub fn write_accounts(path: &Path, accounts: &[AccountRecord]) -> Result<(), BankError> {
    let file = File::create(path).map_err(|e| BankError::IoError {
        message: format!("Failed to create data file '{}': {}", path.display(), e),
    })?;

    let mut writer = BufWriter::new(file);
    write_accounts_text(accounts, &mut writer)?;
    writer.flush()?;

    Ok(())
}
