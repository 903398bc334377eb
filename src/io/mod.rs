//! I/O module
//!
//! Handles the durable flat-file store.
//!
//! # Components
//!
//! - `data_format` - Flat-file format handling (record parsing and serialization)
//! - `data_file` - Whole-file read and truncate-rewrite of the account set

pub mod data_file;
pub mod data_format;

pub use data_file::{read_accounts, write_accounts};
pub use data_format::{parse_record, write_accounts_text};
