//! Rust Bank Store Library
//! # Overview
//!
//! This library provides a single-user, in-process record manager for bank
//! accounts backed by a flat text file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (AccountRecord, BankError)
//! - [`cli`] - CLI argument parsing and the interactive menu session
//! - [`core`] - Business logic components:
//!   - [`core::account_store`] - Account mapping, number assignment, and
//!     the flush-on-mutation persistence contract
//! - [`io`] - Flat-file format handling and whole-file read/rewrite
//!
//! # Operations
//!
//! The store supports six operations, each surfaced as a menu choice:
//!
//! - **OpenAccount**: Create an account with an initial balance of at least
//!   the minimum
//! - **BalanceEnquiry**: Read one account without mutation
//! - **Deposit**: Credit funds to an account
//! - **Withdraw**: Debit funds, rejected if the balance would fall below
//!   the minimum
//! - **CloseAccount**: Remove an account; its number is never reassigned
//! - **ListAccounts**: All accounts in ascending account-number order
//!
//! # Persistence
//!
//! The full record set is rewritten to the data file after every mutating
//! operation and on shutdown. Each record occupies four consecutive lines
//! (account number, first name, last name, balance); there is no header,
//! record count, or checksum. This is the documented durability model: no
//! write-ahead log, no partial update, single-threaded access only.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::AccountStore;
pub use types::{AccountNumber, AccountRecord, BankError, MIN_BALANCE};
