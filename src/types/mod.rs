//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account record and the minimum-balance rule
//! - `error`: Error types for the bank store

pub mod account;
pub mod error;

pub use account::{AccountNumber, AccountRecord, MIN_BALANCE};
pub use error::BankError;
