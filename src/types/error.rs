//! Error types for the bank store
//!
//! This module defines all error types that can occur during account
//! operations and persistence. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Initial balance below the minimum, non-positive
//!   deposit/withdrawal amounts
//! - **Account Errors**: Insufficient funds, unknown account number
//! - **Persistence Errors**: Unreadable or unwritable data file, malformed
//!   data file contents
//! - **Arithmetic Errors**: Overflow in balance calculations

use crate::types::account::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank store
///
/// This enum represents all possible errors that can occur during account
/// operations. Each variant includes relevant context to help diagnose and
/// resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Initial balance below the required minimum
    ///
    /// This is a recoverable error - the account is not created and the
    /// store remains unchanged.
    #[error("Initial balance {balance} is below the minimum balance of {minimum}")]
    BelowMinimumBalance {
        /// The rejected initial balance
        balance: Decimal,
        /// The required minimum
        minimum: Decimal,
    },

    /// Deposit or withdrawal amount is zero or negative
    ///
    /// This is a recoverable error - the operation is rejected and the
    /// balance remains unchanged.
    #[error("{operation} amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// Operation that was rejected ("deposit" or "withdrawal")
        operation: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal would leave the balance below the minimum
    ///
    /// This is a recoverable error - the withdrawal is rejected and the
    /// balance remains unchanged.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Current balance
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Unknown account number referenced
    ///
    /// This is a recoverable error - the operation is rejected and the
    /// store remains unchanged.
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The account number that was not found
        account: AccountNumber,
    },

    /// Arithmetic overflow would occur
    ///
    /// This is a recoverable error - the operation is rejected to keep the
    /// balance intact.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// I/O error occurred while reading or writing the data file
    ///
    /// Persistence failures surface through this variant instead of being
    /// silently ignored; callers decide whether to retry or abort.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Malformed contents encountered in the data file
    ///
    /// A complete record with an unparseable field is reported through this
    /// variant; a trailing partial record at end of file is dropped
    /// silently by the reader.
    #[error("Data file parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to BankError
impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create a BelowMinimumBalance error
    pub fn below_minimum_balance(balance: Decimal, minimum: Decimal) -> Self {
        BankError::BelowMinimumBalance { balance, minimum }
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(operation: &str, amount: Decimal) -> Self {
        BankError::NonPositiveAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(
        account: AccountNumber,
        balance: Decimal,
        requested: Decimal,
    ) -> Self {
        BankError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        BankError::AccountNotFound { account }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create a ParseError
    pub fn parse_error(line: Option<usize>, message: impl Into<String>) -> Self {
        BankError::ParseError {
            line,
            message: message.into(),
        }
    }
}
