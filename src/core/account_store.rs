//! Account store module
//!
//! This module provides the `AccountStore` struct which owns the mapping of
//! account numbers to account records and keeps it synchronized with the
//! durable data file.
//!
//! The AccountStore is responsible for:
//! - Loading all records from the data file at construction
//! - Assigning account numbers monotonically
//! - Applying deposits and withdrawals through the record-level rules
//! - Persisting the full record set after every mutating operation and on
//!   shutdown
//!
//! # Persistence model
//!
//! Every mutation rewrites the whole data file; there is no append mode, no
//! write-ahead log, and no partial update. A failed record-level operation
//! (insufficient funds, unknown account) leaves both the mapping and the
//! file untouched.

use crate::io::data_file::{read_accounts, write_accounts};
use crate::types::{AccountNumber, AccountRecord, BankError, MIN_BALANCE};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Owns all account records and their durable storage
///
/// The store maintains an in-memory ordered map of account numbers to
/// records, exclusively owned; queries return clones and listing returns
/// references, so no external aliasing of the map's contents exists.
pub struct AccountStore {
    /// Map of account numbers to records, in ascending key order
    accounts: BTreeMap<AccountNumber, AccountRecord>,

    /// Highest account number assigned so far
    ///
    /// Restored at load as the maximum loaded account number, incremented
    /// on each creation. Single-threaded, so a plain counter suffices.
    next_account_number: AccountNumber,

    /// Location of the durable data file, fixed at construction
    data_path: PathBuf,
}

impl AccountStore {
    /// Open the store, loading all records from the data file
    ///
    /// An absent file yields an empty store with the counter at zero; the
    /// file is created on the first mutating operation.
    ///
    /// # Arguments
    ///
    /// * `data_path` - Path to the durable data file
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(data_path: impl AsRef<Path>) -> Result<Self, BankError> {
        let data_path = data_path.as_ref().to_path_buf();
        let records = read_accounts(&data_path)?;

        let mut accounts = BTreeMap::new();
        for record in records {
            accounts.insert(record.account_number(), record);
        }

        // Resume numbering above the highest loaded account number
        let next_account_number = accounts.keys().next_back().copied().unwrap_or(0);

        Ok(AccountStore {
            accounts,
            next_account_number,
            data_path,
        })
    }

    /// Open a new account
    ///
    /// Assigns the next sequential account number, inserts the record into
    /// the mapping, and persists the full record set.
    ///
    /// # Arguments
    ///
    /// * `first_name` - Holder's first name
    /// * `last_name` - Holder's last name
    /// * `initial_balance` - Opening balance (must be at least the minimum)
    ///
    /// # Returns
    ///
    /// A clone of the newly created record.
    ///
    /// # Errors
    ///
    /// Returns `BelowMinimumBalance` (with the mapping unchanged) if the
    /// initial balance is below the minimum, or `IoError` if persisting
    /// fails.
    pub fn open_account(
        &mut self,
        first_name: &str,
        last_name: &str,
        initial_balance: Decimal,
    ) -> Result<AccountRecord, BankError> {
        if initial_balance < MIN_BALANCE {
            return Err(BankError::below_minimum_balance(initial_balance, MIN_BALANCE));
        }

        self.next_account_number += 1;
        let record = AccountRecord::new(
            self.next_account_number,
            first_name.to_string(),
            last_name.to_string(),
            initial_balance,
        );

        self.accounts.insert(record.account_number(), record.clone());
        self.persist()?;

        Ok(record)
    }

    /// Look up an account without mutating it
    ///
    /// # Arguments
    ///
    /// * `account_number` - The account to look up
    ///
    /// # Returns
    ///
    /// A clone of the record.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the number is unknown.
    pub fn balance_enquiry(
        &self,
        account_number: AccountNumber,
    ) -> Result<AccountRecord, BankError> {
        self.accounts
            .get(&account_number)
            .cloned()
            .ok_or_else(|| BankError::account_not_found(account_number))
    }

    /// Deposit funds into an account
    ///
    /// Applies the record-level deposit and persists the full record set on
    /// success. A rejected deposit (non-positive amount, overflow) leaves
    /// both the mapping and the file untouched.
    ///
    /// # Arguments
    ///
    /// * `account_number` - The account to deposit into
    /// * `amount` - The amount to deposit
    ///
    /// # Returns
    ///
    /// A clone of the updated record.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the number is unknown, a record-level
    /// error if the deposit is rejected, or `IoError` if persisting fails.
    pub fn deposit(
        &mut self,
        account_number: AccountNumber,
        amount: Decimal,
    ) -> Result<AccountRecord, BankError> {
        let record = self
            .accounts
            .get_mut(&account_number)
            .ok_or_else(|| BankError::account_not_found(account_number))?;

        record.deposit(amount)?;
        let updated = record.clone();
        self.persist()?;

        Ok(updated)
    }

    /// Withdraw funds from an account
    ///
    /// Applies the record-level withdrawal and persists the full record set
    /// on success. An `InsufficientFunds` rejection propagates without
    /// persisting, since no mutation occurred.
    ///
    /// # Arguments
    ///
    /// * `account_number` - The account to withdraw from
    /// * `amount` - The amount to withdraw
    ///
    /// # Returns
    ///
    /// A clone of the updated record.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the number is unknown, a record-level
    /// error if the withdrawal is rejected, or `IoError` if persisting
    /// fails.
    pub fn withdraw(
        &mut self,
        account_number: AccountNumber,
        amount: Decimal,
    ) -> Result<AccountRecord, BankError> {
        let record = self
            .accounts
            .get_mut(&account_number)
            .ok_or_else(|| BankError::account_not_found(account_number))?;

        record.withdraw(amount)?;
        let updated = record.clone();
        self.persist()?;

        Ok(updated)
    }

    /// Close an account
    ///
    /// Removes the record from the mapping and persists the removal
    /// immediately. Closed account numbers are never reassigned while the
    /// process runs; the counter only moves forward.
    ///
    /// # Arguments
    ///
    /// * `account_number` - The account to close
    ///
    /// # Returns
    ///
    /// The removed record, so the caller can render what was closed.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the number is unknown, or `IoError` if
    /// persisting fails.
    pub fn close_account(
        &mut self,
        account_number: AccountNumber,
    ) -> Result<AccountRecord, BankError> {
        let removed = self
            .accounts
            .remove(&account_number)
            .ok_or_else(|| BankError::account_not_found(account_number))?;

        self.persist()?;

        Ok(removed)
    }

    /// All records in ascending account-number order
    ///
    /// Read-only; has no persistence side effect. The ordered map makes the
    /// ordering structural rather than a sort at call time.
    pub fn list_accounts(&self) -> Vec<&AccountRecord> {
        self.accounts.values().collect()
    }

    /// Number of open accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Persist the full current record set, overwriting prior content
    ///
    /// Called internally after every mutating operation; exposed as the
    /// explicit teardown flush invoked before process exit. Idempotent.
    pub fn shutdown(&self) -> Result<(), BankError> {
        self.persist()
    }

    /// Rewrite the data file from the in-memory mapping
    fn persist(&self) -> Result<(), BankError> {
        let records: Vec<AccountRecord> = self.accounts.values().cloned().collect();
        write_accounts(&self.data_path, &records)
    }
}
