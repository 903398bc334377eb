//! Account-related types for the bank store
//!
//! This module defines the AccountRecord structure representing one bank
//! account, together with the minimum-balance rule enforced on withdrawals.

use crate::types::BankError;
use rust_decimal::Decimal;
use std::fmt;

/// Account number type (u32, assigned sequentially starting at 1)
pub type AccountNumber = u32;

/// Minimum balance that must remain in an account after any withdrawal
///
/// Opening an account with an initial balance below this threshold is
/// rejected, and a withdrawal that would leave less than this amount
/// fails with `InsufficientFunds`.
pub const MIN_BALANCE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// One bank account record
///
/// The account number and holder names are immutable after creation;
/// the balance is mutated only through [`deposit`](AccountRecord::deposit)
/// and [`withdraw`](AccountRecord::withdraw).
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRecord {
    /// Unique sequential account number
    account_number: AccountNumber,

    /// Holder's first name, set at creation (no rename operation exists)
    first_name: String,

    /// Holder's last name, set at creation
    last_name: String,

    /// Current balance
    ///
    /// Invariant: `balance >= MIN_BALANCE` holds after every successful
    /// withdrawal. Deposits have no upper bound beyond checked arithmetic.
    balance: Decimal,
}

impl AccountRecord {
    /// Create a new account record
    ///
    /// The minimum-balance check on the initial balance is the store's
    /// responsibility and happens before this constructor is called.
    ///
    /// # Arguments
    ///
    /// * `account_number` - The unique number assigned by the store
    /// * `first_name` - Holder's first name
    /// * `last_name` - Holder's last name
    /// * `balance` - Initial balance
    pub fn new(
        account_number: AccountNumber,
        first_name: String,
        last_name: String,
        balance: Decimal,
    ) -> Self {
        AccountRecord {
            account_number,
            first_name,
            last_name,
            balance,
        }
    }

    /// The account number
    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    /// The holder's first name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The holder's last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Deposit funds into the account
    ///
    /// Increases the balance by the specified amount using checked
    /// arithmetic. There is no upper bound on the resulting balance.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to deposit (must be strictly positive)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - Adding the amount to the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::non_positive_amount("deposit", amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", self.account_number))?;

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// Decreases the balance by the specified amount. The withdrawal is
    /// rejected if it would leave the balance below [`MIN_BALANCE`]; in
    /// that case the balance is left unchanged.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to withdraw (must be strictly positive)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The remaining balance would fall below the minimum
    /// - Subtracting the amount from the balance would overflow
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::non_positive_amount("withdrawal", amount));
        }

        let remaining = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal", self.account_number))?;

        if remaining < MIN_BALANCE {
            return Err(BankError::insufficient_funds(
                self.account_number,
                self.balance,
                amount,
            ));
        }

        self.balance = remaining;
        Ok(())
    }
}

impl fmt::Display for AccountRecord {
    /// Render the record as the boxed block shown by the interactive surface
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------------------------")?;
        writeln!(f, "Account Number: {}", self.account_number)?;
        writeln!(f, "First Name:     {}", self.first_name)?;
        writeln!(f, "Last Name:      {}", self.last_name)?;
        writeln!(f, "Balance:        {}", self.balance)?;
        write!(f, "-------------------------------")
    }
}
