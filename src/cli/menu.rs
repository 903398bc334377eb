//! Interactive menu session
//!
//! The text-menu surface over the account store. Each menu choice maps 1:1
//! onto a store operation; prompting, numeric parsing, and rendering of
//! records and errors live here and nowhere else.
//!
//! The loop is generic over `BufRead`/`Write` so tests can drive a session
//! with scripted input and inspect the rendered output.
//!
//! # Error Handling
//!
//! Every `BankError` is recoverable at this boundary: its display string is
//! printed and the session continues. Only terminal I/O failures (broken
//! stdin/stdout) end the session with an error.

use crate::core::AccountStore;
use crate::types::{AccountNumber, MIN_BALANCE};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Outcome of prompting for one value
enum Prompted<T> {
    /// A token was read and parsed
    Value(T),
    /// The line held no token or the token did not parse
    Invalid,
    /// Input is exhausted; the session should end
    Eof,
}

/// Print a prompt and read one whitespace-delimited token, parsed as `T`
///
/// Names and numbers are both read this way; reading a single token matches
/// the data file's single-token name fields.
fn prompt_parsed<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Prompted<T>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Prompted::Eof);
    }

    match line.split_whitespace().next().and_then(|t| t.parse().ok()) {
        Some(value) => Ok(Prompted::Value(value)),
        None => Ok(Prompted::Invalid),
    }
}

/// Run the interactive session until Exit or end of input
///
/// # Arguments
///
/// * `store` - The account store backing the session
/// * `input` - Source of user input (stdin in production)
/// * `output` - Destination for prompts and results (stdout in production)
pub fn run<R: BufRead, W: Write>(
    store: &mut AccountStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "========== BANKING SYSTEM ==========")?;

    loop {
        writeln!(output)?;
        writeln!(output, "Please choose an option:")?;
        writeln!(output, "1. Open Account")?;
        writeln!(output, "2. Balance Enquiry")?;
        writeln!(output, "3. Deposit")?;
        writeln!(output, "4. Withdrawal")?;
        writeln!(output, "5. Close Account")?;
        writeln!(output, "6. Show All Accounts")?;
        writeln!(output, "7. Exit")?;

        let choice = match prompt_parsed::<String, _, _>(input, output, "Enter your choice (1-7): ")? {
            Prompted::Value(choice) => choice,
            Prompted::Invalid => {
                writeln!(output, "Invalid choice. Try again.")?;
                continue;
            }
            Prompted::Eof => break,
        };

        let keep_going = match choice.as_str() {
            "1" => open_account(store, input, output)?,
            "2" => balance_enquiry(store, input, output)?,
            "3" => deposit(store, input, output)?,
            "4" => withdraw(store, input, output)?,
            "5" => close_account(store, input, output)?,
            "6" => {
                show_all_accounts(store, output)?;
                true
            }
            "7" => {
                writeln!(output, "Exiting. Thank you!")?;
                false
            }
            _ => {
                writeln!(output, "Invalid choice. Try again.")?;
                true
            }
        };

        if !keep_going {
            break;
        }
    }

    Ok(())
}

/// Menu choice 1: prompt for names and initial balance, open the account
fn open_account<R: BufRead, W: Write>(
    store: &mut AccountStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let first_name = match prompt_parsed::<String, _, _>(input, output, "Enter first name: ")? {
        Prompted::Value(name) => name,
        Prompted::Invalid => {
            writeln!(output, "A name is required.")?;
            return Ok(true);
        }
        Prompted::Eof => return Ok(false),
    };

    let last_name = match prompt_parsed::<String, _, _>(input, output, "Enter last name: ")? {
        Prompted::Value(name) => name,
        Prompted::Invalid => {
            writeln!(output, "A name is required.")?;
            return Ok(true);
        }
        Prompted::Eof => return Ok(false),
    };

    let prompt = format!("Enter initial balance (min {}): ", MIN_BALANCE);
    let balance = match prompt_parsed::<Decimal, _, _>(input, output, &prompt)? {
        Prompted::Value(balance) => balance,
        Prompted::Invalid => {
            writeln!(output, "Invalid amount.")?;
            return Ok(true);
        }
        Prompted::Eof => return Ok(false),
    };

    match store.open_account(&first_name, &last_name, balance) {
        Ok(record) => writeln!(output, "Account created successfully.\n{}", record)?,
        Err(e) => writeln!(output, "{}", e)?,
    }

    Ok(true)
}

/// Menu choice 2: look up and render one account
fn balance_enquiry<R: BufRead, W: Write>(
    store: &mut AccountStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let Some(account_number) = prompt_account_number(input, output)? else {
        return Ok(false);
    };

    if let Some(account_number) = account_number {
        match store.balance_enquiry(account_number) {
            Ok(record) => writeln!(output, "Account details:\n{}", record)?,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    Ok(true)
}

/// Menu choice 3: prompt for account and amount, deposit
fn deposit<R: BufRead, W: Write>(
    store: &mut AccountStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let Some(account_number) = prompt_account_number(input, output)? else {
        return Ok(false);
    };
    let Some(account_number) = account_number else {
        return Ok(true);
    };

    let amount = match prompt_parsed::<Decimal, _, _>(input, output, "Enter amount to deposit: ")? {
        Prompted::Value(amount) => amount,
        Prompted::Invalid => {
            writeln!(output, "Invalid amount.")?;
            return Ok(true);
        }
        Prompted::Eof => return Ok(false),
    };

    match store.deposit(account_number, amount) {
        Ok(record) => writeln!(output, "Amount deposited.\n{}", record)?,
        Err(e) => writeln!(output, "{}", e)?,
    }

    Ok(true)
}

/// Menu choice 4: prompt for account and amount, withdraw
fn withdraw<R: BufRead, W: Write>(
    store: &mut AccountStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let Some(account_number) = prompt_account_number(input, output)? else {
        return Ok(false);
    };
    let Some(account_number) = account_number else {
        return Ok(true);
    };

    let amount = match prompt_parsed::<Decimal, _, _>(input, output, "Enter amount to withdraw: ")? {
        Prompted::Value(amount) => amount,
        Prompted::Invalid => {
            writeln!(output, "Invalid amount.")?;
            return Ok(true);
        }
        Prompted::Eof => return Ok(false),
    };

    match store.withdraw(account_number, amount) {
        Ok(record) => writeln!(output, "Amount withdrawn.\n{}", record)?,
        Err(e) => writeln!(output, "{}", e)?,
    }

    Ok(true)
}

/// Menu choice 5: close the account and render what was removed
fn close_account<R: BufRead, W: Write>(
    store: &mut AccountStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let Some(account_number) = prompt_account_number(input, output)? else {
        return Ok(false);
    };

    if let Some(account_number) = account_number {
        match store.close_account(account_number) {
            Ok(record) => writeln!(output, "Account closed:\n{}", record)?,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    Ok(true)
}

/// Menu choice 6: render every account in number order
fn show_all_accounts<W: Write>(store: &AccountStore, output: &mut W) -> io::Result<()> {
    let accounts = store.list_accounts();
    if accounts.is_empty() {
        writeln!(output, "No accounts.")?;
        return Ok(());
    }

    for record in accounts {
        writeln!(output, "{}", record)?;
    }
    Ok(())
}

/// Prompt for an account number
///
/// Returns `None` on end of input, `Some(None)` after printing a message
/// for an unparseable number, `Some(Some(n))` otherwise.
fn prompt_account_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Option<AccountNumber>>> {
    match prompt_parsed::<AccountNumber, _, _>(input, output, "Enter account number: ")? {
        Prompted::Value(number) => Ok(Some(Some(number))),
        Prompted::Invalid => {
            writeln!(output, "Invalid account number.")?;
            Ok(Some(None))
        }
        Prompted::Eof => Ok(None),
    }
}
