//! Flat-file format handling for account records
//!
//! This module centralizes the durable text format: four consecutive lines
//! per record (account number, first name, last name, balance), records
//! concatenated with no header, record count, or checksum.
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{AccountRecord, BankError};
use rust_decimal::Decimal;
use std::io::Write;

/// Number of lines occupied by one serialized record
pub const LINES_PER_RECORD: usize = 4;

/// Parse one record from its four serialized fields
///
/// # Arguments
///
/// * `fields` - The record's four lines in field order: account number,
///   first name, last name, balance
/// * `first_line` - 1-based line number of the record's first field, used
///   for error reporting
///
/// # Errors
///
/// Returns `ParseError` (carrying the offending field's line number) if the
/// account number or balance does not parse.
pub fn parse_record(fields: [&str; 4], first_line: usize) -> Result<AccountRecord, BankError> {
    let account_number = fields[0].trim().parse().map_err(|_| {
        BankError::parse_error(
            Some(first_line),
            format!("invalid account number '{}'", fields[0].trim()),
        )
    })?;

    let first_name = fields[1].trim().to_string();
    let last_name = fields[2].trim().to_string();

    let balance: Decimal = fields[3].trim().parse().map_err(|_| {
        BankError::parse_error(
            Some(first_line + 3),
            format!("invalid balance '{}'", fields[3].trim()),
        )
    })?;

    Ok(AccountRecord::new(
        account_number,
        first_name,
        last_name,
        balance,
    ))
}

/// Write account records in the flat-file text format
///
/// Emits each record as four lines in field order. The caller is expected
/// to pass records already sorted by account number; the store's ordered
/// map guarantees this.
///
/// # Arguments
///
/// * `accounts` - The records to write
/// * `output` - Writer receiving the serialized text
///
/// # Errors
///
/// Returns `IoError` if a write fails.
pub fn write_accounts_text(
    accounts: &[AccountRecord],
    output: &mut dyn Write,
) -> Result<(), BankError> {
    for account in accounts {
        writeln!(output, "{}", account.account_number())?;
        writeln!(output, "{}", account.first_name())?;
        writeln!(output, "{}", account.last_name())?;
        writeln!(output, "{}", account.balance())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_valid() {
        let record = parse_record(["1", "Asha", "Rao", "1000"], 1).unwrap();

        assert_eq!(record.account_number(), 1);
        assert_eq!(record.first_name(), "Asha");
        assert_eq!(record.last_name(), "Rao");
        assert_eq!(record.balance(), Decimal::new(1000, 0));
    }

    #[test]
    fn test_parse_record_fractional_balance() {
        let record = parse_record(["7", "Mira", "Shah", "1234.56"], 9).unwrap();

        assert_eq!(record.account_number(), 7);
        assert_eq!(record.balance(), Decimal::new(123456, 2));
    }

    #[test]
    fn test_parse_record_trims_whitespace() {
        let record = parse_record(["  3 ", " Asha ", " Rao ", " 750 "], 1).unwrap();

        assert_eq!(record.account_number(), 3);
        assert_eq!(record.first_name(), "Asha");
        assert_eq!(record.last_name(), "Rao");
    }

    #[test]
    fn test_parse_record_invalid_account_number() {
        let result = parse_record(["abc", "Asha", "Rao", "1000"], 5);

        let error = result.unwrap_err();
        assert!(matches!(error, BankError::ParseError { line: Some(5), .. }));
        assert!(error.to_string().contains("invalid account number 'abc'"));
    }

    #[test]
    fn test_parse_record_invalid_balance_reports_balance_line() {
        let result = parse_record(["1", "Asha", "Rao", "not-a-number"], 5);

        let error = result.unwrap_err();
        // Balance is the fourth field of the record starting at line 5
        assert!(matches!(error, BankError::ParseError { line: Some(8), .. }));
        assert!(error.to_string().contains("invalid balance"));
    }

    #[test]
    fn test_write_accounts_text_emits_four_lines_per_record() {
        let accounts = vec![
            AccountRecord::new(1, "Asha".to_string(), "Rao".to_string(), Decimal::new(1000, 0)),
            AccountRecord::new(2, "Vikram".to_string(), "Iyer".to_string(), Decimal::new(2500, 0)),
        ];

        let mut output = Vec::new();
        write_accounts_text(&accounts, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "1\nAsha\nRao\n1000\n2\nVikram\nIyer\n2500\n");
    }

    #[test]
    fn test_write_accounts_text_empty_set_writes_nothing() {
        let mut output = Vec::new();
        write_accounts_text(&[], &mut output).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_format_round_trip() {
        let original = AccountRecord::new(
            12,
            "Asha".to_string(),
            "Rao".to_string(),
            Decimal::new(123456, 2),
        );

        let mut output = Vec::new();
        write_accounts_text(std::slice::from_ref(&original), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), LINES_PER_RECORD);

        let parsed = parse_record([lines[0], lines[1], lines[2], lines[3]], 1).unwrap();
        assert_eq!(parsed, original);
    }
}
