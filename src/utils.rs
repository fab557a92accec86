// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use std::sync::Once;

pub const DEFAULT_LOG_FILTER: &str = "spendbook=warn";

/// Largest amount accepted for a single expense or budget (one trillion).
/// Keeps every sum and percentage well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

static TRACING_INIT: Once = Once::new();

/// Installs the global fmt subscriber (stderr) once per process. An
/// unparsable filter falls back to the default directive.
pub fn init_tracing(filter: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::validation(format!("invalid date '{}', expected YYYY-MM-DD", s))
    })?;
    validate_year(date.year())?;
    Ok(date)
}

pub fn validate_amount(amount: Decimal) -> Result<()> {
    if amount > MAX_AMOUNT {
        return Err(LedgerError::validation(format!(
            "amount {} exceeds the maximum of {}",
            amount, MAX_AMOUNT
        )));
    }
    Ok(())
}

/// `acc + amount`, failing instead of overflowing.
pub fn add_amount(acc: Decimal, amount: Decimal) -> Result<Decimal> {
    acc.checked_add(amount)
        .ok_or_else(|| LedgerError::validation("total exceeds the supported range"))
}

/// Parses a user supplied amount. Non-numeric text is rejected, never coerced.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_| LedgerError::validation(format!("invalid amount '{}'", s)))
}

pub fn validate_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(LedgerError::validation(format!(
            "invalid month {}, expected 1-12",
            month
        )))
    }
}

// Dates are stored as YYYY-MM-DD text, so ordering only holds for four digit years.
pub fn validate_year(year: i32) -> Result<()> {
    if (1..=9999).contains(&year) {
        Ok(())
    } else {
        Err(LedgerError::validation(format!(
            "invalid year {}, expected 1-9999",
            year
        )))
    }
}

/// Half-open `[first day, first day of next month)` bounds for a month.
pub fn month_bounds(month: u32, year: i32) -> Result<(NaiveDate, NaiveDate)> {
    validate_month(month)?;
    validate_year(year)?;
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| LedgerError::validation(format!("invalid month {}-{}", year, month)))?;
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(ny, nm, 1)
        .ok_or_else(|| LedgerError::validation(format!("invalid month {}-{}", year, month)))?;
    Ok((start, end))
}

pub fn month_label(month: u32, year: i32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{:04}-{:02}", year, month))
}

/// `part` as a percentage of `whole`, one decimal place. Zero when `whole` is zero.
pub fn percent_of(part: Decimal, whole: Decimal) -> Result<Decimal> {
    if whole.is_zero() {
        return Ok(Decimal::ZERO);
    }
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|p| p.checked_div(whole))
        .map(|p| p.round_dp(1))
        .ok_or_else(|| LedgerError::validation("percentage exceeds the supported range"))
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> anyhow::Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v).context("Serialize JSON")?);
        return Ok(true);
    }
    if jsonl_flag {
        // arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn december_bounds_roll_into_next_year() {
        let (start, end) = month_bounds(12, 2024).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        assert!(month_bounds(0, 2024).unwrap_err().is_validation());
        assert!(month_bounds(13, 2024).unwrap_err().is_validation());
    }

    #[test]
    fn parse_date_rejects_impossible_days() {
        assert!(parse_date("2024-02-29").is_ok());
        assert!(parse_date("2023-02-29").unwrap_err().is_validation());
        assert!(parse_date("05/03/2024").unwrap_err().is_validation());
    }

    #[test]
    fn parse_amount_keeps_scale_and_rejects_text() {
        assert_eq!(parse_amount(" 12.50 ").unwrap().to_string(), "12.50");
        assert!(parse_amount("twelve").unwrap_err().is_validation());
        assert!(parse_amount("").unwrap_err().is_validation());
    }

    #[test]
    fn percent_rounds_to_one_place() {
        let part = Decimal::from_str("1").unwrap();
        let whole = Decimal::from_str("3").unwrap();
        assert_eq!(percent_of(part, whole).unwrap().to_string(), "33.3");
        assert_eq!(percent_of(part, Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn max_amount_is_one_trillion() {
        assert_eq!(MAX_AMOUNT, Decimal::from_str("1000000000000").unwrap());
        assert!(validate_amount(MAX_AMOUNT).is_ok());
        assert!(validate_amount(MAX_AMOUNT + Decimal::new(1, 2)).unwrap_err().is_validation());
    }

    #[test]
    fn overflowing_arithmetic_is_an_error() {
        assert!(add_amount(Decimal::MAX, Decimal::ONE).unwrap_err().is_validation());
        assert!(percent_of(Decimal::MAX, Decimal::ONE).unwrap_err().is_validation());
        assert_eq!(add_amount(Decimal::ONE, Decimal::ONE).unwrap(), Decimal::TWO);
    }

    #[test]
    fn money_uses_two_places() {
        let d = Decimal::from_str("3").unwrap();
        assert_eq!(fmt_money(&d, "₹"), "₹3.00");
    }
}
