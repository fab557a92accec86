// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::reports::month_year;
use crate::ledger::Ledger;
use crate::utils::{fmt_money, maybe_print_json, month_label, parse_amount, pretty_table};
use anyhow::{Context, Result};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(ledger, sub)?,
        Some(("status", sub)) => status(ledger, sub)?,
        Some(("clear", sub)) => clear(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let (month, year) = month_year(sub)?;
    let amount = parse_amount(sub.get_one::<String>("amount").context("--amount is required")?)?;
    ledger.set_budget(month, year, amount)?;
    let symbol = ledger.currency_symbol()?;
    println!(
        "Budget for {} set to {}",
        month_label(month, year),
        fmt_money(&amount, &symbol)
    );
    Ok(())
}

fn status(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let (month, year) = month_year(sub)?;
    let Some(st) = ledger.budget_status(month, year)? else {
        println!("No budget set for {}", month_label(month, year));
        return Ok(());
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &st)? {
        return Ok(());
    }
    let symbol = ledger.currency_symbol()?;
    let flag = if st.over_budget { "OVER" } else { "ok" };
    println!(
        "{}",
        pretty_table(
            &["Month", "Budget", "Spent", "Remaining", "Used", "Status"],
            vec![vec![
                month_label(month, year),
                fmt_money(&st.budget, &symbol),
                fmt_money(&st.spent, &symbol),
                fmt_money(&st.remaining, &symbol),
                format!("{}%", st.percent_used),
                flag.to_string(),
            ]],
        )
    );
    Ok(())
}

fn clear(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let (month, year) = month_year(sub)?;
    if ledger.clear_budget(month, year)? {
        println!("Cleared budget for {}", month_label(month, year));
    } else {
        println!("No budget set for {}", month_label(month, year));
    }
    Ok(())
}
