// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::utils::{fmt_money, maybe_print_json, month_label, parse_date, pretty_table};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("total", sub)) => total(ledger, sub)?,
        Some(("breakdown", sub)) => breakdown(ledger, sub)?,
        Some(("daily", sub)) => daily(ledger, sub)?,
        Some(("monthly", sub)) => monthly(ledger, sub)?,
        Some(("range", sub)) => range(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

pub(crate) fn month_year(sub: &clap::ArgMatches) -> Result<(u32, i32)> {
    let month = *sub.get_one::<u32>("month").context("--month is required")?;
    let year = *sub.get_one::<i32>("year").context("--year is required")?;
    Ok((month, year))
}

fn total(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let (month, year) = month_year(sub)?;
    let total = ledger.monthly_total(month, year)?;
    let symbol = ledger.currency_symbol()?;
    println!("{}: {}", month_label(month, year), fmt_money(&total, &symbol));
    Ok(())
}

/// Label/value pair, the shape chart renderers consume.
#[derive(Debug, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub amount: Decimal,
}

pub fn breakdown_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<CategoryRow>> {
    let agg = if sub.get_flag("all") {
        ledger.category_totals_all()?
    } else {
        let (month, year) = month_year(sub)?;
        ledger.category_breakdown(month, year)?
    };
    let mut items: Vec<_> = agg.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(items
        .into_iter()
        .map(|(category, amount)| CategoryRow { category, amount })
        .collect())
}

fn breakdown(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let data = breakdown_rows(ledger, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let symbol = ledger.currency_symbol()?;
        let rows = data
            .into_iter()
            .map(|r| vec![r.category, fmt_money(&r.amount, &symbol)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

fn daily(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let (month, year) = month_year(sub)?;
    let data = ledger.daily_totals(month, year)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let symbol = ledger.currency_symbol()?;
        let rows = data
            .iter()
            .map(|d| vec![d.date.to_string(), fmt_money(&d.total, &symbol)])
            .collect();
        println!("{}", pretty_table(&["Date", "Spent"], rows));
    }
    Ok(())
}

fn monthly(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let (month, year) = month_year(sub)?;
    let report = ledger.monthly_report(month, year)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let symbol = ledger.currency_symbol()?;
    println!("Expense report: {}", month_label(month, year));
    println!("Total expenses: {}", fmt_money(&report.total, &symbol));
    println!("Transactions:   {}", report.count);
    let rows = report
        .shares
        .iter()
        .map(|s| {
            vec![
                s.category.clone(),
                fmt_money(&s.amount, &symbol),
                format!("{}%", s.percent),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Amount", "Share"], rows));
    Ok(())
}

fn range(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let from = parse_date(sub.get_one::<String>("from").context("--from is required")?)?;
    let to = parse_date(sub.get_one::<String>("to").context("--to is required")?)?;
    let total = ledger.range_total(from, to)?;
    let symbol = ledger.currency_symbol()?;
    println!("{} to {} (exclusive): {}", from, to, fmt_money(&total, &symbol));
    Ok(())
}
