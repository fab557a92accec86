// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::{Expense, ExpenseFilter, NewExpense};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result};

/// Reads the shared `--date/--category/--description/--amount` fields.
pub fn expense_from(sub: &clap::ArgMatches) -> Result<NewExpense> {
    let date = sub.get_one::<String>("date").context("--date is required")?;
    let category = sub
        .get_one::<String>("category")
        .context("--category is required")?;
    let amount = sub
        .get_one::<String>("amount")
        .context("--amount is required")?;
    let description = sub.get_one::<String>("description").map(|s| s.as_str());
    Ok(NewExpense::parse(date, category, description, amount)?)
}

pub fn filter_from(sub: &clap::ArgMatches) -> ExpenseFilter {
    ExpenseFilter {
        month: sub.get_one::<u32>("month").copied(),
        year: sub.get_one::<i32>("year").copied(),
        category: sub.get_one::<String>("category").cloned(),
    }
}

fn id_from(sub: &clap::ArgMatches) -> Result<i64> {
    sub.get_one::<i64>("id").copied().context("expense id is required")
}

pub fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<i64> {
    let expense = expense_from(sub)?;
    let symbol = ledger.currency_symbol()?;
    let summary = format!(
        "{} on {} ({})",
        fmt_money(&expense.amount, &symbol),
        expense.date,
        expense.category.trim()
    );
    let id = ledger.add(expense)?;
    println!("Recorded #{}: {}", id, summary);
    Ok(id)
}

pub fn edit(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = id_from(sub)?;
    let expense = expense_from(sub)?;
    ledger.update(id, expense)?;
    println!("Updated #{}", id);
    Ok(())
}

pub fn remove(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = id_from(sub)?;
    ledger.delete(id)?;
    println!("Deleted #{}", id);
    Ok(())
}

pub fn show(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let e = ledger.get(id_from(sub)?)?;
    let symbol = ledger.currency_symbol()?;
    println!("{}", expense_table(&[e], &symbol));
    Ok(())
}

pub fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let rows = ledger.list(&filter_from(sub))?;
    print_expenses(ledger, sub, &rows)
}

pub fn search(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let keyword = sub
        .get_one::<String>("keyword")
        .context("keyword is required")?;
    let rows = ledger.search(keyword)?;
    print_expenses(ledger, sub, &rows)
}

fn print_expenses(ledger: &Ledger, sub: &clap::ArgMatches, rows: &[Expense]) -> Result<()> {
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let symbol = ledger.currency_symbol()?;
        println!("{}", expense_table(rows, &symbol));
    }
    Ok(())
}

fn expense_table(rows: &[Expense], symbol: &str) -> comfy_table::Table {
    let data = rows
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.to_string(),
                e.category.clone(),
                e.description.clone(),
                fmt_money(&e.amount, symbol),
            ]
        })
        .collect();
    pretty_table(&["ID", "Date", "Category", "Description", "Amount"], data)
}
