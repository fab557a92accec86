// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::ledger::{Ledger, decimal_column};
use crate::models::{CategoryShare, DailyTotal, MonthlyReport};
use crate::utils::{add_amount, month_bounds, percent_of};
use chrono::NaiveDate;
use rusqlite::params;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

impl Ledger {
    /// Sum of every amount dated in the given month. Zero when nothing matches.
    pub fn monthly_total(&self, month: u32, year: i32) -> Result<Decimal> {
        let (start, end) = month_bounds(month, year)?;
        self.range_total(start, end)
    }

    /// Sum over the half-open date range `[start, end)`.
    pub fn range_total(&self, start: NaiveDate, end: NaiveDate) -> Result<Decimal> {
        if end <= start {
            return Err(LedgerError::validation(format!(
                "empty range: {} is not after {}",
                end, start
            )));
        }
        let mut stmt = self
            .conn
            .prepare("SELECT amount FROM expenses WHERE date >= ?1 AND date < ?2")?;
        let rows = stmt.query_map(params![start.to_string(), end.to_string()], |r| {
            decimal_column(r, 0)
        })?;
        let mut total = Decimal::ZERO;
        for row in rows {
            total = add_amount(total, row?)?;
        }
        Ok(total)
    }

    /// Per-category sums within a month. Categories without records are absent.
    pub fn category_breakdown(&self, month: u32, year: i32) -> Result<BTreeMap<String, Decimal>> {
        let (start, end) = month_bounds(month, year)?;
        let mut stmt = self.conn.prepare(
            "SELECT category, amount FROM expenses WHERE date >= ?1 AND date < ?2",
        )?;
        let rows = stmt.query_map(params![start.to_string(), end.to_string()], |r| {
            Ok((r.get::<_, String>(0)?, decimal_column(r, 1)?))
        })?;
        let mut agg = BTreeMap::new();
        for row in rows {
            let (cat, amt) = row?;
            let slot = agg.entry(cat).or_insert(Decimal::ZERO);
            *slot = add_amount(*slot, amt)?;
        }
        Ok(agg)
    }

    /// Per-category sums across the whole ledger.
    pub fn category_totals_all(&self) -> Result<BTreeMap<String, Decimal>> {
        let mut stmt = self.conn.prepare("SELECT category, amount FROM expenses")?;
        let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, decimal_column(r, 1)?)))?;
        let mut agg = BTreeMap::new();
        for row in rows {
            let (cat, amt) = row?;
            let slot = agg.entry(cat).or_insert(Decimal::ZERO);
            *slot = add_amount(*slot, amt)?;
        }
        Ok(agg)
    }

    /// Per-day sums within a month, ascending. Days without records are absent.
    pub fn daily_totals(&self, month: u32, year: i32) -> Result<Vec<DailyTotal>> {
        let (start, end) = month_bounds(month, year)?;
        let mut stmt = self.conn.prepare(
            "SELECT date, amount FROM expenses WHERE date >= ?1 AND date < ?2 ORDER BY date",
        )?;
        let rows = stmt.query_map(params![start.to_string(), end.to_string()], |r| {
            Ok((r.get::<_, NaiveDate>(0)?, decimal_column(r, 1)?))
        })?;
        let mut out: Vec<DailyTotal> = Vec::new();
        for row in rows {
            let (date, amt) = row?;
            match out.last_mut() {
                Some(last) if last.date == date => last.total = add_amount(last.total, amt)?,
                _ => out.push(DailyTotal { date, total: amt }),
            }
        }
        Ok(out)
    }

    /// Total, record count and category shares (largest first) for a month.
    pub fn monthly_report(&self, month: u32, year: i32) -> Result<MonthlyReport> {
        let (start, end) = month_bounds(month, year)?;
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM expenses WHERE date >= ?1 AND date < ?2",
            params![start.to_string(), end.to_string()],
            |r| r.get(0),
        )?;
        let breakdown = self.category_breakdown(month, year)?;
        let total = breakdown
            .values()
            .try_fold(Decimal::ZERO, |acc, amt| add_amount(acc, *amt))?;

        let mut shares = Vec::with_capacity(breakdown.len());
        for (category, amount) in breakdown {
            shares.push(CategoryShare {
                percent: percent_of(amount, total)?,
                category,
                amount,
            });
        }
        shares.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(MonthlyReport {
            year,
            month,
            total,
            count: count as usize,
            shares,
        })
    }
}
