// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::ledger::{Ledger, decimal_column};
use crate::models::BudgetStatus;
use crate::utils::{month_bounds, percent_of, validate_amount};
use rusqlite::{OptionalExtension, params};
use rust_decimal::Decimal;
use tracing::debug;

impl Ledger {
    /// Stores the spending limit for a month, replacing any previous one.
    pub fn set_budget(&mut self, month: u32, year: i32, amount: Decimal) -> Result<()> {
        month_bounds(month, year)?;
        if amount <= Decimal::ZERO {
            return Err(LedgerError::validation(format!(
                "budget must be positive, got {}",
                amount
            )));
        }
        validate_amount(amount)?;
        self.conn.execute(
            "INSERT INTO budgets(year, month, amount) VALUES (?1, ?2, ?3)
             ON CONFLICT(year, month) DO UPDATE SET amount=excluded.amount",
            params![year, month, amount.to_string()],
        )?;
        debug!(year, month, amount = %amount, "budget set");
        Ok(())
    }

    pub fn budget(&self, month: u32, year: i32) -> Result<Option<Decimal>> {
        month_bounds(month, year)?;
        Ok(self
            .conn
            .query_row(
                "SELECT amount FROM budgets WHERE year=?1 AND month=?2",
                params![year, month],
                |r| decimal_column(r, 0),
            )
            .optional()?)
    }

    /// Removes a month's budget. Returns whether one existed.
    pub fn clear_budget(&mut self, month: u32, year: i32) -> Result<bool> {
        month_bounds(month, year)?;
        let n = self.conn.execute(
            "DELETE FROM budgets WHERE year=?1 AND month=?2",
            params![year, month],
        )?;
        Ok(n > 0)
    }

    /// Spending against the month's budget, or `None` when no budget is set.
    pub fn budget_status(&self, month: u32, year: i32) -> Result<Option<BudgetStatus>> {
        let Some(budget) = self.budget(month, year)? else {
            return Ok(None);
        };
        let spent = self.monthly_total(month, year)?;
        let remaining = budget
            .checked_sub(spent)
            .ok_or_else(|| LedgerError::validation("remaining budget exceeds the supported range"))?;
        Ok(Some(BudgetStatus {
            year,
            month,
            budget,
            spent,
            remaining,
            percent_used: percent_of(spent, budget)?,
            over_budget: spent > budget,
        }))
    }
}
