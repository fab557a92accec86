// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::utils::{parse_amount, parse_date, validate_amount, validate_month, validate_year};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A persisted expense. `id` is assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
}

/// The mutable fields of an expense, as submitted to `add` or `update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub amount: Decimal,
}

impl NewExpense {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    /// Builds an expense from raw form/CLI text. A missing description
    /// becomes empty text.
    pub fn parse(
        date: &str,
        category: &str,
        description: Option<&str>,
        amount: &str,
    ) -> Result<Self> {
        let expense = Self::new(
            parse_date(date)?,
            category,
            description.unwrap_or_default(),
            parse_amount(amount)?,
        );
        expense.validate()?;
        Ok(expense)
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount < Decimal::ZERO {
            return Err(LedgerError::validation(format!(
                "amount must be non-negative, got {}",
                self.amount
            )));
        }
        validate_amount(self.amount)?;
        if self.category.trim().is_empty() {
            return Err(LedgerError::validation("category is required"));
        }
        validate_year(self.date.year())
    }

    /// Trimmed copy of the text fields, validated.
    pub(crate) fn normalized(self) -> Result<Self> {
        let out = Self {
            date: self.date,
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            amount: self.amount,
        };
        out.validate()?;
        Ok(out)
    }
}

/// Optional constraints for `list`. The default matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFilter {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub category: Option<String>,
}

impl ExpenseFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_month(month: u32, year: i32) -> Self {
        Self {
            month: Some(month),
            year: Some(year),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(m) = self.month {
            validate_month(m)?;
        }
        if let Some(y) = self.year {
            validate_year(y)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    pub percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub total: Decimal,
    pub count: usize,
    pub shares: Vec<CategoryShare>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub year: i32,
    pub month: u32,
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percent_used: Decimal,
    pub over_budget: bool,
}
