// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budgets;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod utils;

pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use models::{
    BudgetStatus, CategoryShare, DailyTotal, Expense, ExpenseFilter, MonthlyReport, NewExpense,
};
