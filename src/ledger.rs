// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The expense store. A [`Ledger`] owns the SQLite connection for its whole
//! lifetime; every operation is one synchronous request against it.

use crate::db;
use crate::error::{LedgerError, Result};
use crate::models::{Expense, ExpenseFilter, NewExpense};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use rust_decimal::Decimal;
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

const SELECT_EXPENSE: &str = "SELECT id, date, category, description, amount FROM expenses";

pub struct Ledger {
    pub(crate) conn: Connection,
}

impl Ledger {
    /// Opens (creating if needed) the ledger file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        info!(path = %path.display(), "opened ledger");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        debug!("opened in-memory ledger");
        Ok(Self { conn })
    }

    /// Releases the underlying connection, reporting any failure to flush.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| LedgerError::from(e))?;
        info!("closed ledger");
        Ok(())
    }

    pub fn add(&mut self, expense: NewExpense) -> Result<i64> {
        let e = expense.normalized()?;
        self.conn.execute(
            "INSERT INTO expenses(date, category, description, amount) VALUES (?1, ?2, ?3, ?4)",
            params![
                e.date.to_string(),
                e.category,
                e.description,
                e.amount.to_string()
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, category = %e.category, amount = %e.amount, "added expense");
        Ok(id)
    }

    /// Replaces every mutable field of expense `id`.
    pub fn update(&mut self, id: i64, expense: NewExpense) -> Result<()> {
        let tx = self.conn.transaction()?;
        let exists = tx
            .query_row("SELECT 1 FROM expenses WHERE id=?1", params![id], |_| Ok(()))
            .optional()?
            .is_some();
        if !exists {
            return Err(LedgerError::NotFound(id));
        }
        let e = expense.normalized()?;
        tx.execute(
            "UPDATE expenses SET date=?1, category=?2, description=?3, amount=?4 WHERE id=?5",
            params![
                e.date.to_string(),
                e.category,
                e.description,
                e.amount.to_string(),
                id
            ],
        )?;
        tx.commit()?;
        debug!(id, "updated expense");
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let n = self
            .conn
            .execute("DELETE FROM expenses WHERE id=?1", params![id])?;
        if n == 0 {
            return Err(LedgerError::NotFound(id));
        }
        debug!(id, "deleted expense");
        Ok(())
    }

    pub fn get(&self, id: i64) -> Result<Expense> {
        self.conn
            .query_row(
                &format!("{} WHERE id=?1", SELECT_EXPENSE),
                params![id],
                map_expense,
            )
            .optional()?
            .ok_or(LedgerError::NotFound(id))
    }

    /// Records matching `filter`, ordered by date then id. Each call reads
    /// current state.
    pub fn list(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        filter.validate()?;
        let mut sql = format!("{} WHERE 1=1", SELECT_EXPENSE);
        let mut params_vec: Vec<String> = Vec::new();

        if let Some(year) = filter.year {
            sql.push_str(" AND substr(date,1,4)=?");
            params_vec.push(format!("{:04}", year));
        }
        if let Some(month) = filter.month {
            sql.push_str(" AND substr(date,6,2)=?");
            params_vec.push(format!("{:02}", month));
        }
        if let Some(cat) = filter
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
        {
            sql.push_str(" AND category=?");
            params_vec.push(cat.to_string());
        }
        sql.push_str(" ORDER BY date ASC, id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(params_vec.iter()), map_expense)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Case-insensitive substring match on category or description.
    /// ASCII case folding only, as SQLite's LIKE does.
    pub fn search(&self, keyword: &str) -> Result<Vec<Expense>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return self.list(&ExpenseFilter::all());
        }
        let pattern = format!("%{}%", escape_like(keyword));
        let mut stmt = self.conn.prepare(&format!(
            "{} WHERE category LIKE ?1 ESCAPE '\\' OR description LIKE ?1 ESCAPE '\\' ORDER BY date ASC, id ASC",
            SELECT_EXPENSE
        ))?;
        let rows = stmt.query_map(params![pattern], map_expense)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Distinct categories in use, alphabetical.
    pub fn categories(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT category FROM expenses ORDER BY category")?;
        let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))?)
    }

    pub fn setting(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?)
    }

    pub fn set_setting(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        debug!(key, value, "setting stored");
        Ok(())
    }

    pub fn currency_symbol(&self) -> Result<String> {
        Ok(self
            .setting("currency_symbol")?
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()))
    }

    pub fn set_currency_symbol(&mut self, symbol: &str) -> Result<()> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(LedgerError::validation("currency symbol cannot be empty"));
        }
        self.set_setting("currency_symbol", symbol)
    }
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub(crate) fn decimal_column(r: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let raw: String = r.get(idx)?;
    raw.parse::<Decimal>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn map_expense(r: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: r.get(0)?,
        date: r.get(1)?,
        category: r.get(2)?,
        description: r.get(3)?,
        amount: decimal_column(r, 4)?,
    })
}
