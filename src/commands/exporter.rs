// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::expenses::filter_from;
use crate::ledger::Ledger;
use anyhow::{Context, Result, bail};

pub fn handle(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<usize> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub.get_one::<String>("out").context("--out is required")?;
    let rows = ledger.list(&filter_from(sub))?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr =
                csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record(["id", "date", "category", "amount", "description"])?;
            for e in &rows {
                wtr.write_record([
                    e.id.to_string(),
                    e.date.to_string(),
                    e.category.clone(),
                    e.amount.to_string(),
                    e.description.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Write {}", out))?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported {} expenses to {}", rows.len(), out);
    Ok(rows.len())
}
