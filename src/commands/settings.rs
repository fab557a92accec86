// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::ledger::Ledger;
use crate::utils::pretty_table;
use anyhow::{Context, Result};

pub fn handle(ledger: &mut Ledger, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let rows = vec![
                vec!["database".to_string(), cfg.db_path.display().to_string()],
                vec!["log filter".to_string(), cfg.log_filter.clone()],
                vec!["currency symbol".to_string(), ledger.currency_symbol()?],
                vec!["expenses".to_string(), ledger.count()?.to_string()],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("set-symbol", sub)) => {
            let symbol = sub.get_one::<String>("symbol").context("symbol is required")?;
            ledger.set_currency_symbol(symbol)?;
            println!("Currency symbol set to '{}'", symbol.trim());
        }
        _ => {}
    }
    Ok(())
}
