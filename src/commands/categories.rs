// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::utils::pretty_table;
use anyhow::Result;

/// Prints the distinct categories in use and returns them.
pub fn handle(ledger: &Ledger) -> Result<Vec<String>> {
    let names = ledger.categories()?;
    let data: Vec<Vec<String>> = names.iter().map(|n| vec![n.clone()]).collect();
    println!("{}", pretty_table(&["Category"], data));
    Ok(names)
}
