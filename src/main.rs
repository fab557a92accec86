// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use spendbook::{Ledger, cli, commands, config::Config, utils};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    let cfg = Config::from_matches(&matches)?;
    utils::init_tracing(&cfg.log_filter);

    let mut ledger = Ledger::open(&cfg.db_path)
        .with_context(|| format!("Open ledger at {}", cfg.db_path.display()))?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger initialized at {}", cfg.db_path.display());
        }
        Some(("add", sub)) => {
            commands::expenses::add(&mut ledger, sub)?;
        }
        Some(("edit", sub)) => commands::expenses::edit(&mut ledger, sub)?,
        Some(("rm", sub)) => commands::expenses::remove(&mut ledger, sub)?,
        Some(("show", sub)) => commands::expenses::show(&ledger, sub)?,
        Some(("list", sub)) => commands::expenses::list(&ledger, sub)?,
        Some(("search", sub)) => commands::expenses::search(&ledger, sub)?,
        Some(("categories", _)) => {
            commands::categories::handle(&ledger)?;
        }
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut ledger, sub)?,
        Some(("export", sub)) => {
            commands::exporter::handle(&ledger, sub)?;
        }
        Some(("config", sub)) => commands::settings::handle(&mut ledger, &cfg, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }

    ledger.close()?;
    Ok(())
}
