// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::json;
use spendbook::{Ledger, NewExpense, cli, commands::exporter};
use tempfile::tempdir;

fn ledger() -> Ledger {
    let mut ledger = Ledger::open_in_memory().unwrap();
    for (date, cat, desc, amt) in [
        ("2025-01-02", "Groceries", "Weekly run, corner shop", "12.34"),
        ("2025-01-05", "Travel", "", "3.00"),
        ("2025-02-01", "Groceries", "", "7"),
    ] {
        ledger
            .add(NewExpense::parse(date, cat, Some(desc), amt).unwrap())
            .unwrap();
    }
    ledger
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["spendbook", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("export", m)) => m.clone(),
        _ => panic!("no export subcommand"),
    }
}

#[test]
fn export_json_writes_filtered_records() {
    let ledger = ledger();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let m = export_matches(&[
        "--format", "json", "--out", &out_str, "--month", "1", "--year", "2025",
    ]);
    assert_eq!(exporter::handle(&ledger, &m).unwrap(), 2);

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": 1,
                "date": "2025-01-02",
                "category": "Groceries",
                "description": "Weekly run, corner shop",
                "amount": "12.34"
            },
            {
                "id": 2,
                "date": "2025-01-05",
                "category": "Travel",
                "description": "",
                "amount": "3.00"
            }
        ])
    );
}

#[test]
fn export_csv_quotes_and_orders_rows() {
    let ledger = ledger();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let m = export_matches(&["--out", &out_str, "--category", "Groceries"]);
    assert_eq!(exporter::handle(&ledger, &m).unwrap(), 2);

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "date", "category", "amount", "description"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][4], "Weekly run, corner shop");
    assert_eq!(&rows[1][1], "2025-02-01");
    assert_eq!(&rows[1][3], "7");
}
