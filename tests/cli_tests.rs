// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use spendbook::commands::{categories, expenses, reports};
use spendbook::{ExpenseFilter, Ledger, cli};

fn sub(args: &[&str]) -> (String, clap::ArgMatches) {
    let mut argv = vec!["spendbook"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let (name, m) = matches.subcommand().expect("subcommand");
    (name.to_string(), m.clone())
}

#[test]
fn add_and_edit_through_cli_matches() {
    let mut ledger = Ledger::open_in_memory().unwrap();
    let (_, add_m) = sub(&[
        "add", "--date", "2025-01-03", "--category", "Food", "--amount", "9.99", "-d", "pizza",
    ]);
    let id = expenses::add(&mut ledger, &add_m).unwrap();

    let id_s = id.to_string();
    let (_, edit_m) = sub(&[
        "edit", &id_s, "--date", "2025-01-04", "--category", "Food", "--amount", "11",
    ]);
    expenses::edit(&mut ledger, &edit_m).unwrap();

    let e = ledger.get(id).unwrap();
    assert_eq!(e.date.to_string(), "2025-01-04");
    assert_eq!(e.description, "");
    assert_eq!(e.amount.to_string(), "11");
}

#[test]
fn negative_amount_from_cli_is_rejected() {
    let mut ledger = Ledger::open_in_memory().unwrap();
    let (_, add_m) = sub(&[
        "add", "--date", "2025-01-03", "--category", "Food", "--amount", "-5",
    ]);
    let err = expenses::add(&mut ledger, &add_m).unwrap_err();
    let ledger_err = err.downcast_ref::<spendbook::LedgerError>().unwrap();
    assert!(ledger_err.is_validation());
    assert!(ledger.list(&ExpenseFilter::all()).unwrap().is_empty());
}

#[test]
fn list_filter_is_read_from_flags() {
    let (_, m) = sub(&["list", "--month", "3", "--year", "2024", "--category", "Food"]);
    let f = expenses::filter_from(&m);
    assert_eq!(f, ExpenseFilter::for_month(3, 2024).with_category("Food"));
}

#[test]
fn breakdown_rows_are_sorted_largest_first() {
    let mut ledger = Ledger::open_in_memory().unwrap();
    for (cat, amt) in [("Food", "12.5"), ("Travel", "30"), ("Bills", "12.5")] {
        let (_, m) = sub(&[
            "add", "--date", "2024-03-05", "--category", cat, "--amount", amt,
        ]);
        expenses::add(&mut ledger, &m).unwrap();
    }
    let (_, report_m) = sub(&["report", "breakdown", "--month", "3", "--year", "2024"]);
    let Some(("breakdown", m)) = report_m.subcommand() else {
        panic!("no breakdown subcommand");
    };
    let rows = reports::breakdown_rows(&ledger, m).unwrap();
    let flat: Vec<(&str, String)> = rows
        .iter()
        .map(|r| (r.category.as_str(), r.amount.to_string()))
        .collect();
    assert_eq!(
        flat,
        vec![
            ("Travel", "30".to_string()),
            ("Bills", "12.5".to_string()),
            ("Food", "12.5".to_string())
        ]
    );
}

#[test]
fn breakdown_values_are_exact_and_add_up_to_monthly_total() {
    let mut ledger = Ledger::open_in_memory().unwrap();
    for amt in ["0.005", "0.005", "1.001"] {
        let (_, m) = sub(&[
            "add", "--date", "2024-03-05", "--category", "Food", "--amount", amt,
        ]);
        expenses::add(&mut ledger, &m).unwrap();
    }
    let (_, report_m) = sub(&["report", "breakdown", "--month", "3", "--year", "2024"]);
    let Some(("breakdown", m)) = report_m.subcommand() else {
        panic!("no breakdown subcommand");
    };
    let rows = reports::breakdown_rows(&ledger, m).unwrap();
    let as_json = serde_json::to_value(&rows).unwrap();
    assert_eq!(
        as_json,
        serde_json::json!([{ "category": "Food", "amount": "1.011" }])
    );
    assert_eq!(rows[0].amount, ledger.monthly_total(3, 2024).unwrap());
}

#[test]
fn categories_command_lists_distinct_names() {
    let mut ledger = Ledger::open_in_memory().unwrap();
    for cat in ["Travel", "Food", "Travel"] {
        let (_, m) = sub(&[
            "add", "--date", "2024-03-05", "--category", cat, "--amount", "1",
        ]);
        expenses::add(&mut ledger, &m).unwrap();
    }
    let names = categories::handle(&ledger).unwrap();
    assert_eq!(names, vec!["Food", "Travel"]);
}

#[test]
fn breakdown_requires_a_period() {
    let res = cli::build_cli().try_get_matches_from(["spendbook", "report", "breakdown"]);
    assert!(res.is_err());
    let res = cli::build_cli().try_get_matches_from([
        "spendbook", "report", "breakdown", "--month", "3",
    ]);
    assert!(res.is_err());
}
