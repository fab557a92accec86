// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::DB_ENV;
use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};
use std::path::PathBuf;

fn month_arg(required: bool) -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("1-12")
        .value_parser(value_parser!(u32).range(1..=12))
        .required(required)
}

fn year_arg(required: bool) -> Arg {
    Arg::new("year")
        .long("year")
        .value_name("YYYY")
        .value_parser(value_parser!(i32))
        .required(required)
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Pretty JSON output"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("One JSON object per line"),
    ]
}

fn expense_fields() -> [Arg; 4] {
    [
        Arg::new("date")
            .long("date")
            .value_name("YYYY-MM-DD")
            .required(true),
        Arg::new("category").long("category").required(true),
        Arg::new("amount")
            .long("amount")
            .allow_hyphen_values(true)
            .required(true),
        Arg::new("description").long("description").short('d'),
    ]
}

fn id_arg() -> Arg {
    Arg::new("id")
        .value_parser(value_parser!(i64))
        .required(true)
}

pub fn build_cli() -> Command {
    Command::new("spendbook")
        .about("Personal expense ledger: record expenses, review monthly and category totals")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env(DB_ENV)
                .value_parser(value_parser!(PathBuf))
                .help("Ledger database file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("trace|debug|info|warn|error, or a full tracing filter"),
        )
        .subcommand(Command::new("init").about("Create the ledger database"))
        .subcommand(
            Command::new("add")
                .about("Record an expense")
                .args(expense_fields()),
        )
        .subcommand(
            Command::new("edit")
                .about("Replace every field of an expense")
                .arg(id_arg())
                .args(expense_fields()),
        )
        .subcommand(Command::new("rm").about("Delete an expense").arg(id_arg()))
        .subcommand(Command::new("show").about("Show one expense").arg(id_arg()))
        .subcommand(
            Command::new("list")
                .about("List expenses by date")
                .arg(month_arg(false))
                .arg(year_arg(false))
                .arg(Arg::new("category").long("category"))
                .args(json_args()),
        )
        .subcommand(
            Command::new("search")
                .about("Find expenses by category or description")
                .arg(Arg::new("keyword").required(true))
                .args(json_args()),
        )
        .subcommand(Command::new("categories").about("Categories in use"))
        .subcommand(
            Command::new("report")
                .about("Aggregate reports")
                .subcommand_required(true)
                .subcommand(
                    Command::new("total")
                        .about("Total spent in a month")
                        .arg(month_arg(true))
                        .arg(year_arg(true)),
                )
                .subcommand(
                    Command::new("breakdown")
                        .about("Spend per category")
                        .arg(month_arg(false).requires("year"))
                        .arg(year_arg(false))
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .conflicts_with_all(["month", "year"]),
                        )
                        .group(
                            ArgGroup::new("period")
                                .args(["month", "all"])
                                .required(true),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("daily")
                        .about("Spend per day in a month")
                        .arg(month_arg(true))
                        .arg(year_arg(true))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("monthly")
                        .about("Monthly summary with category shares")
                        .arg(month_arg(true))
                        .arg(year_arg(true))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("range")
                        .about("Total spent in [from, to)")
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly budgets")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set")
                        .arg(month_arg(true))
                        .arg(year_arg(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(
                    Command::new("status")
                        .arg(month_arg(true))
                        .arg(year_arg(true))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("clear")
                        .arg(month_arg(true))
                        .arg(year_arg(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export expenses to CSV or JSON")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                )
                .arg(Arg::new("out").long("out").required(true))
                .arg(month_arg(false))
                .arg(year_arg(false))
                .arg(Arg::new("category").long("category")),
        )
        .subcommand(
            Command::new("config")
                .about("Stored preferences")
                .subcommand_required(true)
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set-symbol")
                        .about("Currency symbol used when printing amounts")
                        .arg(Arg::new("symbol").required(true)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn month_outside_range_is_rejected_by_parser() {
        let res = build_cli().try_get_matches_from([
            "spendbook", "report", "total", "--month", "13", "--year", "2024",
        ]);
        assert!(res.is_err());
    }
}
