// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::{db, utils::DEFAULT_LOG_FILTER};
use anyhow::Result;
use std::path::PathBuf;

pub const DB_ENV: &str = "SPENDBOOK_DB";

/// Runtime settings resolved from flags, environment and platform defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// `--db` (or `SPENDBOOK_DB`, wired through clap) wins over the platform
    /// data dir; `--log-level` wins over `RUST_LOG`.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let db_path = match m.get_one::<PathBuf>("db") {
            Some(p) => p.clone(),
            None => db::default_db_path()?,
        };
        let log_filter = m
            .get_one::<String>("log-level")
            .map(|lvl| level_directive(lvl))
            .or_else(|| std::env::var("RUST_LOG").ok().filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Ok(Self {
            db_path,
            log_filter,
        })
    }
}

// A bare level applies to this crate only; anything else is taken as a full filter.
fn level_directive(lvl: &str) -> String {
    match lvl.to_ascii_lowercase().as_str() {
        l @ ("trace" | "debug" | "info" | "warn" | "error" | "off") => format!("spendbook={}", l),
        _ => lvl.to_string(),
    }
}
