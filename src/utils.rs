// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

const UA: &str = concat!(
    "pocketledger/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/pocketledger)"
);

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Parses "YYYY-MM" into a (zero-based month, year) pair.
pub fn parse_month(s: &str) -> Result<(u32, i32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok((date.month0(), date.year()))
}

/// Entry-boundary amount parse. Unparseable or non-positive input yields
/// `None` and the caller drops the mutation without comment.
pub fn parse_entry_amount(s: &str) -> Option<Decimal> {
    match s.parse::<Decimal>() {
        Ok(d) if d > Decimal::ZERO => Some(d),
        _ => None,
    }
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("₹{:.2}", d)
}

/// Local midnight of the given date, as epoch milliseconds.
pub fn date_to_epoch_ms(date: NaiveDate) -> Result<i64> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .with_context(|| format!("Invalid date {}", date))?;
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("No local midnight on {}", date))?;
    Ok(local.timestamp_millis())
}

pub fn fmt_timestamp(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%d %b %Y, %I:%M %p")
            .to_string(),
        None => "-".to_string(),
    }
}

/// ISO date for machine-readable output.
pub fn fmt_date_iso(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(utc) => utc.with_timezone(&Local).format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
