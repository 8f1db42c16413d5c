// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, TimeZone};
use rust_decimal::Decimal;

use pocketledger::{
    cli, commands::exporter, models::{Direction, Record}, store::Store,
};

fn ms(year: i32, month: u32, day: u32) -> i64 {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap()
        .timestamp_millis()
}

fn setup(dir: &tempfile::TempDir) -> Store {
    let store = Store::open(dir.path().join("records.json"));
    store
        .add(Decimal::from(100), "Food", "groceries", ms(2025, 1, 15), Direction::Expense)
        .unwrap();
    store
        .add(Decimal::from(2000), "Salary", "", ms(2025, 1, 1), Direction::Income)
        .unwrap();
    store
        .add(Decimal::from(55), "Bills", "", ms(2025, 2, 3), Direction::Expense)
        .unwrap();
    store
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    let Some(("export", m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    m.clone()
}

#[test]
fn csv_export_is_date_ordered_with_header() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);
    let out = dir.path().join("out.csv");
    let sub = export_matches(&[
        "pocketledger",
        "export",
        "records",
        "--format",
        "csv",
        "--out",
        out.to_str().unwrap(),
    ]);
    exporter::handle(&store, &sub).unwrap();

    let body = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines[0], "id,date,amount,category,description,direction");
    assert_eq!(lines.len(), 4);
    // Salary on Jan 1 sorts first despite being recorded second
    assert!(lines[1].contains("Salary"));
    assert!(lines[1].contains("income"));
    assert!(lines[2].contains("groceries"));
}

#[test]
fn csv_export_honors_month_filter() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);
    let out = dir.path().join("jan.csv");
    let sub = export_matches(&[
        "pocketledger",
        "export",
        "records",
        "--format",
        "csv",
        "--out",
        out.to_str().unwrap(),
        "--month",
        "2025-01",
    ]);
    exporter::handle(&store, &sub).unwrap();

    let body = std::fs::read_to_string(&out).unwrap();
    assert_eq!(body.lines().count(), 3);
    assert!(!body.contains("Bills"));
}

#[test]
fn json_export_round_trips_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);
    let out = dir.path().join("out.json");
    let sub = export_matches(&[
        "pocketledger",
        "export",
        "records",
        "--format",
        "json",
        "--out",
        out.to_str().unwrap(),
    ]);
    exporter::handle(&store, &sub).unwrap();

    let body = std::fs::read_to_string(&out).unwrap();
    let exported: Vec<Record> = serde_json::from_str(&body).unwrap();
    assert_eq!(exported.len(), 3);
    assert_eq!(exported[0].category, "Salary");
    assert_eq!(exported[0].amount, Decimal::from(2000));
}
