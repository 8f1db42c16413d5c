// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::engine;
use crate::models::Record;
use crate::store::Store;
use crate::utils::{fmt_date_iso, parse_month};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("records", sub)) => export_records(store, sub),
        _ => Ok(()),
    }
}

fn export_records(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut records = store.load_all()?;
    if let Some(month) = sub.get_one::<String>("month") {
        let (m, y) = parse_month(month)?;
        records = engine::filter_by_period(&records, m, y);
    }
    records.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    match fmt.as_str() {
        "csv" => write_csv(&records, out)?,
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&records)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} records to {}", records.len(), out);
    Ok(())
}

fn write_csv(records: &[Record], out: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["id", "date", "amount", "category", "description", "direction"])?;
    for r in records {
        wtr.write_record([
            r.id.to_string(),
            fmt_date_iso(r.date),
            r.amount.to_string(),
            r.category.clone(),
            r.description.clone(),
            r.direction.label().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
