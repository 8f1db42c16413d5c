// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::commands::resolve_period;
use crate::engine::{self, Period};
use crate::models::{glyph_for_category, suggested_categories, Direction, Record};
use crate::store::{PeriodCursor, Store};
use crate::utils::{
    date_to_epoch_ms, fmt_money, fmt_timestamp, maybe_print_json, parse_date, parse_entry_amount,
    pretty_table,
};

pub fn handle(store: &Store, cursor: &PeriodCursor, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("clear", _)) => clear(store)?,
        Some(("categories", sub)) => categories(sub),
        Some(("list", sub)) => list(store, cursor, sub)?,
        _ => {}
    }
    Ok(())
}

fn entry_date(sub: &clap::ArgMatches) -> Result<i64> {
    match sub.get_one::<String>("date") {
        Some(s) => date_to_epoch_ms(parse_date(s)?),
        None => Ok(chrono::Utc::now().timestamp_millis()),
    }
}

fn entry_direction(sub: &clap::ArgMatches) -> Direction {
    sub.get_one::<String>("direction")
        .and_then(|s| Direction::from_flag(s))
        .unwrap_or(Direction::Expense)
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    // Non-positive or unparseable amounts drop the entry without comment,
    // matching the reference entry dialog.
    let Some(amount) = parse_entry_amount(sub.get_one::<String>("amount").unwrap()) else {
        return Ok(());
    };
    let category = sub.get_one::<String>("category").unwrap();
    let desc = sub.get_one::<String>("desc").unwrap();
    let direction = entry_direction(sub);
    let date = entry_date(sub)?;

    let record = store.add(amount, category, desc, date, direction)?;
    println!(
        "Recorded {} {} '{}' (id: {})",
        record.direction.label(),
        fmt_money(&record.amount),
        record.category,
        record.id
    );
    Ok(())
}

fn edit(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let Some(amount) = parse_entry_amount(sub.get_one::<String>("amount").unwrap()) else {
        return Ok(());
    };
    let record = Record {
        id,
        amount,
        category: sub.get_one::<String>("category").unwrap().to_string(),
        description: sub.get_one::<String>("desc").unwrap().to_string(),
        date: entry_date(sub)?,
        direction: entry_direction(sub),
    };
    if store.update(record)? {
        println!("Updated record {}", id);
    } else {
        println!("No record with id {}", id);
    }
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.remove(id)? {
        println!("Removed record {}", id);
    } else {
        println!("No record with id {}", id);
    }
    Ok(())
}

fn clear(store: &Store) -> Result<()> {
    store.clear()?;
    println!("All records deleted");
    Ok(())
}

/// The entry-dialog suggestion lists; categories stay free-form on add/edit.
fn categories(sub: &clap::ArgMatches) {
    let directions = match sub
        .get_one::<String>("direction")
        .and_then(|s| Direction::from_flag(s))
    {
        Some(d) => vec![d],
        None => vec![Direction::Expense, Direction::Income],
    };
    for direction in directions {
        let rows: Vec<Vec<String>> = suggested_categories(direction)
            .iter()
            .map(|c| vec![format!("{} {}", glyph_for_category(c), c)])
            .collect();
        println!("{}", pretty_table(&[direction.label()], rows));
    }
}

fn list(store: &Store, cursor: &PeriodCursor, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let records = store.load_all()?;
    let period = resolve_period(sub, cursor)?;
    let data = query_rows(&records, period, sub);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No transactions for {}.", period.label());
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    format!("{} {}", r.glyph, r.category),
                    r.description.clone(),
                    r.amount.clone(),
                    r.direction.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Category", "Description", "Amount", "Direction"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub glyph: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub direction: String,
}

/// Month-filtered rows, date descending, for the list command and tests.
pub fn query_rows(records: &[Record], period: Period, sub: &clap::ArgMatches) -> Vec<TransactionRow> {
    let mut filtered = engine::filter_by_period(records, period.month, period.year);
    filtered.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        filtered.truncate(*limit);
    }
    filtered
        .into_iter()
        .map(|r| TransactionRow {
            id: r.id,
            date: fmt_timestamp(r.date),
            glyph: glyph_for_category(&r.category).to_string(),
            category: r.category.clone(),
            description: r.description.clone(),
            amount: fmt_money(&r.amount),
            direction: r.direction.label().to_string(),
        })
        .collect()
}
