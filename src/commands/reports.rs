// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::json;

use crate::commands::resolve_period;
use crate::engine;
use crate::models::{glyph_for_category, Direction, Record};
use crate::store::{PeriodCursor, Store};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &Store, cursor: &PeriodCursor, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, cursor, sub)?,
        Some(("categories", sub)) => categories(store, cursor, sub)?,
        Some(("top", sub)) => top(store, cursor, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &Store, cursor: &PeriodCursor, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let period = resolve_period(sub, cursor)?;
    let filtered = {
        let records = store.load_all()?;
        engine::filter_by_period(&records, period.month, period.year)
    };

    let credit = engine::total_by_direction(&filtered, Direction::Income);
    let debit = engine::total_by_direction(&filtered, Direction::Expense);
    let net = engine::net_balance(&filtered);

    let payload = json!({
        "period": period.label(),
        "income": credit.to_string(),
        "expenses": debit.to_string(),
        "net_balance": net.to_string(),
        "transactions": filtered.len(),
    });
    if !maybe_print_json(json_flag, jsonl_flag, &payload)? {
        let rows = vec![
            vec!["Income".to_string(), fmt_money(&credit)],
            vec!["Expenses".to_string(), fmt_money(&debit)],
            vec!["Net balance".to_string(), fmt_money(&net)],
            vec!["Transactions".to_string(), filtered.len().to_string()],
        ];
        let label = period.label();
        println!("{}", pretty_table(&[label.as_str(), "Amount"], rows));
    }
    Ok(())
}

/// Per-category expense totals with each category's whole-number share of
/// total spending, largest first. Shares truncate toward zero, matching the
/// reference breakdown display.
pub fn category_breakdown(records: &[Record]) -> Vec<(String, Decimal, Decimal)> {
    let total = engine::total_by_direction(records, Direction::Expense);
    let mut items: Vec<(String, Decimal)> =
        engine::spending_by_category(records).into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let hundred = Decimal::from(100);
    items
        .into_iter()
        .map(|(cat, amt)| {
            let share = if total > Decimal::ZERO {
                (amt / total * hundred).trunc()
            } else {
                Decimal::ZERO
            };
            (cat, amt, share)
        })
        .collect()
}

fn categories(store: &Store, cursor: &PeriodCursor, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let period = resolve_period(sub, cursor)?;
    let filtered = {
        let records = store.load_all()?;
        engine::filter_by_period(&records, period.month, period.year)
    };

    let items = category_breakdown(&filtered);
    if items.is_empty() {
        println!("No expenses for {}.", period.label());
        return Ok(());
    }

    let data: Vec<Vec<String>> = items
        .iter()
        .map(|(cat, amt, share)| {
            vec![
                format!("{} {}", glyph_for_category(cat), cat),
                fmt_money(amt),
                format!("{}%", share),
            ]
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Category", "Spent", "Share"], data));
    }
    Ok(())
}

fn top(store: &Store, cursor: &PeriodCursor, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let n: usize = *sub.get_one::<usize>("count").unwrap_or(&5);
    let period = resolve_period(sub, cursor)?;
    let filtered = {
        let records = store.load_all()?;
        engine::filter_by_period(&records, period.month, period.year)
    };

    let top = engine::top_expenses(&filtered, n);
    if top.is_empty() {
        println!("No expenses for {}.", period.label());
        return Ok(());
    }
    let data: Vec<Vec<String>> = top
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                r.category.clone(),
                r.description.clone(),
                fmt_money(&r.amount),
            ]
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(&["Rank", "Category", "Description", "Amount"], data)
        );
    }
    Ok(())
}
