// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Reporting queries over a record snapshot. Every function here is a
//! pure, total computation; reports re-derive from scratch on each call.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Direction, Record};

/// The month/year pair selected for filtering and reporting.
/// `month` is zero-based (0 = January, 11 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub month: u32,
    pub year: i32,
}

impl Period {
    /// The current local calendar month/year.
    pub fn current() -> Period {
        let now = Local::now();
        Period {
            month: now.month0(),
            year: now.year(),
        }
    }

    pub fn label(&self) -> String {
        let name = crate::utils::MONTH_NAMES
            .get(self.month as usize)
            .copied()
            .unwrap_or("?");
        format!("{} {}", name, self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Moves the period one month, carrying into the year at the Dec/Jan boundary.
pub fn advance_month(period: Period, step: Step) -> Period {
    match step {
        Step::Forward => {
            if period.month == 11 {
                Period {
                    month: 0,
                    year: period.year + 1,
                }
            } else {
                Period {
                    month: period.month + 1,
                    year: period.year,
                }
            }
        }
        Step::Backward => {
            if period.month == 0 {
                Period {
                    month: 11,
                    year: period.year - 1,
                }
            } else {
                Period {
                    month: period.month - 1,
                    year: period.year,
                }
            }
        }
    }
}

fn local_month_year(epoch_ms: i64) -> Option<(u32, i32)> {
    let utc = DateTime::from_timestamp_millis(epoch_ms)?;
    let local = utc.with_timezone(&Local);
    Some((local.month0(), local.year()))
}

/// Records whose date falls in the given local calendar month/year.
/// No ordering is imposed; callers sort for display.
pub fn filter_by_period(records: &[Record], month: u32, year: i32) -> Vec<Record> {
    records
        .iter()
        .filter(|r| local_month_year(r.date) == Some((month, year)))
        .cloned()
        .collect()
}

/// Sum of amounts for the given direction; zero on empty or no match.
pub fn total_by_direction(records: &[Record], direction: Direction) -> Decimal {
    records
        .iter()
        .filter(|r| r.direction == direction)
        .map(|r| r.amount)
        .sum()
}

pub fn net_balance(records: &[Record]) -> Decimal {
    total_by_direction(records, Direction::Income) - total_by_direction(records, Direction::Expense)
}

/// Per-category expense totals. Keys are exactly the categories present
/// among expense records; no zero-filled entries.
pub fn spending_by_category(records: &[Record]) -> HashMap<String, Decimal> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for r in records.iter().filter(|r| r.direction == Direction::Expense) {
        *totals.entry(r.category.clone()).or_insert(Decimal::ZERO) += r.amount;
    }
    totals
}

/// The n largest expenses, amount descending. The sort is stable so equal
/// amounts keep their snapshot order.
pub fn top_expenses(records: &[Record], n: usize) -> Vec<Record> {
    let mut expenses: Vec<Record> = records
        .iter()
        .filter(|r| r.direction == Direction::Expense)
        .cloned()
        .collect();
    expenses.sort_by(|a, b| b.amount.cmp(&a.amount));
    expenses.truncate(n);
    expenses
}
