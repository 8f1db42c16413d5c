// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a record adds to (income) or subtracts from (expense) the net balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Income,
    Expense,
}

impl Direction {
    pub fn from_flag(s: &str) -> Option<Direction> {
        match s.to_lowercase().as_str() {
            "income" | "credit" => Some(Direction::Income),
            "expense" | "debit" => Some(Direction::Expense),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Income => "income",
            Direction::Expense => "expense",
        }
    }
}

/// One income or expense transaction. `amount` is always a positive
/// magnitude; `direction` carries the sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub amount: Decimal,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Epoch milliseconds; user-selectable, need not equal creation time.
    pub date: i64,
    pub direction: Direction,
}

pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    "Other",
];

pub const INCOME_CATEGORIES: [&str; 6] = [
    "Salary",
    "Freelance",
    "Investment",
    "Gift",
    "Refund",
    "Other Income",
];

pub fn suggested_categories(direction: Direction) -> &'static [&'static str] {
    match direction {
        Direction::Income => &INCOME_CATEGORIES,
        Direction::Expense => &EXPENSE_CATEGORIES,
    }
}

/// Static category -> display glyph lookup with a catch-all fallback.
pub fn glyph_for_category(category: &str) -> &'static str {
    match category {
        "Food" => "🍽",
        "Transport" => "🚌",
        "Shopping" => "🛍",
        "Bills" => "🧾",
        "Entertainment" => "🎬",
        "Health" => "💊",
        "Salary" => "💼",
        "Freelance" => "🖋",
        "Investment" => "📈",
        "Gift" => "🎁",
        "Refund" => "↩",
        _ => "💰",
    }
}
