// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use pocketledger::commands::reports::category_breakdown;
use pocketledger::models::{Direction, Record};

fn rec(id: i64, amount: &str, category: &str, direction: Direction) -> Record {
    Record {
        id,
        amount: amount.parse().unwrap(),
        category: category.to_string(),
        description: String::new(),
        date: 1737000000000,
        direction,
    }
}

#[test]
fn breakdown_is_largest_first_with_exact_totals() {
    let records = vec![
        rec(1, "25", "Bills", Direction::Expense),
        rec(2, "100", "Food", Direction::Expense),
        rec(3, "50", "Food", Direction::Expense),
        rec(4, "2000", "Salary", Direction::Income),
    ];
    let breakdown = category_breakdown(&records);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].0, "Food");
    assert_eq!(breakdown[0].1, Decimal::from(150));
    assert_eq!(breakdown[1].0, "Bills");
    assert_eq!(breakdown[1].1, Decimal::from(25));
}

#[test]
fn breakdown_share_truncates_toward_zero() {
    // 100/150 is 66.67%: the display shows 66%, not the nearest 67%
    let records = vec![
        rec(1, "100", "Food", Direction::Expense),
        rec(2, "50", "Bills", Direction::Expense),
    ];
    let breakdown = category_breakdown(&records);
    assert_eq!(breakdown[0].2, Decimal::from(66));
    assert_eq!(breakdown[1].2, Decimal::from(33));
}

#[test]
fn breakdown_empty_when_no_expenses() {
    let records = vec![rec(1, "2000", "Salary", Direction::Income)];
    assert!(category_breakdown(&records).is_empty());
}
