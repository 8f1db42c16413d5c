// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::engine::{advance_month, Period, Step};
use crate::store::PeriodCursor;
use crate::utils::parse_month;

pub fn handle(cursor: &PeriodCursor, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            println!("Selected period: {}", cursor.load()?.label());
        }
        Some(("next", _)) => step(cursor, Step::Forward)?,
        Some(("prev", _)) => step(cursor, Step::Backward)?,
        Some(("set", sub)) => {
            let (month, year) = parse_month(sub.get_one::<String>("month").unwrap())?;
            let period = Period { month, year };
            cursor.save(period)?;
            println!("Selected period: {}", period.label());
        }
        _ => {}
    }
    Ok(())
}

fn step(cursor: &PeriodCursor, step: Step) -> Result<()> {
    let next = advance_month(cursor.load()?, step);
    cursor.save(next)?;
    println!("Selected period: {}", next.label());
    Ok(())
}
