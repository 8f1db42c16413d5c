// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod exporter;
pub mod period;
pub mod reports;
pub mod session;
pub mod transactions;

use anyhow::Result;

use crate::engine::Period;
use crate::store::PeriodCursor;
use crate::utils::parse_month;

/// `--month YYYY-MM` when given, otherwise the persisted cursor.
pub(crate) fn resolve_period(sub: &clap::ArgMatches, cursor: &PeriodCursor) -> Result<Period> {
    match sub.get_one::<String>("month") {
        Some(m) => {
            let (month, year) = parse_month(m)?;
            Ok(Period { month, year })
        }
        None => cursor.load(),
    }
}
