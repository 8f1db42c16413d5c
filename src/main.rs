// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pocketledger::{auth, cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = store::Store::open_default()?;
    let cursor = store::PeriodCursor::open_default()?;
    let mut session = auth::Session::open_default()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Record store at {}", store.path().display());
        }
        Some(("login", sub)) => commands::session::handle(&mut session, sub)?,
        Some(("logout", _)) => commands::session::logout(&mut session)?,
        Some(("whoami", _)) => commands::session::whoami(&session),
        Some(("tx", sub)) => {
            auth::require_user(&session)?;
            commands::transactions::handle(&store, &cursor, sub)?;
        }
        Some(("report", sub)) => {
            auth::require_user(&session)?;
            commands::reports::handle(&store, &cursor, sub)?;
        }
        Some(("period", sub)) => {
            auth::require_user(&session)?;
            commands::period::handle(&cursor, sub)?;
        }
        Some(("export", sub)) => {
            auth::require_user(&session)?;
            commands::exporter::handle(&store, sub)?;
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
