// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::auth::{AuthState, HttpIdentityProvider, Session};

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("phone", sub)) => {
            let number = sub.get_one::<String>("number").unwrap();
            let provider = HttpIdentityProvider::from_env()?;
            let state = session.request_code(&provider, number)?;
            print_state(state);
        }
        Some(("verify", sub)) => {
            let code = sub.get_one::<String>("code").unwrap();
            let provider = HttpIdentityProvider::from_env()?;
            let state = session.submit_code(&provider, code)?;
            print_state(state);
        }
        Some(("google", sub)) => {
            let token = sub.get_one::<String>("token").unwrap();
            let provider = HttpIdentityProvider::from_env()?;
            let state = session.sign_in_with_credential(&provider, token)?;
            print_state(state);
        }
        _ => {}
    }
    Ok(())
}

pub fn logout(session: &mut Session) -> Result<()> {
    session.sign_out()?;
    println!("Signed out");
    Ok(())
}

pub fn whoami(session: &Session) {
    match session.user_id() {
        Some(uid) => println!("Signed in as {}", uid),
        None => println!("Not signed in"),
    }
}

fn print_state(state: &AuthState) {
    match state {
        AuthState::CodeSent => {
            println!("Code sent; run 'pocketledger login verify <code>' to finish")
        }
        AuthState::Success { user_id } => println!("Signed in as {}", user_id),
        AuthState::Error { message } => eprintln!("{}", message),
        AuthState::Initial | AuthState::Loading => {}
    }
}
