// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Month to report on (defaults to the selected period)")
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Record and list transactions")
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("category").long("category").required(true))
                .arg(Arg::new("desc").long("desc").default_value(""))
                .arg(
                    Arg::new("direction")
                        .long("direction")
                        .value_parser(["expense", "income"])
                        .default_value("expense"),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("YYYY-MM-DD")
                        .help("Defaults to now"),
                ),
        )
        .subcommand(
            Command::new("edit")
                .about("Replace all fields of a transaction")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_parser(value_parser!(i64)),
                )
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("category").long("category").required(true))
                .arg(Arg::new("desc").long("desc").default_value(""))
                .arg(
                    Arg::new("direction")
                        .long("direction")
                        .value_parser(["expense", "income"])
                        .required(true),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("YYYY-MM-DD")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("rm").about("Delete a transaction").arg(
                Arg::new("id")
                    .required(true)
                    .value_parser(value_parser!(i64)),
            ),
        )
        .subcommand(Command::new("clear").about("Delete all transactions"))
        .subcommand(
            Command::new("categories")
                .about("Suggested categories per direction")
                .arg(
                    Arg::new("direction")
                        .long("direction")
                        .value_parser(["expense", "income"]),
                ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List transactions for a month, newest first")
                .arg(month_arg())
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Monthly reports")
        .subcommand(json_flags(
            Command::new("summary")
                .about("Income, expenses, net balance, and count")
                .arg(month_arg()),
        ))
        .subcommand(json_flags(
            Command::new("categories")
                .about("Spending by category with share of total")
                .arg(month_arg()),
        ))
        .subcommand(json_flags(
            Command::new("top")
                .about("Largest expenses")
                .arg(month_arg())
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .value_parser(value_parser!(usize))
                        .default_value("5"),
                ),
        ))
}

fn period_cmd() -> Command {
    Command::new("period")
        .about("Show or move the selected month")
        .subcommand(Command::new("show").about("Show the selected month"))
        .subcommand(Command::new("next").about("Move forward one month"))
        .subcommand(Command::new("prev").about("Move back one month"))
        .subcommand(
            Command::new("set").about("Jump to a month").arg(
                Arg::new("month")
                    .long("month")
                    .value_name("YYYY-MM")
                    .required(true),
            ),
        )
}

fn login_cmd() -> Command {
    Command::new("login")
        .about("Sign in with phone OTP or Google")
        .subcommand(
            Command::new("phone")
                .about("Request a verification code")
                .arg(Arg::new("number").required(true).help("10-digit number")),
        )
        .subcommand(
            Command::new("verify")
                .about("Submit the received code")
                .arg(Arg::new("code").required(true)),
        )
        .subcommand(
            Command::new("google")
                .about("Sign in with a Google id token")
                .arg(Arg::new("token").long("token").required(true)),
        )
}

fn export_cmd() -> Command {
    Command::new("export").about("Export records").subcommand(
        Command::new("records")
            .about("Write records to a file")
            .arg(
                Arg::new("format")
                    .long("format")
                    .value_parser(["csv", "json"])
                    .default_value("csv"),
            )
            .arg(Arg::new("out").long("out").required(true))
            .arg(month_arg()),
    )
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .version(clap::crate_version!())
        .about("Personal income/expense tracking with monthly reports")
        .subcommand(Command::new("init").about("Initialize the record store"))
        .subcommand(tx_cmd())
        .subcommand(report_cmd())
        .subcommand(period_cmd())
        .subcommand(login_cmd())
        .subcommand(Command::new("logout").about("Sign out"))
        .subcommand(Command::new("whoami").about("Show the signed-in user"))
        .subcommand(export_cmd())
}
