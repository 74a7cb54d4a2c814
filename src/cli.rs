// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Command, arg, crate_version};

pub fn build_cli() -> Command {
    Command::new("tradecost")
        .version(crate_version!())
        .about("Indian equity/F&O trading charge calculator and tax-leakage reporter")
        .subcommand_required(false)
        .subcommand(
            Command::new("estimate")
                .about("Estimate charges, gross and net P&L for a single round-trip trade")
                .arg(arg!(--instrument <INSTRUMENT> "EQUITY, FUTURES, OPTIONS or COMMODITIES").required(true))
                .arg(arg!(--entry <PRICE> "Entry price").required(true))
                .arg(arg!(--exit <PRICE> "Exit price").required(true))
                .arg(arg!(--quantity <QTY> "Quantity (contracts for F&O)").required(true))
                .arg(arg!(--"lot-size" <SIZE> "Contract multiplier, default 1"))
                .arg(arg!(--side <SIDE> "Opening side: BUY (long-first, default) or SELL (short-first)"))
                .arg(arg!(--delivery "Equity delivery instead of intraday"))
                .arg(arg!(--state <STATE> "Stamp-duty state, default Andhra Pradesh"))
                .arg(arg!(--brokerage <AMOUNT> "Flat brokerage per order, default 20"))
                .arg(arg!(--orders <N> "Number of orders, default 2 (entry + exit)"))
                .arg(arg!(--json "Output JSON"))
                .arg(arg!(--jsonl "Output JSON lines")),
        )
        .subcommand(
            Command::new("journal")
                .about("Work with a CSV trade journal")
                .subcommand(
                    Command::new("report")
                        .about("Aggregate charges across trades into a tax-leakage report")
                        .arg(arg!(--path <PATH> "Journal CSV path").required(true))
                        .arg(arg!(--state <STATE> "Stamp-duty state for rows without one"))
                        .arg(arg!(--brokerage <AMOUNT> "Flat brokerage per order, default 20"))
                        .arg(arg!(--json "Output JSON"))
                        .arg(arg!(--jsonl "Output JSON lines")),
                ),
        )
        .subcommand(
            Command::new("rates")
                .about("Show the active rate schedule")
                .arg(arg!(--json "Output JSON"))
                .arg(arg!(--jsonl "Output JSON lines")),
        )
}
