// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tradecost::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("estimate", sub)) => commands::estimate::handle(sub)?,
        Some(("journal", sub)) => commands::journal::handle(sub)?,
        Some(("rates", sub)) => commands::schedule::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
