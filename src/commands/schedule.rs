// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::rates::RATES;
use crate::utils::{maybe_print_json, pretty_table};

/// Serializable view of the schedule; the schedule itself only exposes
/// read accessors.
#[derive(Debug, Serialize)]
struct ScheduleView {
    stt: BTreeMap<&'static str, Decimal>,
    exchange: BTreeMap<&'static str, Decimal>,
    sebi_turnover: Decimal,
    gst: Decimal,
    stamp_duty: BTreeMap<&'static str, Decimal>,
}

fn view() -> ScheduleView {
    let r = &*RATES;
    ScheduleView {
        stt: BTreeMap::from([
            ("options_sell", r.stt.options_sell),
            ("futures_sell", r.stt.futures_sell),
            ("equity_delivery", r.stt.equity_delivery),
            ("equity_intraday", r.stt.equity_intraday),
        ]),
        exchange: BTreeMap::from([
            ("nse_options", r.exchange.nse_options),
            ("nse_futures", r.exchange.nse_futures),
            ("nse_equity", r.exchange.nse_equity),
            ("bse", r.exchange.bse),
            ("mcx_commodities", r.exchange.mcx_commodities),
        ]),
        sebi_turnover: r.sebi_turnover,
        gst: r.gst,
        stamp_duty: r.stamp_duty_table().collect(),
    }
}

fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let v = view();
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &v)? {
        return Ok(());
    }

    let mut rows = Vec::new();
    for (name, rate) in &v.stt {
        rows.push(vec!["STT".to_string(), name.to_string(), percent(*rate)]);
    }
    for (name, rate) in &v.exchange {
        rows.push(vec!["Exchange".to_string(), name.to_string(), percent(*rate)]);
    }
    rows.push(vec![
        "SEBI".to_string(),
        "turnover".to_string(),
        percent(v.sebi_turnover),
    ]);
    rows.push(vec![
        "GST".to_string(),
        "brokerage + exchange + SEBI".to_string(),
        percent(v.gst),
    ]);
    println!("{}", pretty_table(&["Levy", "Category", "Rate"], rows));

    let stamp_rows = v
        .stamp_duty
        .iter()
        .map(|(state, rate)| vec![state.to_string(), percent(*rate)])
        .collect();
    println!("{}", pretty_table(&["State", "Stamp duty"], stamp_rows));
    Ok(())
}
