// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::charges::compute_charges;
use crate::models::{CalculationParams, ChargeBreakdown, Instrument, TradeEconomics, TradeSide};
use crate::pnl;
use crate::rates;
use crate::utils::{format_inr, maybe_print_json, parse_decimal, pretty_table};

/// Everything the trade-entry flow shows for one prospective trade.
#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    pub instrument: Instrument,
    pub side: TradeSide,
    pub buy_value: Decimal,
    pub sell_value: Decimal,
    pub turnover: Decimal,
    pub charges: ChargeBreakdown,
    pub gross_pnl: Decimal,
    pub net_pnl: Decimal,
}

pub fn estimate_trade(
    instrument: Instrument,
    trade: &TradeEconomics,
    is_intraday: bool,
    state: &str,
    brokerage_per_order: Decimal,
    number_of_orders: u32,
) -> Estimate {
    let values = trade.values();
    let gross_pnl = trade.gross_pnl();
    let params = CalculationParams {
        instrument,
        gross_pnl,
        turnover: values.turnover,
        sell_value: values.sell_value,
        buy_value: values.buy_value,
        is_intraday,
        state: state.to_string(),
        brokerage_per_order,
        number_of_orders,
    };
    let charges = compute_charges(&params);
    let net_pnl = pnl::net_pnl(gross_pnl, &charges);
    Estimate {
        instrument,
        side: trade.side,
        buy_value: values.buy_value,
        sell_value: values.sell_value,
        turnover: values.turnover,
        charges,
        gross_pnl,
        net_pnl,
    }
}

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let instrument = Instrument::parse(m.get_one::<String>("instrument").unwrap())?;
    let entry_price = parse_decimal(m.get_one::<String>("entry").unwrap().trim())?;
    let exit_price = parse_decimal(m.get_one::<String>("exit").unwrap().trim())?;
    let quantity = parse_decimal(m.get_one::<String>("quantity").unwrap().trim())?;
    let lot_size = match m.get_one::<String>("lot-size") {
        Some(raw) => parse_decimal(raw.trim())?,
        None => Decimal::ONE,
    };
    let side = match m.get_one::<String>("side") {
        Some(raw) => TradeSide::parse(raw)?,
        None => TradeSide::Buy,
    };
    let is_intraday = !m.get_flag("delivery");
    let state = m
        .get_one::<String>("state")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| rates::DEFAULT_STATE.to_string());
    let brokerage_per_order = match m.get_one::<String>("brokerage") {
        Some(raw) => parse_decimal(raw.trim())?,
        None => Decimal::from(rates::DEFAULT_BROKERAGE_PER_ORDER),
    };
    let number_of_orders = match m.get_one::<String>("orders") {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .with_context(|| format!("Invalid order count '{}'", raw))?,
        None => rates::DEFAULT_ORDER_COUNT,
    };

    let trade = TradeEconomics {
        entry_price,
        exit_price,
        quantity,
        lot_size,
        side,
    };
    let result = estimate_trade(
        instrument,
        &trade,
        is_intraday,
        &state,
        brokerage_per_order,
        number_of_orders,
    );

    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &result)? {
        return Ok(());
    }

    let rows = vec![
        vec!["Buy value".to_string(), format_inr(result.buy_value)],
        vec!["Sell value".to_string(), format_inr(result.sell_value)],
        vec!["Turnover".to_string(), format_inr(result.turnover)],
        vec!["STT".to_string(), format_inr(result.charges.stt)],
        vec![
            "Exchange charges".to_string(),
            format_inr(result.charges.exchange_charges),
        ],
        vec!["GST".to_string(), format_inr(result.charges.gst)],
        vec!["Stamp duty".to_string(), format_inr(result.charges.stamp_duty)],
        vec![
            "SEBI charges".to_string(),
            format_inr(result.charges.sebi_charges),
        ],
        vec!["Brokerage".to_string(), format_inr(result.charges.brokerage)],
        vec![
            "Total charges".to_string(),
            format_inr(result.charges.total_charges),
        ],
        vec!["Gross P&L".to_string(), format_inr(result.gross_pnl)],
        vec!["Net P&L".to_string(), format_inr(result.net_pnl)],
    ];
    println!(
        "{} {} x {} @ {} -> {}",
        result.instrument, result.side, trade.total_quantity(), entry_price, exit_price
    );
    println!("{}", pretty_table(&["Line", "Amount"], rows));
    Ok(())
}
