// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::str::FromStr;

use tradecost::commands::estimate::estimate_trade;
use tradecost::models::{Instrument, TradeEconomics, TradeSide};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn trade(entry: &str, exit: &str, qty: &str, lot: &str, side: TradeSide) -> TradeEconomics {
    TradeEconomics {
        entry_price: dec(entry),
        exit_price: dec(exit),
        quantity: dec(qty),
        lot_size: dec(lot),
        side,
    }
}

#[test]
fn options_intraday_long_worked_example() {
    let est = estimate_trade(
        Instrument::Options,
        &trade("150.50", "165.00", "50", "1", TradeSide::Buy),
        true,
        "Maharashtra",
        dec("20"),
        2,
    );
    assert_eq!(est.turnover, dec("15775.00"));
    assert_eq!(est.charges.stt, dec("5.16"));
    assert_eq!(est.charges.exchange_charges, dec("8.36"));
    assert_eq!(est.charges.sebi_charges, dec("0.02"));
    assert_eq!(est.charges.gst, dec("8.71"));
    assert_eq!(est.charges.stamp_duty, dec("1.13"));
    assert_eq!(est.charges.brokerage, dec("40.00"));
    assert_eq!(est.charges.total_charges, dec("63.38"));
    assert_eq!(est.gross_pnl, dec("725.00"));
    assert_eq!(est.net_pnl, dec("661.62"));
}

#[test]
fn futures_lot_size_scales_every_value() {
    // 2 lots of 25: total quantity 50.
    let est = estimate_trade(
        Instrument::Futures,
        &trade("20000", "20100", "2", "25", TradeSide::Buy),
        true,
        "Karnataka",
        dec("20"),
        2,
    );
    assert_eq!(est.buy_value, dec("1000000"));
    assert_eq!(est.sell_value, dec("1005000"));
    assert_eq!(est.turnover, dec("2005000"));
    assert_eq!(est.gross_pnl, dec("5000"));
    assert_eq!(est.charges.stt, dec("100.50")); // sell side x 0.0001
    assert_eq!(est.charges.exchange_charges, dec("401.00")); // turnover x 0.0002
    assert_eq!(est.charges.stamp_duty, dec("150.00")); // buy side x 0.00015
}

#[test]
fn direction_flips_gross_but_not_charges() {
    let long = estimate_trade(
        Instrument::Options,
        &trade("100", "120", "75", "1", TradeSide::Buy),
        true,
        "Delhi",
        dec("20"),
        2,
    );
    let short = estimate_trade(
        Instrument::Options,
        &trade("100", "120", "75", "1", TradeSide::Sell),
        true,
        "Delhi",
        dec("20"),
        2,
    );
    assert_eq!(long.gross_pnl, -short.gross_pnl);
    // Charges depend only on values, not direction.
    assert_eq!(long.charges, short.charges);
}

#[test]
fn unrecognized_state_estimates_like_other() {
    let unknown = estimate_trade(
        Instrument::Equity,
        &trade("500", "510", "20", "1", TradeSide::Buy),
        true,
        "Mordor",
        dec("20"),
        2,
    );
    let other = estimate_trade(
        Instrument::Equity,
        &trade("500", "510", "20", "1", TradeSide::Buy),
        true,
        "Other",
        dec("20"),
        2,
    );
    assert_eq!(unknown.charges, other.charges);
    assert!(unknown.charges.stamp_duty > Decimal::ZERO);
}

#[test]
fn custom_brokerage_schedule_flows_through_gst() {
    let zero = estimate_trade(
        Instrument::Equity,
        &trade("100", "101", "100", "1", TradeSide::Buy),
        true,
        "Gujarat",
        dec("0"),
        2,
    );
    let flat = estimate_trade(
        Instrument::Equity,
        &trade("100", "101", "100", "1", TradeSide::Buy),
        true,
        "Gujarat",
        dec("20"),
        2,
    );
    assert_eq!(zero.charges.brokerage, dec("0.00"));
    assert_eq!(flat.charges.brokerage, dec("40.00"));
    // GST base includes brokerage, so it must differ by 18% of 40.
    assert_eq!(flat.charges.gst - zero.charges.gst, dec("7.20"));
}

#[test]
fn estimates_are_reproducible() {
    let t = trade("150.50", "165.00", "50", "1", TradeSide::Buy);
    let a = estimate_trade(Instrument::Options, &t, true, "Maharashtra", dec("20"), 2);
    let b = estimate_trade(Instrument::Options, &t, true, "Maharashtra", dec("20"), 2);
    assert_eq!(a.charges, b.charges);
    assert_eq!(a.net_pnl, b.net_pnl);
}

#[test]
fn zero_quantity_is_accepted_without_error() {
    let est = estimate_trade(
        Instrument::Equity,
        &trade("100", "110", "0", "1", TradeSide::Buy),
        true,
        "Maharashtra",
        dec("20"),
        2,
    );
    assert_eq!(est.gross_pnl, dec("0"));
    // Flat brokerage and its GST still apply on zero economics.
    assert_eq!(est.charges.brokerage, dec("40.00"));
    assert_eq!(est.charges.total_charges, dec("47.20"));
    assert_eq!(est.net_pnl, dec("-47.20"));
}
