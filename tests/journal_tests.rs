// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

use tradecost::commands::journal::{leakage_report, read_journal};
use tradecost::models::{Instrument, TradeSide};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn journal_roundtrip_and_leakage() {
    let f = write_csv(
        "date,symbol,instrument,side,entry,exit,quantity,lot_size,style,state\n\
         2025-08-01,NIFTY25AUG24800CE,OPTIONS,BUY,150.50,165.00,50,1,,Maharashtra\n\
         2025-08-04,RELIANCE,EQUITY,SELL,100,90,10,,DELIVERY,\n",
    );
    let trades = read_journal(f.path().to_str().unwrap()).unwrap();
    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].instrument, Instrument::Options);
    assert_eq!(trades[0].economics.side, TradeSide::Buy);
    assert!(trades[0].is_intraday);
    assert_eq!(trades[0].state.as_deref(), Some("Maharashtra"));
    assert_eq!(trades[1].economics.lot_size, Decimal::ONE);
    assert!(!trades[1].is_intraday);
    assert_eq!(trades[1].state, None);

    let report = leakage_report(&trades, "Maharashtra", dec("20"));
    assert_eq!(report.trades, 2);
    // Options winner 725.00 plus equity short winner 100.00.
    assert_eq!(report.total_gross_profit, dec("825.00"));
    // 63.38 (options) + 50.04 (equity delivery).
    assert_eq!(report.total_charges, dec("113.42"));
    assert_eq!(report.total_net_pnl, dec("711.58"));
    // 113.42 / 825 x 100 = 13.7478... -> 13.75
    assert_eq!(report.leakage_pct, dec("13.75"));
    assert_eq!(
        report.breakdown.total_charges,
        report.breakdown.stt
            + report.breakdown.exchange_charges
            + report.breakdown.gst
            + report.breakdown.stamp_duty
            + report.breakdown.sebi_charges
            + report.breakdown.brokerage
    );
}

#[test]
fn short_columns_default_lot_and_style() {
    let f = write_csv(
        "date,symbol,instrument,side,entry,exit,quantity\n\
         2025-08-05,SBIN,EQUITY,BUY,800,805,25\n",
    );
    let trades = read_journal(f.path().to_str().unwrap()).unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].economics.lot_size, Decimal::ONE);
    assert!(trades[0].is_intraday);
    assert_eq!(trades[0].state, None);
}

#[test]
fn bad_instrument_is_reported_with_row_context() {
    let f = write_csv(
        "date,symbol,instrument,side,entry,exit,quantity\n\
         2025-08-05,SBIN,CRYPTO,BUY,800,805,25\n",
    );
    let err = read_journal(f.path().to_str().unwrap()).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Unknown instrument 'CRYPTO'"), "{}", msg);
    assert!(msg.contains("SBIN"), "{}", msg);
}

#[test]
fn bad_style_is_rejected() {
    let f = write_csv(
        "date,symbol,instrument,side,entry,exit,quantity,lot_size,style\n\
         2025-08-05,SBIN,EQUITY,BUY,800,805,25,1,SWING\n",
    );
    let err = read_journal(f.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Unknown trade style 'SWING'"));
}

#[test]
fn missing_file_is_a_clean_error() {
    let err = read_journal("/nonexistent/journal.csv").unwrap_err();
    assert!(format!("{:#}", err).contains("Open journal CSV"));
}

#[test]
fn empty_journal_yields_empty_report() {
    let f = write_csv("date,symbol,instrument,side,entry,exit,quantity\n");
    let trades = read_journal(f.path().to_str().unwrap()).unwrap();
    let report = leakage_report(&trades, "Maharashtra", dec("20"));
    assert_eq!(report.trades, 0);
    assert_eq!(report.total_charges, Decimal::ZERO);
    assert_eq!(report.leakage_pct, Decimal::ZERO);
}
