// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::charges::compute_charges;
use crate::models::{CalculationParams, ChargeBreakdown, Instrument, TradeEconomics, TradeSide};
use crate::pnl;
use crate::rates;
use crate::utils::{
    format_compact, format_inr, maybe_print_json, parse_decimal, pretty_table, round_paisa,
};

/// One journal row: date, symbol, instrument, side, entry, exit, quantity,
/// then optional lot size, style (INTRADAY/DELIVERY) and stamp-duty state.
#[derive(Debug, Clone)]
pub struct JournalTrade {
    pub date: NaiveDate,
    pub symbol: String,
    pub instrument: Instrument,
    pub economics: TradeEconomics,
    pub is_intraday: bool,
    pub state: Option<String>,
}

pub fn read_journal(path: &str) -> Result<Vec<JournalTrade>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open journal CSV {}", path))?;

    let mut trades = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim();
        let symbol = rec.get(1).context("symbol missing")?.trim().to_string();
        let instrument_raw = rec.get(2).context("instrument missing")?.trim();
        let side_raw = rec.get(3).context("side missing")?.trim();
        let entry_raw = rec.get(4).context("entry price missing")?.trim();
        let exit_raw = rec.get(5).context("exit price missing")?.trim();
        let qty_raw = rec.get(6).context("quantity missing")?.trim();
        let lot_raw = rec.get(7).map(str::trim).unwrap_or("");
        let style_raw = rec.get(8).map(str::trim).unwrap_or("");
        let state = rec
            .get(9)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}' for {}", date_raw, symbol))?;
        let instrument = Instrument::parse(instrument_raw)
            .with_context(|| format!("Row for {} on {}", symbol, date))?;
        let side = TradeSide::parse(side_raw)
            .with_context(|| format!("Row for {} on {}", symbol, date))?;
        let entry_price = parse_decimal(entry_raw)
            .with_context(|| format!("Entry price for {} on {}", symbol, date))?;
        let exit_price = parse_decimal(exit_raw)
            .with_context(|| format!("Exit price for {} on {}", symbol, date))?;
        let quantity = parse_decimal(qty_raw)
            .with_context(|| format!("Quantity for {} on {}", symbol, date))?;
        let lot_size = if lot_raw.is_empty() {
            Decimal::ONE
        } else {
            parse_decimal(lot_raw).with_context(|| format!("Lot size for {} on {}", symbol, date))?
        };
        let is_intraday = match style_raw.to_uppercase().as_str() {
            "" | "INTRADAY" => true,
            "DELIVERY" => false,
            other => {
                return Err(anyhow!(
                    "Unknown trade style '{}' for {} on {}, expected INTRADAY or DELIVERY",
                    other,
                    symbol,
                    date
                ));
            }
        };

        trades.push(JournalTrade {
            date,
            symbol,
            instrument,
            economics: TradeEconomics {
                entry_price,
                exit_price,
                quantity,
                lot_size,
                side,
            },
            is_intraday,
            state,
        });
    }
    Ok(trades)
}

/// The "where did my profits go" aggregation: charge sums per levy, total
/// gross profit from winning trades, and charges as a share of it.
#[derive(Debug, Clone, Serialize)]
pub struct LeakageReport {
    pub trades: usize,
    pub total_gross_profit: Decimal,
    pub total_net_pnl: Decimal,
    pub total_charges: Decimal,
    pub leakage_pct: Decimal,
    pub breakdown: ChargeBreakdown,
}

pub fn leakage_report(
    trades: &[JournalTrade],
    default_state: &str,
    brokerage_per_order: Decimal,
) -> LeakageReport {
    let mut breakdown = ChargeBreakdown {
        stt: Decimal::ZERO,
        exchange_charges: Decimal::ZERO,
        gst: Decimal::ZERO,
        stamp_duty: Decimal::ZERO,
        sebi_charges: Decimal::ZERO,
        brokerage: Decimal::ZERO,
        total_charges: Decimal::ZERO,
    };
    let mut total_gross_profit = Decimal::ZERO;
    let mut total_net_pnl = Decimal::ZERO;

    for trade in trades {
        let values = trade.economics.values();
        let gross = trade.economics.gross_pnl();
        let params = CalculationParams {
            instrument: trade.instrument,
            gross_pnl: gross,
            turnover: values.turnover,
            sell_value: values.sell_value,
            buy_value: values.buy_value,
            is_intraday: trade.is_intraday,
            state: trade
                .state
                .clone()
                .unwrap_or_else(|| default_state.to_string()),
            brokerage_per_order,
            number_of_orders: rates::DEFAULT_ORDER_COUNT,
        };
        let charges = compute_charges(&params);
        breakdown.stt += charges.stt;
        breakdown.exchange_charges += charges.exchange_charges;
        breakdown.gst += charges.gst;
        breakdown.stamp_duty += charges.stamp_duty;
        breakdown.sebi_charges += charges.sebi_charges;
        breakdown.brokerage += charges.brokerage;
        breakdown.total_charges += charges.total_charges;

        if gross > Decimal::ZERO {
            total_gross_profit += gross;
        }
        total_net_pnl += pnl::net_pnl(gross, &charges);
    }

    let leakage_pct = if total_gross_profit > Decimal::ZERO {
        round_paisa(breakdown.total_charges / total_gross_profit * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    LeakageReport {
        trades: trades.len(),
        total_gross_profit,
        total_net_pnl,
        total_charges: breakdown.total_charges,
        leakage_pct,
        breakdown,
    }
}

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("report", sub)) => report(sub),
        _ => Ok(()),
    }
}

fn report(sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let default_state = sub
        .get_one::<String>("state")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| rates::DEFAULT_STATE.to_string());
    let brokerage_per_order = match sub.get_one::<String>("brokerage") {
        Some(raw) => parse_decimal(raw.trim())?,
        None => Decimal::from(rates::DEFAULT_BROKERAGE_PER_ORDER),
    };

    let trades = read_journal(path)?;
    let report = leakage_report(&trades, &default_state, brokerage_per_order);

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }

    let rows = vec![
        vec!["STT".to_string(), format_inr(report.breakdown.stt)],
        vec![
            "Exchange charges".to_string(),
            format_inr(report.breakdown.exchange_charges),
        ],
        vec!["GST".to_string(), format_inr(report.breakdown.gst)],
        vec![
            "Stamp duty".to_string(),
            format_inr(report.breakdown.stamp_duty),
        ],
        vec![
            "SEBI charges".to_string(),
            format_inr(report.breakdown.sebi_charges),
        ],
        vec![
            "Brokerage".to_string(),
            format_inr(report.breakdown.brokerage),
        ],
        vec!["Total".to_string(), format_inr(report.total_charges)],
    ];
    println!("{}", pretty_table(&["Charge", "Paid"], rows));
    println!("Trades: {}", report.trades);
    println!(
        "Gross profit: {} ({})",
        format_inr(report.total_gross_profit),
        format_compact(report.total_gross_profit)
    );
    println!(
        "Charges paid: {} ({}% of gross profit)",
        format_inr(report.total_charges),
        report.leakage_pct
    );
    println!(
        "Net P&L: {} ({})",
        format_inr(report.total_net_pnl),
        format_compact(report.total_net_pnl)
    );
    Ok(())
}
