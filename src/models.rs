// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pnl;
use crate::rates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Instrument {
    Equity,
    Futures,
    Options,
    Commodities,
}

impl Instrument {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "EQUITY" => Ok(Instrument::Equity),
            "FUTURES" => Ok(Instrument::Futures),
            "OPTIONS" => Ok(Instrument::Options),
            "COMMODITIES" => Ok(Instrument::Commodities),
            other => Err(anyhow!(
                "Unknown instrument '{}', expected EQUITY, FUTURES, OPTIONS or COMMODITIES",
                other
            )),
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Instrument::Equity => "EQUITY",
            Instrument::Futures => "FUTURES",
            Instrument::Options => "OPTIONS",
            Instrument::Commodities => "COMMODITIES",
        };
        f.write_str(s)
    }
}

/// Side of the OPENING leg: BUY is long-first, SELL is short-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(TradeSide::Buy),
            "SELL" => Ok(TradeSide::Sell),
            other => Err(anyhow!("Unknown trade side '{}', expected BUY or SELL", other)),
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        })
    }
}

/// The economics of one round-trip trade as entered in the journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeEconomics {
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub quantity: Decimal,
    /// Contract multiplier for derivatives; 1 for cash equity.
    pub lot_size: Decimal,
    pub side: TradeSide,
}

impl TradeEconomics {
    pub fn total_quantity(&self) -> Decimal {
        self.quantity * self.lot_size
    }

    pub fn values(&self) -> pnl::TradeValues {
        pnl::trade_values(self.entry_price, self.exit_price, self.quantity, self.lot_size)
    }

    pub fn gross_pnl(&self) -> Decimal {
        pnl::gross_pnl(
            self.entry_price,
            self.exit_price,
            self.quantity,
            self.lot_size,
            self.side,
        )
    }
}

/// Inputs to the charge calculator. Economics are taken as-is: nothing here
/// is validated, and negative or zero values flow straight through the
/// arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationParams {
    pub instrument: Instrument,
    pub gross_pnl: Decimal,
    pub turnover: Decimal,
    pub sell_value: Decimal,
    pub buy_value: Decimal,
    /// Equity only; delivery trades use the buy+sell STT base.
    pub is_intraday: bool,
    /// Stamp-duty state; unknown names fall back to the "Other" rate.
    pub state: String,
    pub brokerage_per_order: Decimal,
    pub number_of_orders: u32,
}

impl CalculationParams {
    /// Params with the observed defaults: intraday, Andhra Pradesh,
    /// ₹20/order flat brokerage, two orders (entry + exit).
    pub fn new(
        instrument: Instrument,
        gross_pnl: Decimal,
        turnover: Decimal,
        sell_value: Decimal,
        buy_value: Decimal,
    ) -> Self {
        CalculationParams {
            instrument,
            gross_pnl,
            turnover,
            sell_value,
            buy_value,
            is_intraday: true,
            state: rates::DEFAULT_STATE.to_string(),
            brokerage_per_order: Decimal::from(rates::DEFAULT_BROKERAGE_PER_ORDER),
            number_of_orders: rates::DEFAULT_ORDER_COUNT,
        }
    }

    /// Derive the value fields from a trade's economics.
    pub fn for_trade(instrument: Instrument, trade: &TradeEconomics) -> Self {
        let values = trade.values();
        CalculationParams::new(
            instrument,
            trade.gross_pnl(),
            values.turnover,
            values.sell_value,
            values.buy_value,
        )
    }
}

/// One computed charge line per levy, plus their sum. Every field is
/// rounded to the paisa; `total_charges` is the sum of the ROUNDED fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    pub stt: Decimal,
    pub exchange_charges: Decimal,
    pub gst: Decimal,
    pub stamp_duty: Decimal,
    pub sebi_charges: Decimal,
    pub brokerage: Decimal,
    pub total_charges: Decimal,
}
