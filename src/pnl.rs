// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ChargeBreakdown, TradeSide};
use crate::utils::round_paisa;

/// Buy-side value, sell-side value and their sum for one round trip.
/// Carried at full precision; rounding happens only in the charge
/// breakdown and the net P&L.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeValues {
    pub buy_value: Decimal,
    pub sell_value: Decimal,
    pub turnover: Decimal,
}

/// Derive buy value, sell value and turnover from trade economics.
pub fn trade_values(
    entry_price: Decimal,
    exit_price: Decimal,
    quantity: Decimal,
    lot_size: Decimal,
) -> TradeValues {
    let total_quantity = quantity * lot_size;
    let buy_value = entry_price * total_quantity;
    let sell_value = exit_price * total_quantity;
    TradeValues {
        buy_value,
        sell_value,
        turnover: buy_value + sell_value,
    }
}

/// Gross P&L before charges. A BUY (long-first) trade profits when price
/// rises; a SELL (short-first) trade profits when price falls.
pub fn gross_pnl(
    entry_price: Decimal,
    exit_price: Decimal,
    quantity: Decimal,
    lot_size: Decimal,
    side: TradeSide,
) -> Decimal {
    let total_quantity = quantity * lot_size;
    match side {
        TradeSide::Buy => (exit_price - entry_price) * total_quantity,
        TradeSide::Sell => (entry_price - exit_price) * total_quantity,
    }
}

/// Net P&L after charges, rounded to the paisa.
pub fn net_pnl(gross_pnl: Decimal, charges: &ChargeBreakdown) -> Decimal {
    round_paisa(gross_pnl - charges.total_charges)
}
