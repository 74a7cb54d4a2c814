// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::{CalculationParams, ChargeBreakdown, Instrument};
use crate::rates::RATES;
use crate::utils::round_paisa;

/// Compute every regulatory and brokerage charge for one round-trip trade.
///
/// Pure function over the immutable rate schedule: identical params always
/// produce an identical breakdown. Components are computed at full
/// precision, rounded to the paisa independently, and `total_charges` is
/// the sum of the rounded fields. Summing first and rounding once can
/// differ by a paisa and must not be substituted.
pub fn compute_charges(params: &CalculationParams) -> ChargeBreakdown {
    let rates = &*RATES;

    let (stt, exchange_charges) = match params.instrument {
        Instrument::Options => (
            params.sell_value * rates.stt.options_sell,
            params.turnover * rates.exchange.nse_options,
        ),
        Instrument::Futures => (
            params.sell_value * rates.stt.futures_sell,
            params.turnover * rates.exchange.nse_futures,
        ),
        Instrument::Equity => {
            let stt = if params.is_intraday {
                params.sell_value * rates.stt.equity_intraday
            } else {
                (params.buy_value + params.sell_value) * rates.stt.equity_delivery
            };
            (stt, params.turnover * rates.exchange.nse_equity)
        }
        // CTT is not modeled; only the exchange charge applies.
        Instrument::Commodities => (
            Decimal::ZERO,
            params.turnover * rates.exchange.mcx_commodities,
        ),
    };

    let sebi_charges = params.turnover * rates.sebi_turnover;
    let brokerage = params.brokerage_per_order * Decimal::from(params.number_of_orders);
    // GST applies to brokerage, exchange and SEBI charges at full
    // precision; STT and stamp duty are outside its base.
    let gst = (brokerage + exchange_charges + sebi_charges) * rates.gst;
    let stamp_duty = params.buy_value * rates.stamp_duty_rate(&params.state);

    let stt = round_paisa(stt);
    let exchange_charges = round_paisa(exchange_charges);
    let gst = round_paisa(gst);
    let stamp_duty = round_paisa(stamp_duty);
    let sebi_charges = round_paisa(sebi_charges);
    let brokerage = round_paisa(brokerage);
    let total_charges = stt + exchange_charges + gst + stamp_duty + sebi_charges + brokerage;

    ChargeBreakdown {
        stt,
        exchange_charges,
        gst,
        stamp_duty,
        sebi_charges,
        brokerage,
        total_charges,
    }
}
