// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Fallback key for states without their own stamp-duty entry.
pub const OTHER_STATE: &str = "Other";

/// State assumed when the caller has no stamp-duty preference.
pub const DEFAULT_STATE: &str = "Andhra Pradesh";

/// Flat brokerage per order (₹), discount-broker style.
pub const DEFAULT_BROKERAGE_PER_ORDER: u32 = 20;

/// Entry leg + exit leg.
pub const DEFAULT_ORDER_COUNT: u32 = 2;

/// Securities Transaction Tax rates, as fractions of the relevant value.
#[derive(Debug, Clone)]
pub struct SttRates {
    /// 0.0625% on sell-side premium.
    pub options_sell: Decimal,
    /// 0.01% on sell side.
    pub futures_sell: Decimal,
    /// 0.1% on both buy and sell value.
    pub equity_delivery: Decimal,
    /// 0.025% on sell side.
    pub equity_intraday: Decimal,
}

/// Exchange transaction charges, as fractions of turnover.
#[derive(Debug, Clone)]
pub struct ExchangeRates {
    /// NSE options, 0.053%.
    pub nse_options: Decimal,
    /// NSE futures, 0.02%.
    pub nse_futures: Decimal,
    /// NSE equity, 0.035%.
    pub nse_equity: Decimal,
    /// BSE equity, 0.0375%.
    pub bse: Decimal,
    /// Approximate MCX commodities charge, 0.026%.
    pub mcx_commodities: Decimal,
}

/// The full fee schedule for Indian market trades, fixed at startup.
/// The stamp-duty table is private so the only way in is
/// [`RateSchedule::stamp_duty_rate`], which carries the "Other" fallback.
#[derive(Debug, Clone)]
pub struct RateSchedule {
    pub stt: SttRates,
    pub exchange: ExchangeRates,
    /// SEBI turnover fee, ₹10 per crore = 0.0001%.
    pub sebi_turnover: Decimal,
    /// GST on brokerage + exchange charges + SEBI charges, 18%.
    pub gst: Decimal,
    stamp_duty: BTreeMap<&'static str, Decimal>,
}

impl RateSchedule {
    /// Published rates as of FY 2024.
    fn fy2024() -> Self {
        // Stamp duty is a state levy on the buy side; every state currently
        // listed charges 0.015%.
        let stamp = Decimal::new(15, 5);
        let stamp_duty = BTreeMap::from([
            ("Andhra Pradesh", stamp),
            ("Maharashtra", stamp),
            ("Gujarat", stamp),
            ("Karnataka", stamp),
            ("Delhi", stamp),
            ("Tamil Nadu", stamp),
            ("Telangana", stamp),
            ("West Bengal", stamp),
            ("Rajasthan", stamp),
            (OTHER_STATE, stamp),
        ]);

        RateSchedule {
            stt: SttRates {
                options_sell: Decimal::new(625, 6),
                futures_sell: Decimal::new(1, 4),
                equity_delivery: Decimal::new(1, 3),
                equity_intraday: Decimal::new(25, 5),
            },
            exchange: ExchangeRates {
                nse_options: Decimal::new(53, 5),
                nse_futures: Decimal::new(2, 4),
                nse_equity: Decimal::new(35, 5),
                bse: Decimal::new(375, 6),
                mcx_commodities: Decimal::new(26, 5),
            },
            sebi_turnover: Decimal::new(1, 6),
            gst: Decimal::new(18, 2),
            stamp_duty,
        }
    }

    /// Stamp-duty rate for a state, falling back to "Other" for any name
    /// not in the table (including the empty string).
    pub fn stamp_duty_rate(&self, state: &str) -> Decimal {
        match self.stamp_duty.get(state) {
            Some(rate) => *rate,
            None => self.stamp_duty[OTHER_STATE],
        }
    }

    /// Listed states and their rates, in name order.
    pub fn stamp_duty_table(&self) -> impl Iterator<Item = (&'static str, Decimal)> + '_ {
        self.stamp_duty.iter().map(|(state, rate)| (*state, *rate))
    }
}

/// The process-wide schedule. Initialized once, never mutated.
pub static RATES: Lazy<RateSchedule> = Lazy::new(RateSchedule::fy2024);
