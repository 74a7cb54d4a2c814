// Copyright (c) 2025 Tradecost contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to 2 decimal places (paisa), half away from zero. The charge
/// pipeline depends on this exact strategy; `round_dp` would apply
/// banker's rounding and drift by a paisa on midpoints.
pub fn round_paisa(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Group an integer digit string the Indian way: last three digits, then
/// pairs. "1234567" -> "12,34,567".
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    let mut i = head.len();
    while i > 2 {
        pairs.push(&head[i - 2..i]);
        i -= 2;
    }
    pairs.push(&head[..i]);
    let mut out = String::new();
    for pair in pairs.iter().rev() {
        out.push_str(pair);
        out.push(',');
    }
    out.push_str(tail);
    out
}

/// Render an amount as rupees with Indian digit grouping and two paisa
/// digits, e.g. "₹1,23,45,678.90". Negative amounts get a leading '-'.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_paisa(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    match text.split_once('.') {
        Some((whole, frac)) => format!("{}₹{}.{}", sign, group_indian(whole), frac),
        None => format!("{}₹{}", sign, group_indian(&text)),
    }
}

/// Compact Indian-convention magnitude: crores, lakhs, thousands, else a
/// plain two-decimal number. Sign is preserved as a leading '-'.
pub fn format_compact(amount: Decimal) -> String {
    let crore = Decimal::from(10_000_000_u64);
    let lakh = Decimal::from(100_000_u64);
    let thousand = Decimal::from(1_000_u64);

    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    let abs = amount.abs();
    if abs >= crore {
        format!("{}{:.2} Cr", sign, round_paisa(abs / crore))
    } else if abs >= lakh {
        format!("{}{:.2} L", sign, round_paisa(abs / lakh))
    } else if abs >= thousand {
        format!("{}{:.2} K", sign, round_paisa(abs / thousand))
    } else {
        format!("{}{:.2}", sign, round_paisa(abs))
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
