// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for axis tick labels.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Formats `value` with comma thousands separators and at most three fractional digits.
///
/// Trailing fractional zeros are dropped, so `200000.0` becomes `"200,000"` and `0.25`
/// stays `"0.25"`. Non-finite values use Rust's default formatting.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
