// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed tick planning for logarithmic axes.
//!
//! Automatic tick generation tends to move gridlines whenever the data behind a chart
//! changes. The bubble chart instead plans its ticks once from the fixed axis bounds:
//! every value with a leading digit of `1` or `5` at each order of magnitude, plus the
//! axis maximum. Labels are then thinned further by [`tick_label`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::format::format_grouped;
use crate::scale::ScaleLog;

/// Plans the tick values for a log axis spanning `[min_tick, max_tick]`.
///
/// Walks upward from `min_tick` in steps of the power of ten at or below it; the step
/// grows tenfold each time a new power of ten is reached. Values whose leading digit is
/// `1` or `5` are kept, and `max_tick` is always the final element.
///
/// A non-positive or non-finite `min_tick`, or `max_tick < min_tick`, yields just
/// `[max_tick]`; a non-finite `max_tick` yields no ticks.
pub fn plan_ticks(min_tick: f64, max_tick: f64) -> Vec<f64> {
    if !max_tick.is_finite() {
        return Vec::new();
    }
    if !min_tick.is_finite() || min_tick <= 0.0 || max_tick < min_tick {
        return alloc::vec![max_tick];
    }

    let e = min_tick.log10().floor().clamp(-300.0, 300.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to +/-300")]
    let mut exp = e as i32;
    let mut scale = 10_f64.powi(exp);
    let mut mantissa = min_tick / scale;
    // `log10` can land one ulp off an exact power of ten.
    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exp += 1;
        scale = 10_f64.powi(exp);
    } else if mantissa < 1.0 {
        mantissa *= 10.0;
        exp -= 1;
        scale = 10_f64.powi(exp);
    }

    let mut out = Vec::new();
    loop {
        let value = mantissa * scale;
        if value > max_tick {
            break;
        }
        let lead = mantissa.floor();
        if lead == 1.0 || lead == 5.0 {
            out.push(value);
        }
        mantissa += 1.0;
        if mantissa >= 10.0 {
            mantissa /= 10.0;
            exp += 1;
            scale = 10_f64.powi(exp);
        }
    }

    if out.last() != Some(&max_tick) {
        out.push(max_tick);
    }
    out
}

/// Returns the label for `ticks[index]`.
///
/// Zero is always labeled `"0"`. The first and last ticks are always labeled. Any other
/// tick is labeled only if its formatted value starts with `1` or `5`; the rest get an
/// empty label so their gridlines stay but the axis doesn't get crowded.
pub fn tick_label(tick: f64, index: usize, ticks: &[f64]) -> String {
    let formatted = format_grouped(tick);
    if formatted == "0" {
        return formatted;
    }
    if index == 0 || index + 1 == ticks.len() {
        return formatted;
    }
    match formatted.chars().next() {
        Some('1' | '5') => formatted,
        _ => String::new(),
    }
}

/// Labels for every tick in `ticks`, see [`tick_label`].
pub fn tick_labels(ticks: &[f64]) -> Vec<String> {
    ticks
        .iter()
        .enumerate()
        .map(|(i, &t)| tick_label(t, i, ticks))
        .collect()
}

/// A log axis with fixed bounds and pre-planned ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct LogAxis {
    min: f64,
    max: f64,
    ticks: Vec<f64>,
    labels: Vec<String>,
}

impl LogAxis {
    /// Plans ticks and labels for `[min, max]`.
    pub fn new(min: f64, max: f64) -> Self {
        let ticks = plan_ticks(min, max);
        let labels = tick_labels(&ticks);
        Self {
            min,
            max,
            ticks,
            labels,
        }
    }

    /// Lower axis bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper axis bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Planned tick values, strictly increasing.
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Tick labels aligned with [`LogAxis::ticks`]; suppressed labels are empty.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// A scale mapping this axis' bounds onto `range`.
    pub fn scale(&self, range: (f64, f64)) -> ScaleLog {
        ScaleLog::new((self.min, self.max), range)
    }

    /// Tick positions in `range` paired with their labels.
    pub fn gridlines(&self, range: (f64, f64)) -> Vec<(f64, &str)> {
        let scale = self.scale(range);
        self.ticks
            .iter()
            .zip(&self.labels)
            .filter_map(|(&t, label)| scale.map(t).map(|px| (px, label.as_str())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn gdp_axis_ticks() {
        let ticks = plan_ticks(50.0, 2e5);
        assert_eq!(
            ticks,
            vec![50.0, 100.0, 500.0, 1e3, 5e3, 1e4, 5e4, 1e5, 2e5],
            "leading digits 1 and 5, then the max"
        );
    }

    #[test]
    fn co2_axis_ticks_end_on_max() {
        let ticks = plan_ticks(5.0, 2e7);
        assert_eq!(ticks.first(), Some(&5.0));
        assert_eq!(ticks.last(), Some(&2e7));
        assert!(ticks.windows(2).all(|w| w[0] < w[1]), "{ticks:?}");
    }

    #[test]
    fn max_on_a_kept_value_is_not_duplicated() {
        assert_eq!(plan_ticks(1.0, 500.0), vec![1.0, 5.0, 10.0, 50.0, 100.0, 500.0]);
    }

    #[test]
    fn fractional_minimum() {
        assert_eq!(plan_ticks(0.5, 10.0), vec![0.5, 1.0, 5.0, 10.0]);
    }

    #[test]
    fn degenerate_bounds() {
        assert_eq!(plan_ticks(0.0, 100.0), vec![100.0]);
        assert_eq!(plan_ticks(100.0, 10.0), vec![10.0]);
        assert!(plan_ticks(1.0, f64::INFINITY).is_empty());
    }

    #[test]
    fn ticks_do_not_depend_on_call_history() {
        let a = LogAxis::new(50.0, 2e5);
        let b = LogAxis::new(50.0, 2e5);
        assert_eq!(a, b);
    }

    #[test]
    fn label_rule_keeps_ends_and_leading_one_or_five() {
        let ticks = vec![20.0, 30.0, 50.0, 100.0, 200.0, 1500.0, 7000.0];
        let labels = tick_labels(&ticks);
        assert_eq!(
            labels,
            vec!["20", "", "50", "100", "", "1,500", "7,000"],
            "first/last always labeled"
        );
    }

    #[test]
    fn label_rule_on_planned_axis() {
        let ticks = plan_ticks(50.0, 2e5);
        let labels = tick_labels(&ticks);
        for (i, (tick, label)) in ticks.iter().zip(&labels).enumerate() {
            let lead = format_grouped(*tick).chars().next();
            let expect_label = i == 0 || i + 1 == ticks.len() || matches!(lead, Some('1' | '5'));
            assert_eq!(!label.is_empty(), expect_label, "tick {tick} at {i}");
        }
        assert_eq!(labels.last().map(String::as_str), Some("200,000"));
    }

    #[test]
    fn zero_is_labeled_zero() {
        assert_eq!(tick_label(0.0, 3, &[1.0, 2.0, 3.0, 0.0, 5.0]), "0");
    }

    #[test]
    fn gridlines_are_increasing_in_pixels() {
        let axis = LogAxis::new(50.0, 2e5);
        let lines = axis.gridlines((0.0, 800.0));
        assert_eq!(lines.len(), axis.ticks().len());
        assert!(lines.windows(2).all(|w| w[0].0 < w[1].0));
        assert!((lines[0].0 - 0.0).abs() < 1e-9);
        assert!((lines[lines.len() - 1].0 - 800.0).abs() < 1e-9);
    }
}
