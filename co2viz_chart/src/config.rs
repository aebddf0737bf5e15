// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use co2viz_charts::DEFAULT_GRADIENT;
use co2viz_data::{Year, indicator};
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Fixed bounds of a logarithmic axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    /// Lower bound, exclusive of zero.
    pub min: f64,
    /// Upper bound; always the last tick.
    pub max: f64,
}

/// Inclusive range of selectable years.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// First selectable year.
    pub first: Year,
    /// Last selectable year.
    pub last: Year,
}

impl YearRange {
    /// Clamps `year` into the range.
    pub fn clamp(&self, year: Year) -> Year {
        year.clamp(self.first.min(self.last), self.last.max(self.first))
    }

    /// Whether `year` is inside the range.
    pub fn contains(&self, year: Year) -> bool {
        (self.first..=self.last).contains(&year)
    }

    /// Years in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Year> {
        self.first..=self.last
    }
}

/// Pre-logged domain of the color indicator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorDomain {
    /// `ln` of the smallest value mapped to the first gradient stop.
    pub min: f64,
    /// `ln` of the value mapped to the last gradient stop.
    pub max: f64,
}

/// Everything the chart needs to know at construction.
///
/// Deserializes from JSON with every field optional; missing fields take the
/// [`Default`] values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Id of the element hosting the chart.
    pub element_id: String,
    /// Where the combined dataset lives.
    pub data_path: String,
    /// GDP axis.
    pub x_axis: AxisBounds,
    /// CO2 axis.
    pub y_axis: AxisBounds,
    /// Indicator driving the bubble color.
    pub color_key: String,
    /// Domain of the color indicator.
    pub color_domain: ColorDomain,
    /// Years offered by the slider and year picker.
    pub years: YearRange,
    /// Year shown after loading.
    pub initial_year: Year,
    /// Gradient name shown after loading.
    pub color_mode: String,
    /// Plot area in pixels.
    pub plot_size: Size,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            element_id: "gdp-chart".to_owned(),
            data_path: "data/json/combined_data.json".to_owned(),
            x_axis: AxisBounds { min: 50.0, max: 2e5 },
            y_axis: AxisBounds { min: 5.0, max: 2e7 },
            color_key: indicator::GDP.to_owned(),
            color_domain: ColorDomain {
                min: 0.0,
                max: 2e5_f64.ln(),
            },
            years: YearRange {
                first: 1990,
                last: 2014,
            },
            initial_year: 2014,
            color_mode: DEFAULT_GRADIENT.to_owned(),
            plot_size: Size::new(800.0, 500.0),
        }
    }
}

impl ChartConfig {
    /// Parses a JSON configuration, filling omitted fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
