// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use co2viz_charts::{ChartColor, Gradient, SELECTED_COLOR, color_for};
use co2viz_data::{CountryRecord, Year};

use crate::config::ColorDomain;

/// Bubble radius for a population: half its natural log.
///
/// Missing, non-positive, or tiny (radius below zero) populations have no bubble.
pub fn radius_for(population: Option<f64>) -> Option<f64> {
    let p = population.filter(|p| p.is_finite() && *p > 0.0)?;
    let r = p.ln() / 2.0;
    (r > 0.0).then_some(r)
}

/// The visual attributes of one country for the displayed year.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleEntry {
    /// Country code.
    pub code: String,
    /// Country name, used as the series label.
    pub name: String,
    /// GDP for the year; `None` when the year has no value.
    pub x: Option<f64>,
    /// CO2 emissions for the year.
    pub y: Option<f64>,
    /// Radius in pixels.
    pub radius: Option<f64>,
    /// Raw population, for tooltips.
    pub population: Option<f64>,
    /// Data-driven color; unaffected by selection.
    pub data_color: ChartColor,
    /// Whether this is the selected country.
    pub selected: bool,
}

impl BubbleEntry {
    /// Derives the entry for `record` in `year`.
    pub fn for_year(
        record: &CountryRecord,
        year: Year,
        color_key: &str,
        domain: ColorDomain,
        gradient: &Gradient,
    ) -> Self {
        let population = record.population(year);
        Self {
            code: record.code().to_owned(),
            name: record.name().to_owned(),
            x: record.gdp(year),
            y: record.co2(year),
            radius: radius_for(population),
            population,
            data_color: color_for(record.value(color_key, year), domain.min, domain.max, gradient),
            selected: false,
        }
    }

    /// Recomputes the data-driven color from `record`.
    pub fn restyle(
        &mut self,
        record: &CountryRecord,
        year: Year,
        color_key: &str,
        domain: ColorDomain,
        gradient: &Gradient,
    ) {
        self.data_color = color_for(record.value(color_key, year), domain.min, domain.max, gradient);
    }

    /// The color to paint: full red when selected, the data color otherwise.
    pub fn color(&self) -> ChartColor {
        if self.selected {
            SELECTED_COLOR
        } else {
            self.data_color
        }
    }

    /// Whether the bubble can be placed (both coordinates and a radius).
    pub fn is_placed(&self) -> bool {
        self.x.is_some() && self.y.is_some() && self.radius.is_some()
    }
}
