// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text for the side panel and bubble tooltips.

use core::fmt;

use co2viz_data::{CountryRecord, Year, indicator};

use crate::entry::BubbleEntry;

/// Optional panel rows, in display order.
const EXTRA_ROWS: [(&str, &str); 8] = [
    ("Agricultural land(sq. km)", indicator::AGRICULTURAL_LAND),
    ("Methane emissions", indicator::METHANE_EMISSIONS),
    ("Other greenhouse gas emissions", indicator::OTHER_GHG_EMISSIONS),
    ("Energy use(kg oil per capita)", indicator::ENERGY_USE),
    ("Power consumption(kWh per capita)", indicator::POWER_CONSUMPTION),
    ("Forest Area(sq. km)", indicator::FOREST_AREA),
    ("Cereal Yield(kg per hectare)", indicator::CEREAL_YIELD),
    ("Water Accessibility(%)", indicator::WATER_ACCESS),
];

/// One labeled value in the country panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoRow {
    /// Row label.
    pub label: &'static str,
    /// Formatted value.
    pub value: String,
}

/// The side panel contents for one country and year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryInfo {
    /// Panel heading.
    pub name: String,
    /// Rows with a value for the year; missing indicators are left out.
    pub rows: Vec<InfoRow>,
}

impl fmt::Display for CountryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for row in &self.rows {
            write!(f, "\n{}: {}", row.label, row.value)?;
        }
        Ok(())
    }
}

/// What the side panel shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InfoPanel {
    /// General chart information; nothing hovered or selected.
    #[default]
    Overview,
    /// Details of one country.
    Country(CountryInfo),
}

/// Builds the panel for `record` in `year`.
pub fn country_info(record: &CountryRecord, year: Year) -> CountryInfo {
    let mut rows = Vec::new();
    let mut push = |label, value: Option<f64>, fmt: fn(f64) -> String| {
        if let Some(v) = value {
            rows.push(InfoRow {
                label,
                value: fmt(v),
            });
        }
    };
    push("GDP", record.gdp(year), fixed2);
    push("CO2(kt)", record.co2(year), fixed2);
    push("Population", record.population(year), plain);
    for (label, key) in EXTRA_ROWS {
        push(label, record.value(key, year), fixed2);
    }
    CountryInfo {
        name: record.name().to_owned(),
        rows,
    }
}

/// Tooltip lines for a bubble: the name, then GDP, CO2 and population.
pub fn tooltip_lines(entry: &BubbleEntry) -> Vec<String> {
    vec![
        entry.name.clone(),
        format!("GDP: {}", or_no_data(entry.x, fixed5)),
        format!("CO2: {}", or_no_data(entry.y, fixed5)),
        format!("Population: {}", or_no_data(entry.population, plain)),
    ]
}

fn or_no_data(value: Option<f64>, fmt: fn(f64) -> String) -> String {
    value.map_or_else(|| "no data".to_owned(), fmt)
}

fn fixed2(v: f64) -> String {
    format!("{v:.2}")
}

fn fixed5(v: f64) -> String {
    format!("{v:.5}")
}

fn plain(v: f64) -> String {
    format!("{v}")
}
