// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::RecordError;
use crate::indicator;

/// A calendar year.
pub type Year = u16;

const NAME_KEY: &str = "Country Name";
const CODE_KEY: &str = "Country Code";

/// A sparse year → value series for one indicator of one country.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndicatorSeries(BTreeMap<Year, f64>);

impl IndicatorSeries {
    /// The value for `year`, if the source had one.
    pub fn get(&self, year: Year) -> Option<f64> {
        self.0.get(&year).copied()
    }

    /// Number of years with a value.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no year has a value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(year, value)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (Year, f64)> + '_ {
        self.0.iter().map(|(&y, &v)| (y, v))
    }

    /// Parses one JSON year map, skipping entries that carry no usable number.
    ///
    /// Year keys are decimal strings; values may be numbers or numeric strings (some
    /// indicators are passed through unparsed by the preparation scripts).
    fn from_json(name: &str, object: &Map<String, Value>) -> Self {
        let mut out = BTreeMap::new();
        for (key, value) in object {
            let Ok(year) = key.trim().parse::<Year>() else {
                tracing::debug!(indicator = name, key = %key, "skipping non-year key");
                continue;
            };
            let parsed = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            match parsed {
                Some(v) if v.is_finite() => {
                    out.insert(year, v);
                }
                _ if value.is_null() => {}
                _ => {
                    tracing::debug!(indicator = name, year, "skipping non-numeric value");
                }
            }
        }
        Self(out)
    }
}

impl FromIterator<(Year, f64)> for IndicatorSeries {
    fn from_iter<T: IntoIterator<Item = (Year, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One country: its name, 3-letter code, and indicator series by name.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct CountryRecord {
    name: String,
    code: String,
    indicators: BTreeMap<String, IndicatorSeries>,
}

impl CountryRecord {
    /// Creates a record with no indicator data.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            indicators: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) an indicator series.
    #[must_use]
    pub fn with_series(
        mut self,
        indicator: impl Into<String>,
        values: impl IntoIterator<Item = (Year, f64)>,
    ) -> Self {
        self.indicators
            .insert(indicator.into(), values.into_iter().collect());
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unique 3-letter country code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The series for `indicator`, if the record has one.
    pub fn indicator(&self, indicator: &str) -> Option<&IndicatorSeries> {
        self.indicators.get(indicator)
    }

    /// Indicator names carried by this record, sorted.
    pub fn indicator_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.indicators.keys().map(String::as_str)
    }

    /// The value of `indicator` in `year`; `None` when either is missing.
    pub fn value(&self, indicator: &str, year: Year) -> Option<f64> {
        self.indicator(indicator).and_then(|s| s.get(year))
    }

    /// GDP in `year`.
    pub fn gdp(&self, year: Year) -> Option<f64> {
        self.value(indicator::GDP, year)
    }

    /// CO2 emissions in `year`.
    pub fn co2(&self, year: Year) -> Option<f64> {
        self.value(indicator::CO2, year)
    }

    /// Population in `year`.
    pub fn population(&self, year: Year) -> Option<f64> {
        self.value(indicator::POPULATION, year)
    }
}

fn required_string(
    object: &mut Map<String, Value>,
    key: &'static str,
) -> Result<String, RecordError> {
    match object.remove(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(RecordError::NotAString(key)),
        None => Err(RecordError::MissingField(key)),
    }
}

impl TryFrom<Map<String, Value>> for CountryRecord {
    type Error = RecordError;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        let name = required_string(&mut object, NAME_KEY)?;
        let code = required_string(&mut object, CODE_KEY)?;
        let indicators = object
            .iter()
            .filter_map(|(key, value)| {
                let series = value.as_object()?;
                Some((key.clone(), IndicatorSeries::from_json(key, series)))
            })
            .collect();
        Ok(Self {
            name,
            code,
            indicators,
        })
    }
}
