// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Country indicator dataset for the CO2 / GDP bubble chart.
//!
//! The data-preparation scripts emit one JSON document:
//!
//! ```json
//! {
//!   "data": [
//!     {
//!       "Country Name": "United States",
//!       "Country Code": "USA",
//!       "GDP Data": { "2014": 55000 },
//!       "CO2 Data": { "2014": 5000000 },
//!       "Population Data": { "2014": 318900000 }
//!     }
//!   ],
//!   "ids": { "USA": 0 }
//! }
//! ```
//!
//! Every key other than the name and code is an indicator: a sparse map from year to
//! value. [`Dataset`] parses that shape into [`CountryRecord`]s and an O(1) code index,
//! and is read-only afterwards.

mod dataset;
mod error;
pub mod indicator;
mod record;

pub use dataset::Dataset;
pub use error::{DatasetError, RecordError};
pub use record::{CountryRecord, IndicatorSeries, Year};
