// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use co2viz_data::DatasetError;
use thiserror::Error;

/// Errors returned by [`crate::ChartController::load`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data source could not be read.
    #[error("failed to fetch `{location}`: {source}")]
    Io {
        /// Where the data was expected.
        location: String,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The data source answered with something other than success.
    #[error("fetching `{location}` returned status {status}")]
    Status {
        /// Where the data was expected.
        location: String,
        /// The status code received.
        status: u16,
    },
    /// The payload is not a valid dataset document.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl LoadError {
    /// The one-line message shown to the user when loading fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Status { .. } => "The request did not return success code 200.",
            Self::Io { .. } | Self::Dataset(_) => {
                "There was a problem fetching the data to populate the graph."
            }
        }
    }
}
