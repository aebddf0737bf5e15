// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// A country record that cannot be interpreted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A required key is absent.
    #[error("country record is missing `{0}`")]
    MissingField(&'static str),
    /// A required key holds something other than a string.
    #[error("country record field `{0}` must be a string")]
    NotAString(&'static str),
}

/// Errors returned when loading a [`crate::Dataset`].
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The document is not valid JSON or does not have the expected shape.
    ///
    /// A [`RecordError`] inside the document also lands here, carried by the JSON error.
    #[error("malformed dataset document: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading the document failed.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    /// Two records share a country code.
    #[error("duplicate country code `{0}`")]
    DuplicateCode(String),
}
