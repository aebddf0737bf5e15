// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where the dataset document comes from.

use std::future::Future;
use std::path::PathBuf;

use crate::error::LoadError;

/// The success status of a fetch.
pub const STATUS_OK: u16 = 200;

/// An asynchronous source of the raw dataset document.
pub trait DataSource {
    /// A human-readable location, used in logs and errors.
    fn location(&self) -> String;

    /// Fetches the whole document.
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LoadError>>;
}

/// Reads the document from the local filesystem.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// A source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        std::fs::read(&self.path).map_err(|source| LoadError::Io {
            location: self.location(),
            source,
        })
    }
}

/// A canned response, for embedding a document in a binary or scripting a failure.
#[derive(Clone, Debug)]
pub struct StaticSource {
    location: String,
    status: u16,
    body: Vec<u8>,
}

impl StaticSource {
    /// A successful response carrying `body`.
    pub fn new(location: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            location: location.into(),
            status: STATUS_OK,
            body: body.into(),
        }
    }

    /// Replaces the response status; anything but [`STATUS_OK`] fails the fetch.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

impl DataSource for StaticSource {
    fn location(&self) -> String {
        self.location.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        if self.status != STATUS_OK {
            return Err(LoadError::Status {
                location: self.location.clone(),
                status: self.status,
            });
        }
        Ok(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_reports_status() {
        let ok = StaticSource::new("mem", "{}");
        assert_eq!(pollster::block_on(ok.fetch()).unwrap(), b"{}");

        let missing = StaticSource::new("mem", "{}").with_status(404);
        let err = pollster::block_on(missing.fetch()).unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
        assert_eq!(err.user_message(), "The request did not return success code 200.");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let src = FileSource::new("definitely/not/here.json");
        let err = pollster::block_on(src.fetch()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.json"), "{err}");
    }
}
