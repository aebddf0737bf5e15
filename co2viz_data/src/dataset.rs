// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::Read;

use hashbrown::HashMap;
use serde::Deserialize;

use crate::error::DatasetError;
use crate::record::CountryRecord;

#[derive(Deserialize)]
struct Document {
    data: Vec<CountryRecord>,
    #[serde(default)]
    ids: HashMap<String, usize>,
}

/// The loaded country records plus a country-code index.
///
/// Built once and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<CountryRecord>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Builds a dataset from records, indexing them by country code.
    pub fn from_records(records: Vec<CountryRecord>) -> Result<Self, DatasetError> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, rec) in records.iter().enumerate() {
            if index.insert(rec.code().to_owned(), i).is_some() {
                return Err(DatasetError::DuplicateCode(rec.code().to_owned()));
            }
        }
        Ok(Self { records, index })
    }

    /// Parses the `{ data, ids }` document.
    ///
    /// The code index is rebuilt from the records; a document `ids` map that disagrees
    /// with it is reported and ignored.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Self::from_document(serde_json::from_str(json)?)
    }

    /// Parses the document from raw bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        Self::from_document(serde_json::from_slice(bytes)?)
    }

    /// Parses the document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, DatasetError> {
        Self::from_document(serde_json::from_reader(reader)?)
    }

    fn from_document(doc: Document) -> Result<Self, DatasetError> {
        let dataset = Self::from_records(doc.data)?;
        if !doc.ids.is_empty() && doc.ids != dataset.index {
            tracing::warn!(
                document_ids = doc.ids.len(),
                records = dataset.records.len(),
                "dataset `ids` map disagrees with the records; using a rebuilt index"
            );
        }
        tracing::debug!(records = dataset.records.len(), "dataset parsed");
        Ok(dataset)
    }

    /// Records in document order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of the record with `code`.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.index.get(code).copied()
    }

    /// The record with `code`.
    pub fn get(&self, code: &str) -> Option<&CountryRecord> {
        self.position(code).map(|i| &self.records[i])
    }

    /// Iterates records in document order.
    pub fn iter(&self) -> core::slice::Iter<'_, CountryRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CountryRecord;
    type IntoIter = core::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
