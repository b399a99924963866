// Dweve benchsum - Benchmark log summarizer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Experiment categories and the table mapping them to log files.

use crate::error::{Result, SummaryError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

static BLOCK_SUFFIX: OnceLock<Regex> = OnceLock::new();

fn block_suffix() -> &'static Regex {
    BLOCK_SUFFIX.get_or_init(|| {
        Regex::new(r"B=([0-9]+)").unwrap_or_else(|e| panic!("invalid block suffix pattern: {e}"))
    })
}

/// A named experiment variant backed by one log file.
///
/// Labels of the form `"Blocked; B=4"` select only the samples a log reports
/// under that block size, so several variants can share one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    label: String,
    filename: String,
    desired_block_size: Option<String>,
}

impl Category {
    /// Create a category, extracting the `B=<n>` block-size suffix if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchsum_core::Category;
    ///
    /// let blocked = Category::new("Blocked; B=16", "job-blocked-omp.out");
    /// assert_eq!(blocked.desired_block_size(), Some("16"));
    ///
    /// let blas = Category::new("BLAS", "job-blas.out");
    /// assert_eq!(blas.desired_block_size(), None);
    /// ```
    pub fn new(label: impl Into<String>, filename: impl Into<String>) -> Self {
        let label = label.into();
        let desired_block_size = block_suffix()
            .captures(&label)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());
        Self {
            label,
            filename: filename.into(),
            desired_block_size,
        }
    }

    /// The human-readable label, used as the data-key prefix.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Log filename relative to the input directory.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Block size this category accepts samples for, if any.
    pub fn desired_block_size(&self) -> Option<&str> {
        self.desired_block_size.as_deref()
    }
}

/// Mapping from category label to log filename.
///
/// Deserializes from a flat YAML mapping:
///
/// ```yaml
/// BLAS: job-blas.out
/// "Blocked; B=4": job-blocked-omp.out
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    entries: BTreeMap<String, String>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        let entries = [
            ("BLAS", "job-blas.out"),
            ("Basic", "job-basic-omp.out"),
            ("Blocked; B=4", "job-blocked-omp.out"),
            ("Blocked; B=16", "job-blocked-omp.out"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { entries }
    }
}

impl CategoryTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parse a table from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::CategoryTable`] if the text is not a mapping of
    /// strings to strings, or if the mapping is empty.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let table: CategoryTable =
            serde_yaml::from_str(yaml).map_err(|e| SummaryError::CategoryTable(e.to_string()))?;
        if table.entries.is_empty() {
            return Err(SummaryError::CategoryTable(
                "table has no categories".to_string(),
            ));
        }
        Ok(table)
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, label: impl Into<String>, filename: impl Into<String>) {
        self.entries.insert(label.into(), filename.into());
    }

    /// Look up a category by label.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::UnknownCategory`] listing the known labels.
    pub fn lookup(&self, label: &str) -> Result<Category> {
        match self.entries.get(label) {
            Some(filename) => Ok(Category::new(label, filename.as_str())),
            None => Err(SummaryError::UnknownCategory {
                label: label.to_string(),
                known: self
                    .entries
                    .keys()
                    .map(|k| format!("'{}'", k))
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    /// Resolve a comma-separated category list, trimming whitespace around
    /// each label. Empty items are skipped.
    pub fn resolve_list(&self, list: &str) -> Result<Vec<Category>> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|label| self.lookup(label))
            .collect()
    }

    /// Iterate `(label, filename)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = CategoryTable::default();
        assert_eq!(table.len(), 4);
        assert_eq!(table.lookup("BLAS").unwrap().filename(), "job-blas.out");
        assert_eq!(
            table.lookup("Blocked; B=4").unwrap().filename(),
            table.lookup("Blocked; B=16").unwrap().filename()
        );
    }

    #[test]
    fn test_block_suffix_extraction() {
        assert_eq!(
            Category::new("Blocked; B=4", "f").desired_block_size(),
            Some("4")
        );
        assert_eq!(Category::new("Basic", "f").desired_block_size(), None);
        // '=' without a block size is just part of the label.
        assert_eq!(Category::new("Tuned; O=3", "f").desired_block_size(), None);
    }

    #[test]
    fn test_unknown_category_lists_known() {
        let err = CategoryTable::default().lookup("Tiled").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'Tiled'"));
        assert!(msg.contains("'BLAS'"));
        assert!(msg.contains("'Blocked; B=16'"));
    }

    #[test]
    fn test_resolve_list_trims() {
        let cats = CategoryTable::default()
            .resolve_list("BLAS, Blocked; B=4 ,")
            .unwrap();
        let labels: Vec<_> = cats.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["BLAS", "Blocked; B=4"]);
    }

    #[test]
    fn test_resolve_list_fails_on_unknown() {
        assert!(CategoryTable::default()
            .resolve_list("BLAS,Nope")
            .is_err());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "MKL: job-mkl.out\n\"Tiled; B=32\": job-tiled.out\n";
        let table = CategoryTable::from_yaml_str(yaml).unwrap();
        assert_eq!(table.len(), 2);
        let tiled = table.lookup("Tiled; B=32").unwrap();
        assert_eq!(tiled.filename(), "job-tiled.out");
        assert_eq!(tiled.desired_block_size(), Some("32"));
    }

    #[test]
    fn test_from_yaml_rejects_non_mapping() {
        let err = CategoryTable::from_yaml_str("- a\n- b\n").unwrap_err();
        assert!(matches!(err, SummaryError::CategoryTable(_)));
    }

    #[test]
    fn test_from_yaml_rejects_empty() {
        let err = CategoryTable::from_yaml_str("{}").unwrap_err();
        assert!(err.to_string().contains("no categories"));
    }
}
