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

//! The aggregation table: data key → problem size → metric value.
//!
//! Rows are keyed by a data key string such as `"BLAS; P=4"`. Both levels are
//! ordered maps, so iteration yields keys in lexicographic order and problem
//! sizes in numeric order without a separate sort.

use crate::error::{Result, SummaryError};
use std::collections::{BTreeMap, BTreeSet};

/// Build the data key for a sample.
///
/// With a known concurrency the key is `"<label>; P=<n>"`; otherwise it is
/// the bare label. Normalized tables always pass `None`.
///
/// # Examples
///
/// ```
/// use benchsum_core::data_key;
///
/// assert_eq!(data_key("BLAS", Some(4)), "BLAS; P=4");
/// assert_eq!(data_key("Blocked; B=4", Some(1)), "Blocked; B=4; P=1");
/// assert_eq!(data_key("BLAS", None), "BLAS");
/// ```
pub fn data_key(label: &str, concurrency: Option<u32>) -> String {
    match concurrency {
        Some(p) => format!("{}; P={}", label, p),
        None => label.to_string(),
    }
}

/// Data key of the single-thread run a speedup is measured against.
pub fn speedup_baseline_key(label: &str) -> String {
    data_key(label, Some(1))
}

/// Accumulated metric values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricTable {
    rows: BTreeMap<String, BTreeMap<u64, f64>>,
    problem_sizes: BTreeSet<u64>,
}

impl MetricTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` at `(key, problem_size)`, replacing any earlier value,
    /// and record the problem size as a column.
    pub fn insert(&mut self, key: &str, problem_size: u64, value: f64) {
        self.rows
            .entry(key.to_string())
            .or_default()
            .insert(problem_size, value);
        self.problem_sizes.insert(problem_size);
    }

    /// Value at `(key, problem_size)`, if recorded.
    pub fn get(&self, key: &str, problem_size: u64) -> Option<f64> {
        self.rows.get(key)?.get(&problem_size).copied()
    }

    /// Divide the value at `(key, problem_size)` by the value the `baseline`
    /// row holds at the same problem size.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::MissingBaseline`] if the baseline has no value
    /// at that problem size. A missing numerator is a no-op.
    pub fn divide_by(&mut self, key: &str, problem_size: u64, baseline: &str) -> Result<()> {
        let divisor = self
            .get(baseline, problem_size)
            .ok_or_else(|| SummaryError::missing_baseline(baseline, problem_size))?;
        if let Some(value) = self
            .rows
            .get_mut(key)
            .and_then(|row| row.get_mut(&problem_size))
        {
            *value /= divisor;
        }
        Ok(())
    }

    /// Overwrite every value in the `baseline` row with 1.
    ///
    /// Used once all categories have been scanned and divided by the
    /// baseline during insertion, leaving the baseline as the reference line.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::MissingBaselineRow`] if the row does not exist.
    pub fn finish_normalization(&mut self, baseline: &str) -> Result<()> {
        let row = self
            .rows
            .get_mut(baseline)
            .ok_or_else(|| SummaryError::MissingBaselineRow {
                key: baseline.to_string(),
            })?;
        for value in row.values_mut() {
            *value = 1.0;
        }
        Ok(())
    }

    /// Every problem size recorded by any row, ascending.
    pub fn problem_sizes(&self) -> impl Iterator<Item = u64> + '_ {
        self.problem_sizes.iter().copied()
    }

    /// Number of distinct problem sizes.
    pub fn column_count(&self) -> usize {
        self.problem_sizes.len()
    }

    /// Rows in lexicographic key order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &BTreeMap<u64, f64>)> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// One row by key.
    pub fn row(&self, key: &str) -> Option<&BTreeMap<u64, f64>> {
        self.rows.get(key)
    }

    /// Data keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no sample has been recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells that are in the column set but missing from their row, in
    /// key then problem-size order.
    pub fn missing_cells(&self) -> Vec<(&str, u64)> {
        let mut missing = Vec::new();
        for (key, row) in &self.rows {
            for &n in &self.problem_sizes {
                if !row.contains_key(&n) {
                    missing.push((key.as_str(), n));
                }
            }
        }
        missing
    }
}
