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

//! Error types for CSV rendering.

use thiserror::Error;

/// CSV rendering error types.
#[derive(Debug, Error)]
pub enum CsvError {
    /// A row has no value for a problem size another row reported.
    ///
    /// Every data key must be sampled at every problem size in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchsum_csv::CsvError;
    ///
    /// let err = CsvError::SparseRow {
    ///     key: "Basic; P=4".to_string(),
    ///     problem_size: 1024,
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Row 'Basic; P=4' has no value for problem size 1024"
    /// );
    /// ```
    #[error("Row '{key}' has no value for problem size {problem_size}")]
    SparseRow {
        /// Data key of the incomplete row.
        key: String,
        /// First problem size the row is missing.
        problem_size: u64,
    },

    /// I/O error while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Output was not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// What was being produced.
        context: String,
    },
}

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;
