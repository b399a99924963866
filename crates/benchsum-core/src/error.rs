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

//! Error types for log scanning and aggregation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building a metric table.
///
/// # Examples
///
/// ```
/// use benchsum_core::SummaryError;
///
/// let err = SummaryError::MissingBaseline {
///     key: "Basic; P=1".to_string(),
///     problem_size: 16,
/// };
/// assert_eq!(
///     err.to_string(),
///     "Missing baseline 'Basic; P=1' for problem size 16"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummaryError {
    /// The transformation name is not one of the supported identifiers.
    #[error("Unsupported transformation '{name}'. Supported: {supported}")]
    UnsupportedTransformation {
        /// The rejected name.
        name: String,
        /// Comma-separated list of accepted names.
        supported: String,
    },

    /// A requested category has no entry in the category table.
    #[error("Unknown category '{label}'. Known categories: {known}")]
    UnknownCategory {
        /// The requested label.
        label: String,
        /// Comma-separated list of known labels.
        known: String,
    },

    /// A speedup or normalization step needed a reference value that has not
    /// been recorded yet.
    #[error("Missing baseline '{key}' for problem size {problem_size}")]
    MissingBaseline {
        /// Data key the reference value was looked up under.
        key: String,
        /// Problem size of the lookup.
        problem_size: u64,
    },

    /// The baseline row for normalization was never populated.
    #[error("Baseline category '{key}' has no samples")]
    MissingBaselineRow {
        /// The baseline data key.
        key: String,
    },

    /// Reading a log source failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The source path (or a descriptive name for in-memory sources).
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// A category table file could not be parsed.
    #[error("Invalid category table: {0}")]
    CategoryTable(String),
}

impl SummaryError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a missing-baseline error.
    pub fn missing_baseline(key: impl Into<String>, problem_size: u64) -> Self {
        Self::MissingBaseline {
            key: key.into(),
            problem_size,
        }
    }
}

/// Result type for benchsum-core operations.
pub type Result<T> = std::result::Result<T, SummaryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_unsupported_transformation_display() {
        let err = SummaryError::UnsupportedTransformation {
            name: "gflops".to_string(),
            supported: "runtime, mflops".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'gflops'"));
        assert!(msg.contains("runtime, mflops"));
    }

    #[test]
    fn test_unknown_category_display() {
        let err = SummaryError::UnknownCategory {
            label: "Tiled".to_string(),
            known: "'BLAS', 'Basic'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown category 'Tiled'. Known categories: 'BLAS', 'Basic'"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = SummaryError::io_error(
            "logs/job-blas.out",
            io::Error::new(io::ErrorKind::NotFound, "No such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("logs/job-blas.out"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_missing_baseline_row_display() {
        let err = SummaryError::MissingBaselineRow {
            key: "BLAS".to_string(),
        };
        assert_eq!(err.to_string(), "Baseline category 'BLAS' has no samples");
    }
}
