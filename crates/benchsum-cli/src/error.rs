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


//! Structured error types for the benchsum CLI.
//!
//! Command functions return `Result<T, CliError>`; `main` prints the error
//! and exits with a failure code.

use benchsum_core::SummaryError;
use benchsum_csv::CsvError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchsum CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use benchsum_cli::error::CliError;
///
/// fn load(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error(
        "File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB). \
         Set BENCHSUM_MAX_FILE_SIZE to raise the limit"
    )]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// Scanning or aggregation failed.
    #[error(transparent)]
    Summary(#[from] SummaryError),

    /// The table could not be rendered as CSV.
    #[error("CSV output error: {0}")]
    Csv(String),

    /// A category contributed no sample and `--strict` was given.
    #[error("Category '{category}' produced no samples from '{path}'")]
    NoSamples {
        /// The category label
        category: String,
        /// The log file that was scanned
        path: PathBuf,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    ///
    /// ```
    /// use benchsum_cli::error::CliError;
    ///
    /// let err = CliError::file_too_large("job-blas.out", 5_000_000, 1024 * 1024);
    /// assert!(err.to_string().contains("1 MB"));
    /// ```
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

// CsvError wraps non-Clone library errors, so only its message is kept.
impl From<CsvError> for CliError {
    fn from(source: CsvError) -> Self {
        Self::Csv(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "no-metrics/job-blas.out",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("no-metrics/job-blas.out"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.out", 200_000_000, 100 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.out"));
        assert!(msg.contains("200000000 bytes"));
        assert!(msg.contains("100 MB"));
        assert!(msg.contains("BENCHSUM_MAX_FILE_SIZE"));
    }

    #[test]
    fn test_summary_error_is_transparent() {
        let inner = SummaryError::missing_baseline("BLAS", 64);
        let err: CliError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_csv_error_conversion() {
        let err: CliError = CsvError::SparseRow {
            key: "Basic; P=4".to_string(),
            problem_size: 128,
        }
        .into();
        assert!(matches!(err, CliError::Csv(_)));
        assert!(err.to_string().contains("Basic; P=4"));
    }

    #[test]
    fn test_no_samples_display() {
        let err = CliError::NoSamples {
            category: "Blocked; B=4".to_string(),
            path: PathBuf::from("no-metrics/job-blocked-omp.out"),
        };
        assert_eq!(
            err.to_string(),
            "Category 'Blocked; B=4' produced no samples from 'no-metrics/job-blocked-omp.out'"
        );
    }

    #[test]
    fn test_error_cloning() {
        let err = CliError::invalid_input("empty category list");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
