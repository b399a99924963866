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


//! CLI command implementations

mod categories;
mod completion;
mod inspect;
mod summarize;

pub use categories::categories;
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use inspect::{inspect, InspectCounts};
pub use summarize::{summarize, SummarizeConfig};

use crate::error::CliError;
use benchsum_core::CategoryTable;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Default maximum input file size (1 GiB).
/// Can be overridden via the `BENCHSUM_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Maximum file size from `BENCHSUM_MAX_FILE_SIZE`, falling back to
/// [`DEFAULT_MAX_FILE_SIZE`] when unset or not a number.
fn get_max_file_size() -> u64 {
    std::env::var("BENCHSUM_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected from their metadata,
/// before any allocation.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The file size exceeds the maximum allowed size
/// - The file cannot be read or is not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use benchsum_cli::commands::read_file;
///
/// # fn main() -> Result<(), benchsum_cli::error::CliError> {
/// let log = read_file("no-metrics/job-blas.out")?;
/// assert!(!log.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: impl AsRef<Path>) -> Result<String, CliError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
///
/// An existing file is truncated.
///
/// # Errors
///
/// Returns `Err` if the file cannot be written or stdout is closed.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Load the category table from a YAML file, or use the built-in table.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or is not a label to filename
/// mapping.
pub fn load_category_table(path: Option<&Path>) -> Result<CategoryTable, CliError> {
    match path {
        Some(p) => {
            let yaml = read_file(p)?;
            Ok(CategoryTable::from_yaml_str(&yaml)?)
        }
        None => Ok(CategoryTable::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file_names_path() {
        let err = read_file("/nonexistent/job-blas.out").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/job-blas.out"));
    }

    #[test]
    fn test_default_category_table() {
        let table = load_category_table(None).unwrap();
        assert!(table.lookup("BLAS").is_ok());
        assert!(table.lookup("Blocked; B=16").is_ok());
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runtime_basic.csv");
        fs::write(&path, "stale content that is longer\n").unwrap();
        write_output("Implementation\n", Some(&path)).unwrap();
        assert_eq!(read_file(&path).unwrap(), "Implementation\n");
    }
}
