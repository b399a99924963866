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

//! Render metric tables as CSV.

use crate::error::{CsvError, Result};
use benchsum_core::MetricTable;
use std::io::Write;

/// Label of the first header cell.
pub const DEFAULT_HEADER_LABEL: &str = "Implementation";

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// First header cell, above the data keys (default: "Implementation")
    pub header_label: String,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header_label: DEFAULT_HEADER_LABEL.to_string(),
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

/// Render a metric table to a CSV string.
///
/// One header row of problem sizes (ascending), then one row per data key
/// (lexicographic).
///
/// # Example
/// ```
/// use benchsum_core::MetricTable;
/// use benchsum_csv::to_csv;
///
/// let mut table = MetricTable::new();
/// table.insert("BLAS; P=1", 128, 0.5);
/// table.insert("BLAS; P=1", 64, 0.25);
///
/// let csv = to_csv(&table).unwrap();
/// assert_eq!(csv, "Implementation,64,128\nBLAS; P=1,0.25,0.5\n");
/// ```
///
/// # Errors
///
/// Returns [`CsvError::SparseRow`] if any row lacks a problem size that
/// another row reported.
pub fn to_csv(table: &MetricTable) -> Result<String> {
    to_csv_with_config(table, ToCsvConfig::default())
}

/// Render a metric table to a CSV string with custom configuration.
pub fn to_csv_with_config(table: &MetricTable, config: ToCsvConfig) -> Result<String> {
    // Roughly 12 bytes per cell plus the key column.
    let estimated_size = (table.len() + 1) * (table.column_count() * 12 + 24);
    let mut buffer = Vec::with_capacity(estimated_size.max(256));

    to_csv_writer_with_config(table, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Write a metric table as CSV using a writer.
///
/// # Example
/// ```no_run
/// use benchsum_core::MetricTable;
/// use benchsum_csv::to_csv_writer;
/// use std::fs::File;
///
/// let table = MetricTable::new();
/// let file = File::create("runtime_basic.csv").unwrap();
/// to_csv_writer(&table, file).unwrap();
/// ```
pub fn to_csv_writer<W: Write>(table: &MetricTable, writer: W) -> Result<()> {
    to_csv_writer_with_config(table, writer, ToCsvConfig::default())
}

/// Write a metric table as CSV with custom configuration.
///
/// The table is checked for completeness before anything is written, so a
/// sparse table leaves the writer untouched.
pub fn to_csv_writer_with_config<W: Write>(
    table: &MetricTable,
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    if let Some(&(key, problem_size)) = table.missing_cells().first() {
        return Err(CsvError::SparseRow {
            key: key.to_string(),
            problem_size,
        });
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    let sizes: Vec<u64> = table.problem_sizes().collect();

    let mut header = Vec::with_capacity(sizes.len() + 1);
    header.push(config.header_label.clone());
    header.extend(sizes.iter().map(u64::to_string));
    wtr.write_record(&header)?;

    for (key, row) in table.rows() {
        let mut record = Vec::with_capacity(sizes.len() + 1);
        record.push(key.to_string());
        // Completeness was checked above; every lookup succeeds.
        record.extend(
            sizes
                .iter()
                .filter_map(|n| row.get(n))
                .map(|&v| value_to_csv_string(v)),
        );
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render one metric value.
///
/// Finite values use the shortest representation that reads back to the same
/// `f64`, so `1.0` renders as `1`.
pub fn value_to_csv_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> MetricTable {
        let mut table = MetricTable::new();
        for (key, values) in [
            ("Basic; P=4", [0.5, 2.0]),
            ("BLAS; P=1", [0.25, 1.0]),
            ("Basic; P=1", [1.5, 6.0]),
        ] {
            // Insert the larger size first to check column sorting.
            table.insert(key, 1024, values[1]);
            table.insert(key, 64, values[0]);
        }
        table
    }

    #[test]
    fn test_header_and_rows_sorted() {
        let csv = to_csv(&sample_table()).unwrap();
        let expected = "Implementation,64,1024\n\
                        BLAS; P=1,0.25,1\n\
                        Basic; P=1,1.5,6\n\
                        Basic; P=4,0.5,2\n";
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_sparse_row_rejected() {
        let mut table = sample_table();
        table.insert("Blocked; B=4; P=1", 64, 0.75);
        let err = to_csv(&table).unwrap_err();
        match err {
            CsvError::SparseRow { key, problem_size } => {
                assert_eq!(key, "Blocked; B=4; P=1");
                assert_eq!(problem_size, 1024);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_sparse_table_writes_nothing() {
        let mut table = MetricTable::new();
        table.insert("A", 1, 1.0);
        table.insert("B", 2, 1.0);
        let mut buffer = Vec::new();
        assert!(to_csv_writer(&table, &mut buffer).is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let csv = to_csv(&MetricTable::new()).unwrap();
        assert_eq!(csv, "Implementation\n");
    }

    #[test]
    fn test_custom_delimiter_and_label() {
        let config = ToCsvConfig {
            delimiter: b';',
            header_label: "Variant".to_string(),
            ..Default::default()
        };
        let mut table = MetricTable::new();
        table.insert("BLAS", 16, 1.0);
        let csv = to_csv_with_config(&table, config).unwrap();
        assert_eq!(csv, "Variant;16\nBLAS;1\n");
    }

    #[test]
    fn test_key_with_delimiter_is_quoted() {
        let mut table = MetricTable::new();
        table.insert("MKL, sequential", 16, 1.0);
        let csv = to_csv(&table).unwrap();
        assert_eq!(csv, "Implementation,16\n\"MKL, sequential\",1\n");
    }

    #[test]
    fn test_key_with_semicolon_unquoted_by_default() {
        let mut table = MetricTable::new();
        table.insert("Blocked; B=16; P=4", 16, 0.5);
        let csv = to_csv(&table).unwrap();
        assert!(csv.contains("\nBlocked; B=16; P=4,0.5\n"));
    }

    #[test]
    fn test_value_formatting() {
        assert_eq!(value_to_csv_string(1.0), "1");
        assert_eq!(value_to_csv_string(0.004096), "0.004096");
        assert_eq!(value_to_csv_string(f64::NAN), "NaN");
        assert_eq!(value_to_csv_string(f64::INFINITY), "Infinity");
        assert_eq!(value_to_csv_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_to_csv_writer() {
        let mut buffer = Vec::new();
        to_csv_writer(&sample_table(), &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.starts_with("Implementation,64,1024\n"));
        assert!(csv.ends_with('\n'));
    }
}
