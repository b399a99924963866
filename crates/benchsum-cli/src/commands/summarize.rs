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


//! Summarize command - category logs to a CSV metric table

use super::{load_category_table, read_file, write_output};
use crate::error::CliError;
use benchsum_core::{
    HardwareProfile, Summarizer, SummaryOptions, Transformation, DEFAULT_BASELINE,
};
use benchsum_csv::to_csv;
use std::path::{Path, PathBuf};
use tracing::info;

/// Inputs of one `summarize` run.
#[derive(Debug, Clone)]
pub struct SummarizeConfig {
    /// Comma-separated category labels, scanned in this order.
    pub categories: String,
    /// Directory holding the category logs, and the default output.
    pub directory: PathBuf,
    /// Metric to compute.
    pub transformation: Transformation,
    /// Tag in the output filename.
    pub suffix: String,
    /// Divide every value by the baseline category's value.
    pub normalize: bool,
    /// Baseline category for normalization.
    pub baseline: String,
    /// YAML category table replacing the built-in one.
    pub category_table: Option<PathBuf>,
    /// Override of the peak bandwidth in bytes per second.
    pub peak_bandwidth: Option<f64>,
    /// Override of the peak floating-point rate in FLOP/s.
    pub peak_flops: Option<f64>,
    /// Output path override; `-` writes to stdout.
    pub output: Option<PathBuf>,
    /// Fail when a category contributes no sample.
    pub strict: bool,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            categories: "BLAS,Basic".to_string(),
            directory: PathBuf::from("no-metrics"),
            transformation: Transformation::Runtime,
            suffix: "basic".to_string(),
            normalize: false,
            baseline: DEFAULT_BASELINE.to_string(),
            category_table: None,
            peak_bandwidth: None,
            peak_flops: None,
            output: None,
            strict: false,
        }
    }
}

impl SummarizeConfig {
    /// Options handed to the summarizer.
    pub fn summary_options(&self) -> SummaryOptions {
        let defaults = HardwareProfile::default();
        SummaryOptions {
            transformation: self.transformation,
            normalize: self.normalize,
            baseline: self.baseline.clone(),
            hardware: HardwareProfile {
                peak_bandwidth: self.peak_bandwidth.unwrap_or(defaults.peak_bandwidth),
                peak_flops: self.peak_flops.unwrap_or(defaults.peak_flops),
            },
        }
    }

    /// Where the table is written; `None` means stdout.
    ///
    /// ```
    /// use benchsum_cli::commands::SummarizeConfig;
    /// use std::path::Path;
    ///
    /// let config = SummarizeConfig::default();
    /// assert_eq!(
    ///     config.output_path().as_deref(),
    ///     Some(Path::new("no-metrics/runtime_basic.csv"))
    /// );
    /// ```
    pub fn output_path(&self) -> Option<PathBuf> {
        match self.output.as_deref() {
            Some(p) if p == Path::new("-") => None,
            Some(p) => Some(p.to_path_buf()),
            None => Some(
                self.directory
                    .join(format!("{}_{}.csv", self.transformation, self.suffix)),
            ),
        }
    }
}

/// Scan every requested category log and write the CSV table.
///
/// Logs are read from `<directory>/<filename>` using the category table.
/// Empty categories are logged as warnings, or rejected with `strict`.
///
/// # Errors
///
/// Returns `Err` if:
/// - A category is unknown or the category list is empty
/// - A log file is missing or too large
/// - A speedup or normalization baseline is missing
/// - The resulting table is sparse
pub fn summarize(config: &SummarizeConfig) -> Result<(), CliError> {
    let table = load_category_table(config.category_table.as_deref())?;
    let categories = table.resolve_list(&config.categories)?;
    if categories.is_empty() {
        return Err(CliError::invalid_input("no categories requested"));
    }

    let mut summarizer = Summarizer::new(config.summary_options());
    for category in &categories {
        let path = config.directory.join(category.filename());
        let log = read_file(&path)?;
        let report = summarizer.scan_lines(category, log.lines())?;
        if config.strict && report.is_empty() {
            return Err(CliError::NoSamples {
                category: report.category,
                path,
            });
        }
    }

    let summary = summarizer.finish()?;
    let csv = to_csv(&summary.table)?;

    let output = config.output_path();
    write_output(&csv, output.as_deref())?;
    info!(
        rows = summary.table.len(),
        columns = summary.table.column_count(),
        output = %output.as_deref().unwrap_or(Path::new("-")).display(),
        "wrote table"
    );
    Ok(())
}
