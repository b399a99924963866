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

//! Multi-category driver.
//!
//! [`Summarizer`] owns the table for one invocation. Categories are scanned
//! in the order they are given; the normalization baseline (and, for
//! speedup, every category's single-thread runs) must come first.

use crate::category::Category;
use crate::error::{Result, SummaryError};
use crate::options::SummaryOptions;
use crate::scan::{ScanReport, Scanner};
use crate::table::MetricTable;
use std::io::BufRead;
use tracing::{info, warn};

/// Builds a [`MetricTable`] from a sequence of category logs.
///
/// # Examples
///
/// ```
/// use benchsum_core::{Category, Summarizer, SummaryOptions};
///
/// let log = "Hello world, I'm thread 0 out of 1 total threads.\n\
///            Working on problem size N=64\n\
///            Elapsed time is : 2.0\n";
///
/// let mut summarizer = Summarizer::new(SummaryOptions::default());
/// summarizer
///     .scan_reader(&Category::new("BLAS", "job-blas.out"), log.as_bytes())
///     .unwrap();
/// let summary = summarizer.finish().unwrap();
/// assert_eq!(summary.table.get("BLAS; P=1", 64), Some(2.0));
/// ```
#[derive(Debug, Clone)]
pub struct Summarizer {
    options: SummaryOptions,
    table: MetricTable,
    reports: Vec<ScanReport>,
}

/// A finished table and the per-category scan counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// The aggregated values.
    pub table: MetricTable,
    /// One report per scanned category, in scan order.
    pub reports: Vec<ScanReport>,
}

impl Summary {
    /// Reports of categories that contributed no sample.
    pub fn empty_categories(&self) -> impl Iterator<Item = &ScanReport> {
        self.reports.iter().filter(|r| r.is_empty())
    }
}

impl Summarizer {
    /// Create a summarizer with an empty table.
    pub fn new(options: SummaryOptions) -> Self {
        Self {
            options,
            table: MetricTable::new(),
            reports: Vec::new(),
        }
    }

    /// The run options.
    pub fn options(&self) -> &SummaryOptions {
        &self.options
    }

    /// The table built so far.
    pub fn table(&self) -> &MetricTable {
        &self.table
    }

    /// Scan an in-memory sequence of lines for `category`.
    pub fn scan_lines<I, S>(&mut self, category: &Category, lines: I) -> Result<ScanReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scanner = Scanner::new(category, &self.options, &mut self.table);
        for line in lines {
            scanner.process_line(line.as_ref())?;
        }
        let report = scanner.finish();
        Ok(self.record(report))
    }

    /// Scan a buffered reader for `category`, one line at a time.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Io`] naming the category's log file if a line
    /// cannot be read, plus any error from [`Scanner::process_line`].
    pub fn scan_reader<R: BufRead>(&mut self, category: &Category, reader: R) -> Result<ScanReport> {
        let mut scanner = Scanner::new(category, &self.options, &mut self.table);
        for line in reader.lines() {
            let line = line.map_err(|e| SummaryError::io_error(category.filename(), e))?;
            scanner.process_line(&line)?;
        }
        let report = scanner.finish();
        Ok(self.record(report))
    }

    fn record(&mut self, report: ScanReport) -> ScanReport {
        info!(
            category = %report.category,
            lines = report.lines,
            accepted = report.accepted,
            gated = report.gated,
            filtered = report.filtered,
            "scanned category"
        );
        if report.is_empty() {
            warn!(
                category = %report.category,
                transformation = %self.options.transformation,
                "no {} samples matched",
                self.options.transformation
            );
        }
        self.reports.push(report.clone());
        report
    }

    /// Finish the table, applying the final normalization pass if enabled.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::MissingBaselineRow`] when normalizing without
    /// any baseline sample.
    pub fn finish(mut self) -> Result<Summary> {
        if self.options.normalize {
            self.table.finish_normalization(&self.options.baseline)?;
        }
        Ok(Summary {
            table: self.table,
            reports: self.reports,
        })
    }
}
