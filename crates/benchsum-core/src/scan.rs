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

//! Sequential log scanning.
//!
//! A log is scanned top to bottom once. Announcement lines update a
//! [`ScanState`] that carries forward until overwritten; each metric line is
//! then gated on block size, keyed, transformed and written into the
//! [`MetricTable`].
//!
//! Block-size state is never reset between runs. A log that interleaves block
//! sizes without re-announcing them before each measurement attributes samples
//! to the last announced size; [`ScanReport::gated`] counts what was dropped.

use crate::category::Category;
use crate::classify::{LineClass, LineClassifier};
use crate::error::{Result, SummaryError};
use crate::options::SummaryOptions;
use crate::table::{data_key, speedup_baseline_key, MetricTable};
use crate::transform::{speedup, TransformKind};
use tracing::{debug, warn};

/// Per-file context accumulated from announcement lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Thread count of the current run.
    pub concurrency: Option<u32>,
    /// Block size of the current run, as printed.
    pub block_size: Option<String>,
    /// Block size the category accepts samples for.
    pub desired_block_size: Option<String>,
    /// Problem size of the current run.
    pub problem_size: Option<u64>,
}

impl ScanState {
    /// Fresh state for scanning `category`'s log.
    pub fn for_category(category: &Category) -> Self {
        Self {
            desired_block_size: category.desired_block_size().map(str::to_string),
            ..Self::default()
        }
    }

    /// Apply an announcement. Returns `false` for metric and ignored lines,
    /// which leave the state untouched.
    pub fn observe(&mut self, class: LineClass) -> bool {
        match class {
            LineClass::Concurrency(p) => self.concurrency = Some(p),
            LineClass::ProblemSize(n) => self.problem_size = Some(n),
            LineClass::BlockSize(b) => self.block_size = Some(b),
            LineClass::Metric(_) | LineClass::Ignored => return false,
        }
        true
    }

    /// Whether a metric observed now belongs to the category.
    ///
    /// Categories without a desired block size accept every sample.
    pub fn accepts_block(&self) -> bool {
        match &self.desired_block_size {
            None => true,
            Some(desired) => self.block_size.as_deref() == Some(desired.as_str()),
        }
    }
}

/// What happened to one line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Not a recognized line.
    Ignored,
    /// An announcement updated the scan state.
    StateUpdated,
    /// A metric was stored.
    Accepted {
        /// Row the value went to.
        key: String,
        /// Column the value went to.
        problem_size: u64,
        /// Stored value after transformation and normalization.
        value: f64,
    },
    /// A metric was observed under a different block size.
    Gated,
    /// A multi-thread metric was dropped by normalization.
    Filtered,
    /// A metric arrived before any problem size was announced.
    Unkeyed,
}

/// Counters for one scanned log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Category label.
    pub category: String,
    /// Lines read.
    pub lines: usize,
    /// Metric samples stored.
    pub accepted: usize,
    /// Metric samples dropped by block-size gating.
    pub gated: usize,
    /// Metric samples dropped because normalization keeps one thread only.
    pub filtered: usize,
    /// Metric samples dropped for lack of a problem size.
    pub unkeyed: usize,
}

impl ScanReport {
    /// Whether the log contributed nothing to the table.
    pub fn is_empty(&self) -> bool {
        self.accepted == 0
    }
}

/// Scans one category's log into a borrowed table.
pub struct Scanner<'a> {
    category: &'a Category,
    options: &'a SummaryOptions,
    classifier: LineClassifier,
    state: ScanState,
    table: &'a mut MetricTable,
    report: ScanReport,
}

impl<'a> Scanner<'a> {
    /// Create a scanner for `category` that writes into `table`.
    pub fn new(
        category: &'a Category,
        options: &'a SummaryOptions,
        table: &'a mut MetricTable,
    ) -> Self {
        Self {
            category,
            options,
            classifier: LineClassifier::new(options.transformation.metric_source()),
            state: ScanState::for_category(category),
            table,
            report: ScanReport {
                category: category.label().to_string(),
                ..ScanReport::default()
            },
        }
    }

    /// Current scan state.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Process one line.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::MissingBaseline`] when a speedup or
    /// normalization reference has not been recorded yet.
    pub fn process_line(&mut self, line: &str) -> Result<LineOutcome> {
        self.report.lines += 1;

        let raw = match self.classifier.classify(line) {
            LineClass::Metric(raw) => raw,
            LineClass::Ignored => return Ok(LineOutcome::Ignored),
            announcement => {
                self.state.observe(announcement);
                return Ok(LineOutcome::StateUpdated);
            }
        };

        let category = self.category;
        if !self.state.accepts_block() {
            self.report.gated += 1;
            debug!(
                category = category.label(),
                block_size = ?self.state.block_size,
                "sample outside desired block size"
            );
            return Ok(LineOutcome::Gated);
        }

        let label = category.label();
        let concurrency = self.state.concurrency;
        let key = if self.options.normalize {
            if matches!(concurrency, Some(p) if p != 1) {
                self.report.filtered += 1;
                return Ok(LineOutcome::Filtered);
            }
            label.to_string()
        } else {
            data_key(label, concurrency)
        };

        let Some(problem_size) = self.state.problem_size else {
            self.report.unkeyed += 1;
            warn!(
                category = label,
                line = self.report.lines,
                "metric before any problem size announcement, skipping"
            );
            return Ok(LineOutcome::Unkeyed);
        };

        let transformation = self.options.transformation;
        let value = match (transformation.kind(), concurrency) {
            (TransformKind::Speedup, Some(p)) if p > 1 => {
                let baseline_key = speedup_baseline_key(label);
                let baseline = self
                    .table
                    .get(&baseline_key, problem_size)
                    .ok_or_else(|| SummaryError::missing_baseline(baseline_key, problem_size))?;
                speedup(baseline, raw)
            }
            _ => transformation.evaluate(problem_size, raw, &self.options.hardware),
        };

        self.table.insert(&key, problem_size, value);
        if self.options.normalize && key != self.options.baseline {
            self.table
                .divide_by(&key, problem_size, &self.options.baseline)?;
        }

        let value = self.table.get(&key, problem_size).unwrap_or(value);
        self.report.accepted += 1;
        debug!(key = %key, problem_size, value, "inserted sample");

        Ok(LineOutcome::Accepted {
            key,
            problem_size,
            value,
        })
    }

    /// Consume the scanner and return its counters.
    pub fn finish(self) -> ScanReport {
        self.report
    }
}
