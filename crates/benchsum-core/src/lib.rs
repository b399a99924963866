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

//! Core scanner and aggregation table for benchmark job logs.
//!
//! Benchmark jobs print their configuration and measurements as free text:
//!
//! ```text
//! Hello world, I'm thread 0 out of 4 total threads.
//! Working on problem size N=64
//! Elapsed time is : 0.001234
//! ```
//!
//! This crate turns such logs into a dense table indexed by data key
//! (`"<category>; P=<threads>"`) and problem size.
//!
//! # Pipeline
//!
//! - [`LineClassifier`]: recognizes announcement and metric lines
//! - [`ScanState`] / [`Scanner`]: carries thread count, problem size and
//!   block size across lines and gates samples by block size
//! - [`Transformation`]: derives throughput, bandwidth, latency, speedup
//!   or raw counters from each sample
//! - [`MetricTable`]: the aggregate, with optional normalization against a
//!   baseline category
//! - [`Summarizer`]: drives the above across categories
//!
//! Rendering the table as CSV lives in `benchsum-csv`.
//!
//! # Example
//!
//! ```
//! use benchsum_core::{CategoryTable, Summarizer, SummaryOptions, Transformation};
//!
//! let categories = CategoryTable::default();
//! let basic = categories.lookup("Basic").unwrap();
//!
//! let log = "\
//! Hello world, I'm thread 0 out of 1 total threads.
//! Working on problem size N=16
//! Elapsed time is : 10.0
//! Hello world, I'm thread 0 out of 4 total threads.
//! Working on problem size N=16
//! Elapsed time is : 4.0
//! ";
//!
//! let options = SummaryOptions::for_transformation(Transformation::Speedup);
//! let mut summarizer = Summarizer::new(options);
//! summarizer.scan_reader(&basic, log.as_bytes()).unwrap();
//!
//! let summary = summarizer.finish().unwrap();
//! assert_eq!(summary.table.get("Basic; P=4", 16), Some(2.5));
//! ```

mod category;
mod classify;
mod error;
mod options;
mod scan;
mod summary;
mod table;
mod transform;

pub use category::{Category, CategoryTable};
pub use classify::{LineClass, LineClassifier};
pub use error::{Result, SummaryError};
pub use options::{SummaryOptions, DEFAULT_BASELINE};
pub use scan::{LineOutcome, ScanReport, ScanState, Scanner};
pub use summary::{Summarizer, Summary};
pub use table::{data_key, speedup_baseline_key, MetricTable};
pub use transform::{speedup, HardwareProfile, MetricSource, TransformKind, Transformation};
