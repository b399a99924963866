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

//! CSV output for benchsum metric tables.
//!
//! The rendered matrix has one header row of problem sizes and one row per
//! data key:
//!
//! ```text
//! Implementation,64,128,1024
//! BLAS; P=1,0.000125,0.0005,0.03125
//! BLAS; P=4,0.0000625,0.000125,0.0078125
//! ```
//!
//! # Features
//!
//! - **Deterministic**: rows sorted by key, columns numerically by size
//! - **Dense**: sparse tables are rejected with the first missing cell
//! - **Configurable**: delimiter, header label and quote style
//!
//! # Example
//!
//! ```
//! use benchsum_core::{Category, Summarizer, SummaryOptions};
//! use benchsum_csv::to_csv;
//!
//! let log = "Hello world, I'm thread 0 out of 1 total threads.\n\
//!            Working on problem size N=64\n\
//!            Elapsed time is : 0.25\n";
//!
//! let mut summarizer = Summarizer::new(SummaryOptions::default());
//! summarizer
//!     .scan_reader(&Category::new("BLAS", "job-blas.out"), log.as_bytes())
//!     .unwrap();
//! let summary = summarizer.finish().unwrap();
//!
//! assert_eq!(
//!     to_csv(&summary.table).unwrap(),
//!     "Implementation,64\nBLAS; P=1,0.25\n"
//! );
//! ```

mod error;
mod to_csv;

pub use error::{CsvError, Result};
pub use to_csv::{
    to_csv, to_csv_with_config, to_csv_writer, to_csv_writer_with_config, value_to_csv_string,
    ToCsvConfig, DEFAULT_HEADER_LABEL,
};
