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


//! benchsum CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **summarize**: scan category logs and write the metric table as CSV
//! - **inspect**: show how each line of a log is classified
//! - **categories**: list the category table
//! - **completion**: generate shell completion scripts
//!
//! # Example
//!
//! ```no_run
//! use benchsum_cli::commands::{summarize, SummarizeConfig};
//! use benchsum_core::Transformation;
//!
//! # fn main() -> Result<(), benchsum_cli::error::CliError> {
//! let config = SummarizeConfig {
//!     categories: "BLAS,Basic".to_string(),
//!     transformation: Transformation::Speedup,
//!     ..SummarizeConfig::default()
//! };
//! // Writes no-metrics/speedup_basic.csv
//! summarize(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Limits
//!
//! Log files larger than `BENCHSUM_MAX_FILE_SIZE` bytes (default 1 GiB) are
//! rejected before they are read.

pub mod cli;
pub mod commands;
pub mod error;
