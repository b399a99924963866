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

//! Shared test fixtures for benchsum crates.
//!
//! # Quick Start
//!
//! ```rust
//! use benchsum_test::{fixtures, LogBuilder};
//!
//! // Complete job logs for the default category table
//! for (filename, contents) in fixtures::job_logs() {
//!     assert!(filename.starts_with("job-"));
//!     assert!(contents.contains("Elapsed time is"));
//! }
//!
//! // Hand-built logs
//! let log = LogBuilder::new()
//!     .block_size(4)
//!     .run(1, 64, 2.0)
//!     .build();
//! assert!(log.contains("N=64"));
//! ```

pub mod fixtures;

pub use fixtures::builders::LogBuilder;
