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

//! Complete job logs for the default category table.
//!
//! Every log covers thread counts [`THREADS`] and problem sizes
//! [`PROBLEM_SIZES`]. Elapsed times are printed in full, so the values in
//! the timing tables are exactly what a scan reads back.

use super::builders::LogBuilder;

/// Thread counts every job log reports.
pub const THREADS: [u32; 2] = [1, 4];

/// Problem sizes every job log reports, in the order they are run.
pub const PROBLEM_SIZES: [u64; 3] = [64, 128, 1024];

fn preamble(description: &str) -> LogBuilder {
    LogBuilder::new()
        .line(format!("Description:\t{}", description))
        .line("")
        .line("srun: job 48213 queued and waiting for resources")
}

fn runs(mut log: LogBuilder, timings: &[[f64; 3]; 2]) -> LogBuilder {
    for (threads, row) in THREADS.iter().zip(timings) {
        log = log.threads(*threads);
        for (n, seconds) in PROBLEM_SIZES.iter().zip(row) {
            log = log.problem_size(*n).elapsed(*seconds);
        }
    }
    log
}

/// Single and four-thread runtimes for the vendor BLAS baseline.
pub const BLAS_TIMINGS: [[f64; 3]; 2] = [
    [0.000125, 0.0005, 0.03125],
    [0.0000625, 0.000125, 0.0078125],
];

/// Single and four-thread runtimes for the basic OpenMP version.
pub const BASIC_TIMINGS: [[f64; 3]; 2] = [
    [0.00025, 0.002, 0.0625],
    [0.0000625, 0.0005, 0.015625],
];

/// Runtimes for the blocked OpenMP version with B=4.
pub const BLOCKED_4_TIMINGS: [[f64; 3]; 2] = [
    [0.0005, 0.001, 0.125],
    [0.000125, 0.00025, 0.03125],
];

/// Runtimes for the blocked OpenMP version with B=16.
pub const BLOCKED_16_TIMINGS: [[f64; 3]; 2] = [
    [0.00025, 0.001, 0.0625],
    [0.000125, 0.000125, 0.015625],
];

/// `job-blas.out`
pub fn blas_log() -> String {
    runs(preamble("Reference implementation, -lopenblas"), &BLAS_TIMINGS).build()
}

/// `job-basic-omp.out`
pub fn basic_log() -> String {
    runs(preamble("Basic implementation, OpenMP-parallel"), &BASIC_TIMINGS).build()
}

/// `job-blocked-omp.out`: block size 4, then block size 16, in one file.
pub fn blocked_log() -> String {
    let log = preamble("Blocked implementation, OpenMP-parallel");
    let log = runs(log.block_size(4), &BLOCKED_4_TIMINGS);
    runs(log.block_size(16), &BLOCKED_16_TIMINGS).build()
}

/// `(filename, contents)` for every log the default category table names.
pub fn job_logs() -> Vec<(&'static str, String)> {
    vec![
        ("job-blas.out", blas_log()),
        ("job-basic-omp.out", basic_log()),
        ("job-blocked-omp.out", blocked_log()),
    ]
}
