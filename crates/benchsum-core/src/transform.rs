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

//! Metric transformations.
//!
//! A [`Transformation`] names both the kind of log line a scan extracts
//! (its [`MetricSource`]) and how the raw value is turned into the number
//! stored in the table. Most transformations are pure functions of the
//! problem size `N` and the raw measurement; `speedup` additionally needs the
//! single-thread baseline from the table and is handled by the scanner.

use crate::error::SummaryError;
use std::fmt;
use std::str::FromStr;

/// Hardware ceilings used by the percent-of-peak transformations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareProfile {
    /// Peak memory bandwidth in bytes per second (default: 204.8 GB/s).
    pub peak_bandwidth: f64,
    /// Peak floating-point rate in FLOP/s (default: 39.2 GFLOP/s).
    pub peak_flops: f64,
}

impl Default for HardwareProfile {
    fn default() -> Self {
        Self {
            peak_bandwidth: 2.048e11,
            peak_flops: 3.92e10,
        }
    }
}

/// Which log line carries the raw measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricSource {
    /// `Elapsed time is : <seconds>`
    ElapsedTime,
    /// LIKWID `RETIRED_INSTRUCTIONS` counter row.
    RetiredInstructions,
    /// LIKWID `L2 accesses` metric row.
    L2Accesses,
    /// LIKWID `L3_ACCESS_ALL_TYPES` counter row.
    L3Accesses,
}

/// How a transformation derives its stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Pure function of `(N, raw)`.
    Formula,
    /// Raw hardware counter, stored unmodified.
    Counter,
    /// Ratio against the same category's single-thread sample.
    Speedup,
}

/// A named transformation from raw log measurement to stored metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transformation {
    /// Elapsed seconds, unmodified.
    Runtime,
    /// Millions of floating-point operations per second for a `2N²` workload.
    Mflops,
    /// Effective memory bandwidth in GB/s.
    Bandwidth,
    /// Bandwidth as a percentage of [`HardwareProfile::peak_bandwidth`].
    PctBandwidth,
    /// Average time per element moved.
    AvgLatency,
    /// Floating-point rate as a percentage of [`HardwareProfile::peak_flops`].
    PctFlops,
    /// Single-thread runtime divided by the concurrent runtime.
    Speedup,
    /// Retired instruction counter.
    RetiredInstructions,
    /// L2 cache access counter.
    L2Cache,
    /// L3 cache access counter.
    L3Cache,
}

impl Transformation {
    /// All transformations, in the order they are listed to users.
    pub const ALL: [Transformation; 10] = [
        Transformation::Runtime,
        Transformation::Mflops,
        Transformation::Bandwidth,
        Transformation::PctBandwidth,
        Transformation::AvgLatency,
        Transformation::PctFlops,
        Transformation::Speedup,
        Transformation::RetiredInstructions,
        Transformation::L2Cache,
        Transformation::L3Cache,
    ];

    /// The identifier accepted on the command line and used in output names.
    pub fn name(self) -> &'static str {
        match self {
            Transformation::Runtime => "runtime",
            Transformation::Mflops => "mflops",
            Transformation::Bandwidth => "bandwidth",
            Transformation::PctBandwidth => "pct_bandwidth",
            Transformation::AvgLatency => "avg_latency",
            Transformation::PctFlops => "pct_flops",
            Transformation::Speedup => "speedup",
            Transformation::RetiredInstructions => "RETIRED_INSTRUCTIONS",
            Transformation::L2Cache => "L2CACHE",
            Transformation::L3Cache => "L3CACHE",
        }
    }

    /// The log line shape this transformation reads its raw value from.
    pub fn metric_source(self) -> MetricSource {
        match self {
            Transformation::RetiredInstructions => MetricSource::RetiredInstructions,
            Transformation::L2Cache => MetricSource::L2Accesses,
            Transformation::L3Cache => MetricSource::L3Accesses,
            _ => MetricSource::ElapsedTime,
        }
    }

    /// How the stored value is derived.
    pub fn kind(self) -> TransformKind {
        match self {
            Transformation::Speedup => TransformKind::Speedup,
            Transformation::RetiredInstructions
            | Transformation::L2Cache
            | Transformation::L3Cache => TransformKind::Counter,
            _ => TransformKind::Formula,
        }
    }

    /// Evaluate the transformation for problem size `n` and raw value `raw`.
    ///
    /// Counters pass through unchanged. `Speedup` also passes through here;
    /// the ratio against the baseline is applied by [`speedup`] once the
    /// caller has looked the baseline up.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchsum_core::{HardwareProfile, Transformation};
    ///
    /// let hw = HardwareProfile::default();
    /// let mflops = Transformation::Mflops.evaluate(64, 2.0, &hw);
    /// assert!((mflops - 0.004096).abs() < 1e-12);
    /// ```
    pub fn evaluate(self, n: u64, raw: f64, hw: &HardwareProfile) -> f64 {
        let n = n as f64;
        match self {
            Transformation::Runtime | Transformation::Speedup => raw,
            Transformation::Mflops => 2.0 * n * n / (raw * 1_000_000.0),
            Transformation::Bandwidth => bytes_per_second(n, raw) / 1e9,
            Transformation::PctBandwidth => 100.0 * (bytes_per_second(n, raw) / hw.peak_bandwidth),
            Transformation::AvgLatency => raw / elements_moved(n),
            Transformation::PctFlops => 100.0 * (2.0 * n * n / raw) / hw.peak_flops,
            Transformation::RetiredInstructions
            | Transformation::L2Cache
            | Transformation::L3Cache => raw,
        }
    }

    /// Comma-separated list of every accepted identifier.
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Speedup of a concurrent run relative to its single-thread baseline.
#[inline]
pub fn speedup(baseline: f64, raw: f64) -> f64 {
    baseline / raw
}

// Element traffic model for y = A·x: the matrix plus two passes over the
// vectors, N * (2 + 2N) doubles.
#[inline]
fn elements_moved(n: f64) -> f64 {
    n * (2.0 + 2.0 * n)
}

#[inline]
fn bytes_per_second(n: f64, raw: f64) -> f64 {
    8.0 * elements_moved(n) / raw
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transformation {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| SummaryError::UnsupportedTransformation {
                name: s.to_string(),
                supported: Self::supported_names(),
            })
    }
}
