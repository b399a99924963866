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

//! Line classification for benchmark job logs.
//!
//! Each line is matched against the announcements the benchmark driver prints
//! (thread count, problem size, block size) and then against the single metric
//! line shape selected by the active [`MetricSource`]. Matching is a substring
//! search, so prefixes such as MPI rank tags or timestamps are tolerated.
//!
//! # Recognized lines
//!
//! ```text
//! Hello world, I'm thread 3 out of 4 total threads.
//! Working on problem size N=64
//!  Working on Block size = 16
//! Elapsed time is : 0.000123
//! | RETIRED_INSTRUCTIONS | PMC0 |   123456 |
//! | L2 accesses          |   98765 |
//! | L3_ACCESS_ALL_TYPES  | PMC1 |   4321 |
//! ```

use crate::transform::MetricSource;
use regex::Regex;
use std::sync::OnceLock;

/// What a single log line announced.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    /// Total thread count of the run that follows.
    Concurrency(u32),
    /// Problem size `N` of the run that follows.
    ProblemSize(u64),
    /// Block size of the run that follows, kept as printed.
    BlockSize(String),
    /// Raw measurement for the active metric source.
    Metric(f64),
    /// Nothing recognized.
    Ignored,
}

struct Patterns {
    concurrency: Regex,
    problem_size: Regex,
    block_size: Regex,
    elapsed_time: Regex,
    retired_instructions: Regex,
    l2_accesses: Regex,
    l3_accesses: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    // Patterns are string literals covered by tests.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        concurrency: compile(r"Hello world, I'm thread .+ out of ([0-9]+) total threads\."),
        problem_size: compile(r"Working on problem size N=([0-9]+)"),
        block_size: compile(r" Working on Block size = ([0-9]+)"),
        elapsed_time: compile(r"Elapsed time is : ([0-9]+\.[0-9]+)"),
        retired_instructions: compile(r"RETIRED_INSTRUCTIONS.+\|.+\|\s+([0-9]+)"),
        l2_accesses: compile(r"L2 accesses.+\|\s+([0-9]+)"),
        l3_accesses: compile(r"L3_ACCESS_ALL_TYPES.+\|.+\|\s+([0-9]+)"),
    })
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Classifies log lines for one metric source.
///
/// # Examples
///
/// ```
/// use benchsum_core::{LineClass, LineClassifier, MetricSource};
///
/// let classifier = LineClassifier::new(MetricSource::ElapsedTime);
/// assert_eq!(
///     classifier.classify("Working on problem size N=64"),
///     LineClass::ProblemSize(64)
/// );
/// assert_eq!(
///     classifier.classify("Elapsed time is : 0.25"),
///     LineClass::Metric(0.25)
/// );
/// assert_eq!(classifier.classify("unrelated output"), LineClass::Ignored);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier {
    source: MetricSource,
}

impl LineClassifier {
    /// Create a classifier that extracts metrics from `source` lines.
    pub fn new(source: MetricSource) -> Self {
        Self { source }
    }

    /// The metric source this classifier looks for.
    pub fn source(&self) -> MetricSource {
        self.source
    }

    /// Classify one line. The first matching pattern wins.
    pub fn classify(&self, line: &str) -> LineClass {
        let p = patterns();

        if let Some(n) = capture(&p.concurrency, line).and_then(|s| s.parse().ok()) {
            return LineClass::Concurrency(n);
        }
        if let Some(n) = capture(&p.problem_size, line).and_then(|s| s.parse().ok()) {
            return LineClass::ProblemSize(n);
        }
        if let Some(b) = capture(&p.block_size, line) {
            return LineClass::BlockSize(b.to_string());
        }

        let metric = match self.source {
            MetricSource::ElapsedTime => &p.elapsed_time,
            MetricSource::RetiredInstructions => &p.retired_instructions,
            MetricSource::L2Accesses => &p.l2_accesses,
            MetricSource::L3Accesses => &p.l3_accesses,
        };
        match capture(metric, line).and_then(|s| s.parse().ok()) {
            Some(value) => LineClass::Metric(value),
            None => LineClass::Ignored,
        }
    }
}
