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

//! Builder for benchmark job log text.

/// Builder for the free-text logs the benchmark driver prints.
///
/// # Examples
///
/// ```
/// use benchsum_test::LogBuilder;
///
/// let log = LogBuilder::new()
///     .run(2, 64, 0.5)
///     .build();
///
/// assert_eq!(
///     log,
///     "Hello world, I'm thread 0 out of 2 total threads.\n\
///      Hello world, I'm thread 1 out of 2 total threads.\n\
///      Working on problem size N=64\n\
///      Elapsed time is : 0.5\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogBuilder {
    lines: Vec<String>,
}

impl LogBuilder {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Appends an arbitrary line.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Appends one greeting per thread, as an OpenMP parallel region prints.
    pub fn threads(mut self, total: u32) -> Self {
        for id in 0..total {
            self.lines.push(format!(
                "Hello world, I'm thread {} out of {} total threads.",
                id, total
            ));
        }
        self
    }

    /// Appends a problem-size announcement.
    pub fn problem_size(self, n: u64) -> Self {
        self.line(format!("Working on problem size N={}", n))
    }

    /// Appends a block-size announcement.
    pub fn block_size(self, b: u32) -> Self {
        self.line(format!(" Working on Block size = {}", b))
    }

    /// Appends an elapsed-time measurement. The value is printed in full
    /// and always carries a fractional part.
    pub fn elapsed(self, seconds: f64) -> Self {
        let mut text = seconds.to_string();
        if !text.contains('.') {
            text.push_str(".0");
        }
        self.line(format!("Elapsed time is : {}", text))
    }

    /// Appends a LIKWID-style counter table with one row per counter.
    pub fn counters(self, retired_instructions: u64, l2_accesses: u64, l3_accesses: u64) -> Self {
        self.line("+-----------------------+---------+--------------+")
            .line("|         Event         | Counter |  HWThread 0  |")
            .line("+-----------------------+---------+--------------+")
            .line(format!(
                "|  RETIRED_INSTRUCTIONS  |   PMC0  | {:>12} |",
                retired_instructions
            ))
            .line(format!(
                "|  L3_ACCESS_ALL_TYPES   |   PMC1  | {:>12} |",
                l3_accesses
            ))
            .line("+-----------------------+---------+--------------+")
            .line(format!("|  L2 accesses           | {:>12} |", l2_accesses))
    }

    /// Thread greetings, problem size and elapsed time of one run.
    pub fn run(self, threads: u32, n: u64, seconds: f64) -> Self {
        self.threads(threads).problem_size(n).elapsed(seconds)
    }

    /// Produces the log text, one line per entry, each newline-terminated.
    pub fn build(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log() {
        assert_eq!(LogBuilder::new().build(), "");
    }

    #[test]
    fn test_block_size_line_has_leading_space() {
        let log = LogBuilder::new().block_size(4).build();
        assert_eq!(log, " Working on Block size = 4\n");
    }

    #[test]
    fn test_elapsed_always_has_fraction() {
        let log = LogBuilder::new().elapsed(3.0).build();
        assert_eq!(log, "Elapsed time is : 3.0\n");
    }

    #[test]
    fn test_counters_rows() {
        let log = LogBuilder::new().counters(10, 20, 30).build();
        assert!(log.contains("RETIRED_INSTRUCTIONS"));
        assert!(log.contains("L2 accesses"));
        assert!(log.contains("L3_ACCESS_ALL_TYPES"));
        assert_eq!(log.lines().count(), 7);
    }
}
