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


//! Inspect command - per-line classification of a log

use super::read_file;
use crate::error::CliError;
use benchsum_core::{LineClass, LineClassifier, Transformation};
use colored::Colorize;

/// Line counts gathered by [`inspect`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectCounts {
    /// Lines in the file.
    pub lines: usize,
    /// Thread-count announcements.
    pub concurrency: usize,
    /// Problem-size announcements.
    pub problem_size: usize,
    /// Block-size announcements.
    pub block_size: usize,
    /// Metric lines for the selected transformation.
    pub metric: usize,
}

/// Print every recognized line of a log with its line number.
///
/// Only the metric line that feeds `transformation` is reported as a metric;
/// counter lines are ignored for time-based transformations and vice versa.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read.
///
/// # Examples
///
/// ```no_run
/// use benchsum_cli::commands::inspect;
/// use benchsum_core::Transformation;
///
/// # fn main() -> Result<(), benchsum_cli::error::CliError> {
/// inspect("no-metrics/job-blas.out", Transformation::Runtime)?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(file: &str, transformation: Transformation) -> Result<InspectCounts, CliError> {
    let content = read_file(file)?;
    let classifier = LineClassifier::new(transformation.metric_source());
    let mut counts = InspectCounts::default();

    println!("{}", "Log Classification".bold().underline());
    println!();
    println!("{}  {}", "File:".cyan(), file);
    println!("{}  {}", "Transformation:".cyan(), transformation);
    println!();

    for (index, line) in content.lines().enumerate() {
        counts.lines += 1;
        let number = format!("{:>6}", index + 1);
        match classifier.classify(line) {
            LineClass::Concurrency(p) => {
                counts.concurrency += 1;
                println!("{}  {} P={}", number.dimmed(), "threads    ".yellow(), p);
            }
            LineClass::ProblemSize(n) => {
                counts.problem_size += 1;
                println!("{}  {} N={}", number.dimmed(), "size       ".yellow(), n);
            }
            LineClass::BlockSize(b) => {
                counts.block_size += 1;
                println!("{}  {} B={}", number.dimmed(), "block      ".yellow(), b);
            }
            LineClass::Metric(v) => {
                counts.metric += 1;
                println!("{}  {} {}", number.dimmed(), "metric     ".green(), v);
            }
            LineClass::Ignored => {}
        }
    }

    println!();
    println!(
        "{}  {} lines, {} thread, {} size, {} block, {} metric",
        "Summary:".cyan(),
        counts.lines,
        counts.concurrency,
        counts.problem_size,
        counts.block_size,
        counts.metric
    );

    Ok(counts)
}
