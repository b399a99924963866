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


//! Core benchsum commands: summarizing and inspecting logs.

use crate::commands::{self, SummarizeConfig};
use crate::error::CliError;
use benchsum_core::{Transformation, DEFAULT_BASELINE};
use clap::Subcommand;
use std::path::PathBuf;

/// Core benchsum commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Summarize category logs into a CSV table
    ///
    /// Reads `<DIRECTORY>/<log file>` for every category, in order, and writes
    /// `<DIRECTORY>/<TRANSFORMATION>_<SUFFIX>.csv`. For speedup, single-thread
    /// runs must precede multi-thread runs in each log; with --normalize, the
    /// baseline category must be listed first.
    Summarize {
        /// Comma-separated category labels
        #[arg(short, long, default_value = "BLAS,Basic")]
        categories: String,

        /// Directory holding the logs and the output table
        #[arg(short, long, default_value = "no-metrics")]
        directory: PathBuf,

        /// Transformation: runtime, mflops, bandwidth, pct_bandwidth,
        /// avg_latency, pct_flops, speedup, RETIRED_INSTRUCTIONS, L2CACHE, L3CACHE
        #[arg(short, long, default_value = "runtime")]
        transformation: Transformation,

        /// Tag in the output filename
        #[arg(short = 'x', long, default_value = "basic")]
        suffix: String,

        /// Divide by the baseline category (single-thread samples only)
        #[arg(short = 'a', long)]
        normalize: bool,

        /// Baseline category for --normalize
        #[arg(long, default_value = DEFAULT_BASELINE)]
        baseline: String,

        /// YAML file mapping category labels to log filenames
        #[arg(long, value_name = "FILE")]
        category_table: Option<PathBuf>,

        /// Peak memory bandwidth in bytes per second
        #[arg(long, value_name = "BYTES_PER_SEC")]
        peak_bandwidth: Option<f64>,

        /// Peak floating-point rate in FLOP/s
        #[arg(long, value_name = "FLOPS")]
        peak_flops: Option<f64>,

        /// Output path override ('-' for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail when a category yields no samples
        #[arg(long)]
        strict: bool,
    },

    /// Show how each line of a log is classified
    ///
    /// Prints thread, problem-size, block-size and metric lines with their
    /// line numbers. Useful when a log produces fewer samples than expected.
    Inspect {
        /// Log file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Transformation whose metric line is reported
        #[arg(short, long, default_value = "runtime")]
        transformation: Transformation,
    },
}

impl CoreCommands {
    /// Execute the core command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Summarize {
                categories,
                directory,
                transformation,
                suffix,
                normalize,
                baseline,
                category_table,
                peak_bandwidth,
                peak_flops,
                output,
                strict,
            } => commands::summarize(&SummarizeConfig {
                categories,
                directory,
                transformation,
                suffix,
                normalize,
                baseline,
                category_table,
                peak_bandwidth,
                peak_flops,
                output,
                strict,
            }),
            CoreCommands::Inspect {
                file,
                transformation,
            } => commands::inspect(&file, transformation).map(|_| ()),
        }
    }
}
