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


//! benchsum command line interface

use clap::{ArgAction, Parser};
use benchsum_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// benchsum - Benchmark log summarizer
///
/// Scans benchmark job logs for timing and hardware counter lines and writes
/// a problem-size by implementation CSV table.
///
/// # Examples
///
/// ```bash
/// # Runtime table for the default categories
/// benchsum summarize -d no-metrics
///
/// # Speedup of every variant, written to stdout
/// benchsum summarize -c "BLAS,Basic,Blocked; B=4" -t speedup -o -
///
/// # Runtimes relative to BLAS
/// benchsum summarize -t runtime -a -x normalized
/// ```
#[derive(Parser)]
#[command(name = "benchsum")]
#[command(author, version, about = "benchsum - Benchmark log summarizer", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "benchsum=warn",
        1 => "benchsum=info",
        _ => "benchsum=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Logs go to stderr; stdout may carry CSV.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
