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


//! CLI command definitions and argument parsing.
//!
//! - [`core`]: summarize and inspect
//! - [`utility`]: categories and shell completion

mod core;
mod utility;

use crate::error::CliError;
use clap::Subcommand;

pub use core::CoreCommands;
pub use utility::UtilityCommands;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Core (summarize, inspect)
/// └── Utility (categories, completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Flattened so every command appears at top level
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns the first error of the dispatched command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
