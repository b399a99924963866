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


//! Categories command - list the category table

use super::load_category_table;
use crate::error::CliError;
use benchsum_core::Category;
use colored::Colorize;
use std::path::Path;

/// Print each category label with its log file and block-size filter.
///
/// # Errors
///
/// Returns `Err` if a custom table cannot be loaded.
pub fn categories(category_table: Option<&Path>) -> Result<(), CliError> {
    let table = load_category_table(category_table)?;

    println!("{}", "Categories".bold().underline());
    println!();
    for (label, filename) in table.iter() {
        let category = Category::new(label, filename);
        match category.desired_block_size() {
            Some(b) => println!("  {}  {}  (B={})", label.green(), filename, b),
            None => println!("  {}  {}", label.green(), filename),
        }
    }
    Ok(())
}
