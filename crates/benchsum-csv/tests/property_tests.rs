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

//! Property-based tests for table rendering and log scanning.

use benchsum_core::{Category, MetricTable, Summarizer, SummaryOptions};
use benchsum_csv::to_csv;
use benchsum_test::LogBuilder;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["BLAS", "Basic", "Blocked; B=4", "Blocked; B=16"])
        .prop_flat_map(|label| (Just(label), 1u32..=64))
        .prop_map(|(label, p)| format!("{}; P={}", label, p))
}

fn dense_cells() -> impl Strategy<Value = (Vec<String>, Vec<u64>, Vec<f64>)> {
    (
        prop::collection::btree_set(key_strategy(), 1..6),
        prop::collection::btree_set(1u64..100_000, 1..8),
    )
        .prop_flat_map(|(keys, sizes)| {
            let keys: Vec<String> = keys.into_iter().collect();
            let sizes: Vec<u64> = sizes.into_iter().collect();
            let cells = keys.len() * sizes.len();
            (
                Just(keys),
                Just(sizes),
                prop::collection::vec(1e-9f64..1e6, cells),
            )
        })
}

fn build_table(keys: &[String], sizes: &[u64], values: &[f64], reverse: bool) -> MetricTable {
    let mut cells = Vec::new();
    for (i, key) in keys.iter().enumerate() {
        for (j, &n) in sizes.iter().enumerate() {
            cells.push((key.as_str(), n, values[i * sizes.len() + j]));
        }
    }
    if reverse {
        cells.reverse();
    }
    let mut table = MetricTable::new();
    for (key, n, v) in cells {
        table.insert(key, n, v);
    }
    table
}

fn records(csv: &str) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(csv.as_bytes())
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

proptest! {
    #[test]
    fn prop_insertion_order_does_not_matter((keys, sizes, values) in dense_cells()) {
        let forward = to_csv(&build_table(&keys, &sizes, &values, false)).unwrap();
        let backward = to_csv(&build_table(&keys, &sizes, &values, true)).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_rows_and_columns_sorted((keys, sizes, values) in dense_cells()) {
        let csv = to_csv(&build_table(&keys, &sizes, &values, true)).unwrap();
        let rows = records(&csv);

        let header: Vec<u64> = rows[0][1..].iter().map(|s| s.parse().unwrap()).collect();
        let mut sorted_header = header.clone();
        sorted_header.sort_unstable();
        prop_assert_eq!(&header, &sorted_header);

        let row_keys: Vec<&str> = rows[1..].iter().map(|r| r[0].as_str()).collect();
        let mut sorted_keys = row_keys.clone();
        sorted_keys.sort();
        prop_assert_eq!(row_keys, sorted_keys);
    }

    #[test]
    fn prop_every_row_is_complete((keys, sizes, values) in dense_cells()) {
        let csv = to_csv(&build_table(&keys, &sizes, &values, false)).unwrap();
        let rows = records(&csv);
        prop_assert_eq!(rows.len(), keys.len() + 1);
        for row in &rows {
            prop_assert_eq!(row.len(), sizes.len() + 1);
        }
    }

    #[test]
    fn prop_values_read_back_exactly((keys, sizes, values) in dense_cells()) {
        let table = build_table(&keys, &sizes, &values, false);
        let rows = records(&to_csv(&table).unwrap());
        for row in &rows[1..] {
            for (cell, n) in row[1..].iter().zip(table.problem_sizes()) {
                let parsed: f64 = cell.parse().unwrap();
                prop_assert_eq!(Some(parsed), table.get(&row[0], n));
            }
        }
    }

    #[test]
    fn prop_dropping_a_cell_is_rejected(
        (keys, sizes, values) in dense_cells(),
        extra in 100_000u64..200_000,
    ) {
        let mut table = build_table(&keys, &sizes, &values, false);
        // A new size reported by a single row leaves every other row sparse.
        table.insert(&keys[0], extra, 1.0);
        prop_assert_eq!(to_csv(&table).is_err(), keys.len() > 1);
    }

    #[test]
    fn prop_scan_columns_match_observed_sizes(
        sizes in prop::collection::vec(1u64..10_000, 1..10),
    ) {
        let mut log = LogBuilder::new().threads(1);
        for &n in &sizes {
            log = log.problem_size(n).elapsed(0.5);
        }
        let mut summarizer = Summarizer::new(SummaryOptions::default());
        summarizer
            .scan_reader(&Category::new("BLAS", "a"), log.build().as_bytes())
            .unwrap();
        let table = summarizer.finish().unwrap().table;

        let observed: BTreeSet<u64> = sizes.iter().copied().collect();
        let columns: BTreeSet<u64> = table.problem_sizes().collect();
        prop_assert_eq!(observed, columns);
    }
}
