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

//! End-to-end tests: fixture logs through the scanner to CSV text.

use benchsum_core::{CategoryTable, Summarizer, SummaryError, SummaryOptions, Transformation};
use benchsum_csv::{to_csv, CsvError};
use benchsum_test::fixtures;
use std::collections::HashMap;

const ALL_CATEGORIES: &str = "BLAS,Basic,Blocked; B=4,Blocked; B=16";

fn summarize(categories: &str, options: SummaryOptions) -> benchsum_core::Result<String> {
    let logs: HashMap<_, _> = fixtures::job_logs().into_iter().collect();
    let table = CategoryTable::default();
    let mut summarizer = Summarizer::new(options);
    for category in table.resolve_list(categories)? {
        let log = &logs[category.filename()];
        summarizer.scan_reader(&category, log.as_bytes())?;
    }
    let summary = summarizer.finish()?;
    Ok(to_csv(&summary.table).expect("dense table"))
}

fn parse(csv: &str) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(csv.as_bytes())
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_runtime_all_categories() {
    let csv = summarize(ALL_CATEGORIES, SummaryOptions::default()).unwrap();
    let expected = "\
Implementation,64,128,1024
BLAS; P=1,0.000125,0.0005,0.03125
BLAS; P=4,0.0000625,0.000125,0.0078125
Basic; P=1,0.00025,0.002,0.0625
Basic; P=4,0.0000625,0.0005,0.015625
Blocked; B=16; P=1,0.00025,0.001,0.0625
Blocked; B=16; P=4,0.000125,0.000125,0.015625
Blocked; B=4; P=1,0.0005,0.001,0.125
Blocked; B=4; P=4,0.000125,0.00025,0.03125
";
    assert_eq!(csv, expected);
}

#[test]
fn test_speedup_all_categories() {
    let options = SummaryOptions::for_transformation(Transformation::Speedup);
    let csv = summarize(ALL_CATEGORIES, options).unwrap();
    let rows = parse(&csv);

    let speedups: HashMap<&str, Vec<&str>> = rows[1..]
        .iter()
        .filter(|r| r[0].ends_with("P=4"))
        .map(|r| (r[0].as_str(), r[1..].iter().map(String::as_str).collect()))
        .collect();

    assert_eq!(speedups["BLAS; P=4"], vec!["2", "4", "4"]);
    assert_eq!(speedups["Basic; P=4"], vec!["4", "4", "4"]);
    assert_eq!(speedups["Blocked; B=16; P=4"], vec!["2", "8", "4"]);
    assert_eq!(speedups["Blocked; B=4; P=4"], vec!["4", "4", "4"]);

    // Single-thread rows keep their runtimes.
    assert_eq!(rows[1], vec!["BLAS; P=1", "0.000125", "0.0005", "0.03125"]);
}

#[test]
fn test_normalized_runtime() {
    let csv = summarize(ALL_CATEGORIES, SummaryOptions::default().normalized()).unwrap();
    let expected = "\
Implementation,64,128,1024
BLAS,1,1,1
Basic,2,4,2
Blocked; B=16,2,2,2
Blocked; B=4,4,2,4
";
    assert_eq!(csv, expected);
}

#[test]
fn test_normalization_baseline_not_first() {
    let err = summarize("Basic,BLAS", SummaryOptions::default().normalized()).unwrap_err();
    assert_eq!(err, SummaryError::missing_baseline("BLAS", 64));
}

#[test]
fn test_mflops_values() {
    let options = SummaryOptions::for_transformation(Transformation::Mflops);
    let csv = summarize("BLAS", options).unwrap();
    let rows = parse(&csv);
    assert_eq!(rows[0], vec!["Implementation", "64", "128", "1024"]);
    assert_eq!(rows[1][0], "BLAS; P=1");

    let got: Vec<f64> = rows[1][1..].iter().map(|v| v.parse().unwrap()).collect();
    let expected = [
        2.0 * 64.0 * 64.0 / (0.000125 * 1e6),
        2.0 * 128.0 * 128.0 / (0.0005 * 1e6),
        2.0 * 1024.0 * 1024.0 / (0.03125 * 1e6),
    ];
    for (g, e) in got.iter().zip(expected) {
        assert!((g - e).abs() < 1e-9 * e, "{} != {}", g, e);
    }
}

#[test]
fn test_block_variants_only_see_their_runs() {
    let csv = summarize("Blocked; B=4", SummaryOptions::default()).unwrap();
    let rows = parse(&csv);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], vec!["Blocked; B=4; P=1", "0.0005", "0.001", "0.125"]);
    assert_eq!(rows[2], vec!["Blocked; B=4; P=4", "0.000125", "0.00025", "0.03125"]);
}

#[test]
fn test_counter_transformation_without_counters_is_empty() {
    let options = SummaryOptions::for_transformation(Transformation::L3Cache);
    let csv = summarize("BLAS,Basic", options).unwrap();
    assert_eq!(csv, "Implementation\n");
}

#[test]
fn test_output_is_deterministic() {
    let a = summarize(ALL_CATEGORIES, SummaryOptions::default()).unwrap();
    let b = summarize(ALL_CATEGORIES, SummaryOptions::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_category_order_does_not_change_output() {
    let a = summarize("BLAS,Basic", SummaryOptions::default()).unwrap();
    let b = summarize("Basic,BLAS", SummaryOptions::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_sparse_table_is_reported() {
    use benchsum_core::Category;
    use benchsum_test::LogBuilder;

    let full = LogBuilder::new().run(1, 16, 1.0).run(1, 32, 2.0).build();
    let partial = LogBuilder::new().run(1, 16, 1.0).build();

    let mut summarizer = Summarizer::new(SummaryOptions::default());
    summarizer
        .scan_reader(&Category::new("BLAS", "a"), full.as_bytes())
        .unwrap();
    summarizer
        .scan_reader(&Category::new("Basic", "b"), partial.as_bytes())
        .unwrap();
    let table = summarizer.finish().unwrap().table;

    match to_csv(&table).unwrap_err() {
        CsvError::SparseRow { key, problem_size } => {
            assert_eq!(key, "Basic; P=1");
            assert_eq!(problem_size, 32);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_likwid_counters() {
    use benchsum_core::Category;
    use benchsum_test::LogBuilder;

    let log = LogBuilder::new()
        .threads(1)
        .problem_size(512)
        .counters(356_874_211, 98_765, 4_321)
        .build();

    for (transformation, expected) in [
        (Transformation::RetiredInstructions, "356874211"),
        (Transformation::L2Cache, "98765"),
        (Transformation::L3Cache, "4321"),
    ] {
        let mut summarizer = Summarizer::new(SummaryOptions::for_transformation(transformation));
        summarizer
            .scan_reader(&Category::new("BLAS", "a"), log.as_bytes())
            .unwrap();
        let csv = to_csv(&summarizer.finish().unwrap().table).unwrap();
        assert_eq!(csv, format!("Implementation,512\nBLAS; P=1,{}\n", expected));
    }
}
