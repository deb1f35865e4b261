// tabbench - Tabular File Format Benchmarks
//
// Copyright (c) 2026 the tabbench contributors.
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

//! End-to-end suite runs over a real (small) generated dataset.

use std::sync::Arc;

use arrow::array::{ArrayRef, BinaryArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use tabbench_core::{numeric_batch, BenchError};
use tabbench_formats::Format;
use tabbench_harness::BenchmarkSuite;

fn residual_files(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_full_suite_measures_every_format_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = numeric_batch(200, 2908).unwrap();
    let mut suite = BenchmarkSuite::new(dataset, dir.path(), "benchmark", 2).unwrap();

    suite.run().unwrap();
    let results = suite.results().unwrap();

    assert_eq!(results.len(), Format::ALL.len());
    let tags: Vec<&str> = results.iter().map(|r| r.format.as_str()).collect();
    let expected: Vec<&str> = Format::ALL.iter().map(|f| f.tag()).collect();
    assert_eq!(tags, expected);

    for record in results.iter() {
        assert_eq!(record.write_times.len(), 2, "{}", record.format);
        assert_eq!(record.read_times.len(), 2, "{}", record.format);
        assert!(record.file_size > 0, "{}", record.format);
        assert!(record.write_times.iter().all(|&s| s >= 0.0));
        assert!(record.read_times.iter().all(|&s| s >= 0.0));
    }

    assert!(residual_files(dir.path()).is_empty());
}

#[test]
fn test_results_runs_the_suite_lazily_once() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = numeric_batch(50, 7).unwrap();
    let mut suite = BenchmarkSuite::new(dataset, dir.path(), "benchmark", 1)
        .unwrap()
        .with_formats(vec![Format::Csv, Format::Parquet]);

    // No run() beforehand: results() must trigger it.
    let first = suite.results().unwrap().clone();
    assert_eq!(first.len(), 2);

    // A second call reuses the collected table.
    let second = suite.results().unwrap();
    assert_eq!(*second, first);
}

#[test]
fn test_failing_variant_aborts_run_and_leaves_no_files() {
    let dir = tempfile::tempdir().unwrap();

    let schema = Arc::new(Schema::new(vec![Field::new(
        "blob",
        DataType::Binary,
        false,
    )]));
    let column: ArrayRef = Arc::new(BinaryArray::from_vec(vec![b"ab", b"cd"]));
    let dataset = RecordBatch::try_new(schema, vec![column]).unwrap();

    let mut suite = BenchmarkSuite::new(dataset, dir.path(), "benchmark", 2)
        .unwrap()
        .with_formats(vec![Format::Xml, Format::Feather]);

    let err = suite.run().unwrap_err();
    assert!(matches!(err, BenchError::UnsupportedColumn { .. }));

    // The row bridge rejects the batch before any file is created, and
    // feather never runs at all.
    assert!(residual_files(dir.path()).is_empty());
    assert!(suite.results().is_err());
}

#[test]
fn test_rerun_reuses_the_same_paths() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = numeric_batch(20, 1).unwrap();
    let mut suite = BenchmarkSuite::new(dataset, dir.path(), "benchmark", 1)
        .unwrap()
        .with_formats(vec![Format::Csv]);

    suite.run().unwrap();
    suite.run().unwrap();

    let results = suite.results().unwrap();
    assert_eq!(results.len(), 1);
    assert!(residual_files(dir.path()).is_empty());
}
