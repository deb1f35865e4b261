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

//! The suite runner.
//!
//! Runs one [`FormatBench`] per requested format against a shared dataset,
//! aborting on the first measurement failure. Cleanup runs for every
//! constructed variant regardless of how far the run got; a measurement
//! failure takes precedence over any cleanup failure when both occur.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use arrow::record_batch::RecordBatch;

use tabbench_core::{BenchError, Result, ResultTable};
use tabbench_formats::Format;

use crate::bench::FormatBench;

/// Runs a set of format benchmarks over one dataset.
///
/// Benchmark files are named `{prefix}.{extension}` inside the output
/// directory, so formats never collide within a run and consecutive runs
/// reuse the same paths.
#[derive(Debug)]
pub struct BenchmarkSuite {
    dataset: Arc<RecordBatch>,
    out_dir: PathBuf,
    prefix: String,
    repeats: u32,
    formats: Vec<Format>,
    results: Option<ResultTable>,
}

impl BenchmarkSuite {
    /// Creates a suite over `dataset` with all supported formats.
    ///
    /// Creates `out_dir` (and any missing parents) up front.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] when `repeats` is zero and
    /// [`BenchError::OutputDir`] when the output directory cannot be
    /// created.
    pub fn new(
        dataset: RecordBatch,
        out_dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
        repeats: u32,
    ) -> Result<Self> {
        if repeats == 0 {
            return Err(BenchError::InvalidConfig {
                parameter: "repeats".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir).map_err(|e| BenchError::OutputDir {
            path: out_dir.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            dataset: Arc::new(dataset),
            out_dir,
            prefix: prefix.into(),
            repeats,
            formats: Format::ALL.to_vec(),
            results: None,
        })
    }

    /// Restricts the suite to the given formats, keeping their order.
    ///
    /// Duplicate entries are dropped, keeping the first occurrence: every
    /// variant must have a unique tag and an exclusive benchmark file path.
    pub fn with_formats(mut self, formats: Vec<Format>) -> Self {
        let mut unique = Vec::with_capacity(formats.len());
        for format in formats {
            if !unique.contains(&format) {
                unique.push(format);
            }
        }
        self.formats = unique;
        self
    }

    /// The benchmark file path for `format` within this suite.
    pub fn path_for(&self, format: Format) -> PathBuf {
        self.out_dir
            .join(format!("{}.{}", self.prefix, format.extension()))
    }

    /// Runs every variant in order, aborting on the first measurement
    /// failure, then cleans all variants' files. Discards any previously
    /// collected results first.
    ///
    /// A measurement failure propagates even when cleanup also fails;
    /// a cleanup failure alone fails an otherwise successful run, after
    /// every remaining variant has been given its cleanup attempt.
    pub fn run(&mut self) -> Result<()> {
        self.results = None;

        let mut benches: Vec<FormatBench> = self
            .formats
            .iter()
            .map(|&format| {
                FormatBench::new(format, Arc::clone(&self.dataset), self.path_for(format))
            })
            .collect();

        let mut failure = None;
        for bench in &mut benches {
            if let Err(e) = bench.collect_results(self.repeats) {
                failure = Some(e);
                break;
            }
        }

        let mut cleanup_failure = None;
        for bench in &benches {
            if let Err(e) = bench.clean_files() {
                eprintln!("{}", e);
                if cleanup_failure.is_none() {
                    cleanup_failure = Some(e);
                }
            }
        }

        if let Some(e) = failure {
            return Err(e);
        }
        if let Some(e) = cleanup_failure {
            return Err(e);
        }

        let mut table = ResultTable::new();
        for bench in &mut benches {
            if let Some(record) = bench.take_results() {
                table.push(record);
            }
        }
        self.results = Some(table);
        Ok(())
    }

    /// Returns the results, running the suite first if it has not run yet.
    /// Results from a completed run are reused without re-running.
    pub fn results(&mut self) -> Result<&ResultTable> {
        if self.results.is_none() {
            self.run()?;
        }
        self.results.as_ref().ok_or_else(|| BenchError::Report {
            message: "no results collected".to_string(),
        })
    }
}
