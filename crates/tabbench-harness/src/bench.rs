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

//! One benchmark variant: a format measured against the shared dataset.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::record_batch::RecordBatch;

use tabbench_core::{sample, BenchError, Result, ResultRecord};
use tabbench_formats::Format;

/// A single benchmark variant.
///
/// The variant owns its target path. Measurement runs write, then size,
/// then read: the write phase leaves the last written file on disk, the
/// size is sampled once from that file, and the read phase re-reads it
/// once per repeat. [`FormatBench::clean_files`] removes the file again;
/// the suite calls it for every constructed variant whether or not the
/// variant got to run.
#[derive(Debug)]
pub struct FormatBench {
    format: Format,
    dataset: Arc<RecordBatch>,
    path: PathBuf,
    results: Option<ResultRecord>,
}

impl FormatBench {
    /// Creates a variant for `format` targeting `path`.
    pub fn new(format: Format, dataset: Arc<RecordBatch>, path: PathBuf) -> Self {
        Self {
            format,
            dataset,
            path,
            results: None,
        }
    }

    /// The measured format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// The benchmark file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs the full measurement for this variant: `repeats` timed writes,
    /// one file size sample, then `repeats` timed reads. Prints a progress
    /// line to stderr before measuring, keeping stdout free for results.
    /// On success the record is stored for [`FormatBench::take_results`];
    /// on failure nothing is stored.
    pub fn collect_results(&mut self, repeats: u32) -> Result<()> {
        eprintln!("Running '{}'...", self.format);

        let write_times = self.measure_write(repeats)?;
        let file_size = self.file_size()?;
        let read_times = self.measure_read(repeats)?;

        self.results = Some(ResultRecord::new(
            self.format.tag(),
            write_times,
            file_size,
            read_times,
        ));
        Ok(())
    }

    /// Takes the collected record, leaving `None` behind.
    pub fn take_results(&mut self) -> Option<ResultRecord> {
        self.results.take()
    }

    /// Removes the benchmark file if it exists, reporting either outcome
    /// to stderr. A file that was never written is not an error; a file
    /// that exists but cannot be removed is.
    pub fn clean_files(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| BenchError::Cleanup {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
            eprintln!("Cleaned '{}'.", self.path.display());
        } else {
            eprintln!(
                "Could not clean '{}', as it does not exist",
                self.path.display()
            );
        }
        Ok(())
    }

    fn measure_write(&self, repeats: u32) -> Result<Vec<f64>> {
        sample(repeats, || self.format.write(&self.dataset, &self.path))
    }

    fn measure_read(&self, repeats: u32) -> Result<Vec<f64>> {
        sample(repeats, || self.format.read(&self.dataset, &self.path))
    }

    fn file_size(&self) -> Result<u64> {
        let metadata = fs::metadata(&self.path).map_err(|e| BenchError::FileSize {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arrow::array::{ArrayRef, Float64Array};
    use arrow::datatypes::{DataType, Field, Schema};

    fn small_dataset() -> Arc<RecordBatch> {
        let schema = Arc::new(Schema::new(vec![Field::new("a", DataType::Float64, false)]));
        let column: ArrayRef = Arc::new(Float64Array::from(vec![1.0, 2.0, 3.0]));
        Arc::new(RecordBatch::try_new(schema, vec![column]).unwrap())
    }

    #[test]
    fn test_collect_results_produces_full_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.csv");
        let mut bench = FormatBench::new(Format::Csv, small_dataset(), path.clone());

        bench.collect_results(2).unwrap();
        let record = bench.take_results().unwrap();

        assert_eq!(record.format, "csv");
        assert_eq!(record.write_times.len(), 2);
        assert_eq!(record.read_times.len(), 2);
        assert!(record.file_size > 0);
        assert!(path.exists());
    }

    #[test]
    fn test_take_results_drains_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut bench =
            FormatBench::new(Format::Csv, small_dataset(), dir.path().join("bench.csv"));

        bench.collect_results(1).unwrap();
        assert!(bench.take_results().is_some());
        assert!(bench.take_results().is_none());
    }

    #[test]
    fn test_clean_files_removes_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.csv");
        let mut bench = FormatBench::new(Format::Csv, small_dataset(), path.clone());

        bench.collect_results(1).unwrap();
        assert!(path.exists());

        bench.clean_files().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_clean_files_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let bench = FormatBench::new(Format::Csv, small_dataset(), dir.path().join("absent.csv"));

        bench.clean_files().unwrap();
    }

    #[test]
    fn test_failed_collection_stores_no_record() {
        let dir = tempfile::tempdir().unwrap();
        // Writing to a directory path fails at file creation.
        let mut bench = FormatBench::new(Format::Csv, small_dataset(), dir.path().to_path_buf());

        assert!(bench.collect_results(1).is_err());
        assert!(bench.take_results().is_none());
    }
}
