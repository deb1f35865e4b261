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

//! Result records and the combined result table.
//!
//! One [`ResultRecord`] per variant holds the raw per-repeat samples; a
//! [`ResultTable`] concatenates all variants' records in suite construction
//! order and renders them for the console or as JSON.

use std::fmt;

use crate::error::{BenchError, Result};

/// Timing and size data collected by one benchmark variant.
///
/// Invariants: `file_size` is only valid after at least one successful
/// write, and `read_times` only after a write produced a readable file.
/// The harness enforces both by collecting the record in write/size/read
/// order and discarding it entirely on failure.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResultRecord {
    /// Format tag, unique per run.
    pub format: String,
    /// Write duration in seconds, one sample per repeat.
    pub write_times: Vec<f64>,
    /// File size in bytes, measured once after the write phase.
    pub file_size: u64,
    /// Read duration in seconds, one sample per repeat.
    pub read_times: Vec<f64>,
}

impl ResultRecord {
    /// Creates a new result record.
    pub fn new(
        format: impl Into<String>,
        write_times: Vec<f64>,
        file_size: u64,
        read_times: Vec<f64>,
    ) -> Self {
        Self {
            format: format.into(),
            write_times,
            file_size,
            read_times,
        }
    }

    /// Number of repeats the record was collected with.
    pub fn repeats(&self) -> usize {
        self.write_times.len()
    }

    /// Total write time across all repeats, in seconds.
    pub fn total_write_time(&self) -> f64 {
        self.write_times.iter().sum()
    }

    /// Total read time across all repeats, in seconds.
    pub fn total_read_time(&self) -> f64 {
        self.read_times.iter().sum()
    }

    /// Mean write time per repeat, in seconds.
    pub fn mean_write_time(&self) -> f64 {
        mean(&self.write_times)
    }

    /// Mean read time per repeat, in seconds.
    pub fn mean_read_time(&self) -> f64 {
        mean(&self.read_times)
    }
}

fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        samples.iter().sum::<f64>() / samples.len() as f64
    }
}

/// Concatenation of all variants' result records for one suite run.
///
/// Records keep suite construction order; ordering carries no other
/// significance.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResultTable {
    /// Records in suite construction order.
    pub records: Vec<ResultRecord>,
}

impl ResultTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, preserving insertion order.
    pub fn push(&mut self, record: ResultRecord) {
        self.records.push(record);
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    /// Serializes the table to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| BenchError::Report {
            message: e.to_string(),
        })
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:>8} {:>16} {:>16} {:>16}",
            "format", "repeats", "write_mean (s)", "file_size (B)", "read_mean (s)"
        )?;
        writeln!(f, "{}", "-".repeat(70))?;
        for record in &self.records {
            writeln!(
                f,
                "{:<10} {:>8} {:>16.6} {:>16} {:>16.6}",
                record.format,
                record.repeats(),
                record.mean_write_time(),
                record.file_size,
                record.mean_read_time()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tag: &str) -> ResultRecord {
        ResultRecord::new(tag, vec![0.1, 0.3], 1024, vec![0.2, 0.4])
    }

    #[test]
    fn test_record_aggregates() {
        let r = record("csv");
        assert_eq!(r.repeats(), 2);
        assert!((r.total_write_time() - 0.4).abs() < 1e-12);
        assert!((r.mean_write_time() - 0.2).abs() < 1e-12);
        assert!((r.mean_read_time() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_table_preserves_insertion_order() {
        let mut table = ResultTable::new();
        table.push(record("csv"));
        table.push(record("parquet"));
        table.push(record("orc"));

        let tags: Vec<&str> = table.iter().map(|r| r.format.as_str()).collect();
        assert_eq!(tags, ["csv", "parquet", "orc"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_table_display_contains_every_format() {
        let mut table = ResultTable::new();
        table.push(record("csv"));
        table.push(record("feather"));

        let rendered = table.to_string();
        assert!(rendered.contains("csv"));
        assert!(rendered.contains("feather"));
        assert!(rendered.contains("file_size"));
    }

    #[test]
    fn test_table_json_round_trip() {
        let mut table = ResultTable::new();
        table.push(record("avro"));

        let json = table.to_json().unwrap();
        let parsed: ResultTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_mean_of_empty_samples_is_zero() {
        let r = ResultRecord::new("csv", vec![], 0, vec![]);
        assert_eq!(r.mean_write_time(), 0.0);
        assert_eq!(r.mean_read_time(), 0.0);
    }
}
