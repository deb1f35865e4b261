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

//! The benchmarked format set.
//!
//! [`Format`] is the tagged-variant dispatch point: one variant per
//! supported format, carrying the tag used in result records, the file
//! extension used for naming, and the write/read codec bindings.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use arrow::record_batch::RecordBatch;

use tabbench_core::{BenchError, Result};

/// A supported serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Comma-separated values.
    Csv,
    /// Newline-delimited JSON.
    Json,
    /// Element-per-cell XML.
    Xml,
    /// Excel workbook.
    Xlsx,
    /// Python pickle stream.
    Pickle,
    /// Avro object container file.
    Avro,
    /// Arrow IPC file (Feather v2).
    Feather,
    /// Apache Parquet.
    Parquet,
    /// Apache ORC.
    Orc,
    /// MessagePack stream.
    MessagePack,
}

impl Format {
    /// All supported formats in suite construction order.
    pub const ALL: [Format; 10] = [
        Format::Csv,
        Format::Json,
        Format::Xml,
        Format::Xlsx,
        Format::Pickle,
        Format::Avro,
        Format::Feather,
        Format::Parquet,
        Format::Orc,
        Format::MessagePack,
    ];

    /// Format tag, unique per run, used in result records.
    pub fn tag(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Xlsx => "xlsx",
            Format::Pickle => "pickle",
            Format::Avro => "avro",
            Format::Feather => "feather",
            Format::Parquet => "parquet",
            Format::Orc => "orc",
            Format::MessagePack => "msgpack",
        }
    }

    /// File extension for benchmark file naming.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Xlsx => "xlsx",
            Format::Pickle => "pkl",
            Format::Avro => "avro",
            Format::Feather => "feather",
            Format::Parquet => "parquet",
            Format::Orc => "orc",
            Format::MessagePack => "msgpack",
        }
    }

    /// Serializes the full dataset to `path`, creating or overwriting the
    /// file. Failures are fatal for the variant and propagate unretried.
    pub fn write(self, batch: &RecordBatch, path: &Path) -> Result<()> {
        match self {
            Format::Csv => crate::csv::write_csv(batch, path),
            Format::Json => crate::json::write_json(batch, path),
            Format::Xml => crate::xml::write_xml(batch, path),
            Format::Xlsx => crate::xlsx::write_xlsx(batch, path),
            Format::Pickle => crate::pickle::write_pickle(batch, path),
            Format::Avro => crate::avro::write_avro(batch, path),
            Format::Feather => crate::feather::write_feather(batch, path),
            Format::Parquet => crate::parquet::write_parquet(batch, path),
            Format::Orc => crate::orc::write_orc(batch, path),
            Format::MessagePack => crate::msgpack::write_msgpack(batch, path),
        }
    }

    /// Deserializes the file at `path` and discards the result; the read is
    /// measured for cost, not correctness. Schema-directed readers (CSV,
    /// JSON) take the schema from `batch`.
    pub fn read(self, batch: &RecordBatch, path: &Path) -> Result<()> {
        match self {
            Format::Csv => crate::csv::read_csv(batch.schema(), path),
            Format::Json => crate::json::read_json(batch.schema(), path),
            Format::Xml => crate::xml::read_xml(path),
            Format::Xlsx => crate::xlsx::read_xlsx(path),
            Format::Pickle => crate::pickle::read_pickle(path),
            Format::Avro => crate::avro::read_avro(path),
            Format::Feather => crate::feather::read_feather(path),
            Format::Parquet => crate::parquet::read_parquet(path),
            Format::Orc => crate::orc::read_orc(path),
            Format::MessagePack => crate::msgpack::read_msgpack(path),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Format {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .iter()
            .copied()
            .find(|f| f.tag() == s)
            .ok_or_else(|| BenchError::InvalidConfig {
                parameter: "format".to_string(),
                reason: format!("unknown format '{}'", s),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_unique() {
        for (i, a) in Format::ALL.iter().enumerate() {
            for b in &Format::ALL[i + 1..] {
                assert_ne!(a.tag(), b.tag());
                assert_ne!(a.extension(), b.extension());
            }
        }
    }

    #[test]
    fn test_suite_order() {
        let tags: Vec<&str> = Format::ALL.iter().map(|f| f.tag()).collect();
        assert_eq!(
            tags,
            [
                "csv", "json", "xml", "xlsx", "pickle", "avro", "feather", "parquet", "orc",
                "msgpack"
            ]
        );
    }

    #[test]
    fn test_from_str_round_trips_tags() {
        for format in Format::ALL {
            assert_eq!(format.tag().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "hdf5".parse::<Format>().unwrap_err();
        assert!(err.to_string().contains("hdf5"));
    }
}
