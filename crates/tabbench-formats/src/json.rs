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

//! JSON codec, delegated to `arrow::json` (newline-delimited records).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use arrow::datatypes::SchemaRef;
use arrow::json::{LineDelimitedWriter, ReaderBuilder};
use arrow::record_batch::RecordBatch;

use tabbench_core::{BenchError, Result};

const TAG: &str = "json";

/// Writes the batch to `path` as newline-delimited JSON records.
pub fn write_json(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| BenchError::encode(TAG, e))?;
    let mut writer = LineDelimitedWriter::new(file);
    writer
        .write(batch)
        .map_err(|e| BenchError::encode(TAG, e))?;
    writer.finish().map_err(|e| BenchError::encode(TAG, e))?;
    Ok(())
}

/// Reads the JSON file at `path` against the given schema and discards it.
pub fn read_json(schema: SchemaRef, path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| BenchError::decode(TAG, e))?;
    let reader = ReaderBuilder::new(schema)
        .build(BufReader::new(file))
        .map_err(|e| BenchError::decode(TAG, e))?;
    for batch in reader {
        batch.map_err(|e| BenchError::decode(TAG, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::testutil::mixed_batch;

    #[test]
    fn test_json_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let batch = mixed_batch();

        write_json(&batch, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let first_line = contents.lines().next().unwrap();
        assert!(first_line.contains("\"id\":1"));

        read_json(batch.schema(), &path).unwrap();
    }
}
