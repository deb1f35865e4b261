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

//! CSV codec, delegated to `arrow::csv`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use tabbench_core::{BenchError, Result};

const TAG: &str = "csv";

/// Writes the batch to `path` as CSV with a header row.
///
/// The CSV writer drains into an owned [`BufWriter`] that is flushed
/// explicitly, so late I/O errors (disk full at flush time) surface as
/// encode failures instead of being swallowed on drop.
pub fn write_csv(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| BenchError::encode(TAG, e))?;
    let mut buf = BufWriter::new(file);
    {
        let mut writer = WriterBuilder::new().with_header(true).build(&mut buf);
        writer
            .write(batch)
            .map_err(|e| BenchError::encode(TAG, e))?;
    }
    buf.flush().map_err(|e| BenchError::encode(TAG, e))?;
    Ok(())
}

/// Reads the CSV file at `path` against the given schema and discards it.
pub fn read_csv(schema: SchemaRef, path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| BenchError::decode(TAG, e))?;
    let reader = ReaderBuilder::new(schema)
        .with_header(true)
        .build(file)
        .map_err(|e| BenchError::decode(TAG, e))?;
    for batch in reader {
        batch.map_err(|e| BenchError::decode(TAG, e))?;
    }
    Ok(())
}
