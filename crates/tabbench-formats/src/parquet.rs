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

//! Parquet codec, delegated to `parquet::arrow`.

use std::fs::File;
use std::path::Path;

use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;

use tabbench_core::{BenchError, Result};

const TAG: &str = "parquet";

/// Writes the batch to `path` as Parquet with default writer properties.
pub fn write_parquet(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| BenchError::encode(TAG, e))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)
        .map_err(|e| BenchError::encode(TAG, e))?;
    writer
        .write(batch)
        .map_err(|e| BenchError::encode(TAG, e))?;
    writer.close().map_err(|e| BenchError::encode(TAG, e))?;
    Ok(())
}

/// Reads the Parquet file at `path` and discards it.
pub fn read_parquet(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| BenchError::decode(TAG, e))?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| BenchError::decode(TAG, e))?
        .build()
        .map_err(|e| BenchError::decode(TAG, e))?;
    for batch in reader {
        batch.map_err(|e| BenchError::decode(TAG, e))?;
    }
    Ok(())
}
