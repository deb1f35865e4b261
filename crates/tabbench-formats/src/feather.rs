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

//! Feather codec, delegated to the arrow IPC file format (Feather v2).

use std::fs::File;
use std::path::Path;

use arrow::ipc::reader::FileReader;
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;

use tabbench_core::{BenchError, Result};

const TAG: &str = "feather";

/// Writes the batch to `path` as an arrow IPC file.
pub fn write_feather(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| BenchError::encode(TAG, e))?;
    let schema = batch.schema();
    let mut writer = FileWriter::try_new(file, &schema).map_err(|e| BenchError::encode(TAG, e))?;
    writer
        .write(batch)
        .map_err(|e| BenchError::encode(TAG, e))?;
    writer.finish().map_err(|e| BenchError::encode(TAG, e))?;
    Ok(())
}

/// Reads the IPC file at `path` and discards it.
pub fn read_feather(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| BenchError::decode(TAG, e))?;
    let reader = FileReader::try_new(file, None).map_err(|e| BenchError::decode(TAG, e))?;
    for batch in reader {
        batch.map_err(|e| BenchError::decode(TAG, e))?;
    }
    Ok(())
}
