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

//! Pickle codec, delegated to `serde-pickle` (protocol 3 stream).

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use arrow::record_batch::RecordBatch;
use serde_pickle::{DeOptions, SerOptions};

use tabbench_core::{BenchError, Result};

use crate::rows::{batch_to_table, RowTable};

const TAG: &str = "pickle";

/// Writes the batch to `path` as a pickled row table.
pub fn write_pickle(batch: &RecordBatch, path: &Path) -> Result<()> {
    let table = batch_to_table(batch, TAG)?;

    let file = File::create(path).map_err(|e| BenchError::encode(TAG, e))?;
    let mut writer = BufWriter::new(file);
    serde_pickle::to_writer(&mut writer, &table, SerOptions::new())
        .map_err(|e| BenchError::encode(TAG, e))?;
    writer.flush().map_err(|e| BenchError::encode(TAG, e))?;
    Ok(())
}

/// Unpickles the file at `path` back into a row table and discards it.
pub fn read_pickle(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| BenchError::decode(TAG, e))?;
    let _table: RowTable = serde_pickle::from_reader(BufReader::new(file), DeOptions::new())
        .map_err(|e| BenchError::decode(TAG, e))?;
    Ok(())
}
