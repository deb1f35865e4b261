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

//! ORC codec, delegated to `orc-rust` over arrow batches.
//!
//! Both directions are pure Rust, so the read path is identical on every
//! platform.

use std::fs::File;
use std::path::Path;

use arrow::record_batch::RecordBatch;
use orc_rust::arrow_reader::ArrowReaderBuilder;
use orc_rust::arrow_writer::ArrowWriterBuilder;

use tabbench_core::{BenchError, Result};

const TAG: &str = "orc";

/// Writes the batch to `path` as ORC.
pub fn write_orc(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| BenchError::encode(TAG, e))?;
    let mut writer = ArrowWriterBuilder::new(file, batch.schema())
        .try_build()
        .map_err(|e| BenchError::encode(TAG, e))?;
    writer
        .write(batch)
        .map_err(|e| BenchError::encode(TAG, e))?;
    writer.close().map_err(|e| BenchError::encode(TAG, e))?;
    Ok(())
}

/// Reads the ORC file at `path` and discards it.
pub fn read_orc(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| BenchError::decode(TAG, e))?;
    let reader = ArrowReaderBuilder::try_new(file)
        .map_err(|e| BenchError::decode(TAG, e))?
        .build();
    for batch in reader {
        batch.map_err(|e| BenchError::decode(TAG, e))?;
    }
    Ok(())
}
