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

//! Excel codec: `rust_xlsxwriter` writes, `calamine` reads.

use std::path::Path;

use arrow::record_batch::RecordBatch;
use calamine::{open_workbook, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use tabbench_core::{BenchError, Result};

use crate::rows::{batch_to_table, Cell};

const TAG: &str = "xlsx";

/// Writes the batch to `path` as a single-sheet Excel workbook with a
/// header row.
pub fn write_xlsx(batch: &RecordBatch, path: &Path) -> Result<()> {
    let table = batch_to_table(batch, TAG)?;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in table.columns.iter().enumerate() {
        sheet
            .write_string(0, col as u16, name)
            .map_err(|e| BenchError::encode(TAG, e))?;
    }

    for (row, cells) in table.rows.iter().enumerate() {
        let row = (row + 1) as u32;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Int(v) => sheet.write_number(row, col, *v as f64),
                Cell::Float(v) => sheet.write_number(row, col, *v),
                Cell::Str(s) => sheet.write_string(row, col, s),
            }
            .map_err(|e| BenchError::encode(TAG, e))?;
        }
    }

    workbook.save(path).map_err(|e| BenchError::encode(TAG, e))?;
    Ok(())
}

/// Reads the workbook at `path`, walking every cell of the first sheet,
/// and discards it.
pub fn read_xlsx(path: &Path) -> Result<()> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| BenchError::decode(TAG, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| BenchError::decode(TAG, "workbook has no sheets"))?
        .map_err(|e| BenchError::decode(TAG, e))?;

    for row in range.rows() {
        for _cell in row {}
    }
    Ok(())
}
