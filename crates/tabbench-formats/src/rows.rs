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

//! Row bridge between arrow batches and row-oriented codecs.
//!
//! XML, Excel, Pickle, Avro, and MessagePack serialize row-wise, so the
//! batch is lowered to typed cells first. Supported column types are
//! `Int64`, `Float64`, and `Utf8`; anything else (including null values)
//! is an unsupported-column error, which surfaces as a fatal encode
//! failure for the variant that hit it.

use std::fmt;

use arrow::array::{Array, Float64Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use tabbench_core::{BenchError, Result};

/// One typed cell of the dataset.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// UTF-8 string.
    Str(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Row-major view of a batch: column names in schema order plus one cell
/// vector per row.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RowTable {
    /// Column names in schema order.
    pub columns: Vec<String>,
    /// Rows in batch order, cells in column order.
    pub rows: Vec<Vec<Cell>>,
}

enum ColumnAccessor<'a> {
    Int(&'a Int64Array),
    Float(&'a Float64Array),
    Str(&'a StringArray),
}

impl ColumnAccessor<'_> {
    fn cell(&self, row: usize) -> Cell {
        match self {
            ColumnAccessor::Int(a) => Cell::Int(a.value(row)),
            ColumnAccessor::Float(a) => Cell::Float(a.value(row)),
            ColumnAccessor::Str(a) => Cell::Str(a.value(row).to_string()),
        }
    }
}

/// Lowers a batch into a [`RowTable`] for a row-oriented codec.
///
/// `format` is the tag reported in errors.
///
/// # Errors
///
/// Returns [`BenchError::UnsupportedColumn`] for column types outside
/// `Int64`/`Float64`/`Utf8`, or for columns containing nulls.
pub fn batch_to_table(batch: &RecordBatch, format: &str) -> Result<RowTable> {
    let schema = batch.schema();
    let mut columns = Vec::with_capacity(batch.num_columns());
    let mut accessors = Vec::with_capacity(batch.num_columns());

    for (field, array) in schema.fields().iter().zip(batch.columns()) {
        if array.null_count() > 0 {
            return Err(BenchError::UnsupportedColumn {
                column: field.name().clone(),
                data_type: format!("nullable {:?}", field.data_type()),
                format: format.to_string(),
            });
        }

        let accessor = match field.data_type() {
            DataType::Int64 => array
                .as_any()
                .downcast_ref::<Int64Array>()
                .map(ColumnAccessor::Int),
            DataType::Float64 => array
                .as_any()
                .downcast_ref::<Float64Array>()
                .map(ColumnAccessor::Float),
            DataType::Utf8 => array
                .as_any()
                .downcast_ref::<StringArray>()
                .map(ColumnAccessor::Str),
            _ => None,
        };

        match accessor {
            Some(accessor) => {
                columns.push(field.name().clone());
                accessors.push(accessor);
            }
            None => {
                return Err(BenchError::UnsupportedColumn {
                    column: field.name().clone(),
                    data_type: format!("{:?}", field.data_type()),
                    format: format.to_string(),
                });
            }
        }
    }

    let mut rows = Vec::with_capacity(batch.num_rows());
    for row in 0..batch.num_rows() {
        rows.push(accessors.iter().map(|a| a.cell(row)).collect());
    }

    Ok(RowTable { columns, rows })
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::sync::Arc;

    use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;

    /// Small mixed-type batch shared by the codec tests.
    pub(crate) fn mixed_batch() -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("value", DataType::Float64, false),
            Field::new("label", DataType::Utf8, false),
        ]));
        let columns: Vec<ArrayRef> = vec![
            Arc::new(Int64Array::from(vec![1, 2, 3])),
            Arc::new(Float64Array::from(vec![0.5, 1.5, 2.5])),
            Arc::new(StringArray::from(vec!["alpha", "beta", "gamma"])),
        ];
        RecordBatch::try_new(schema, columns).unwrap()
    }

    /// Batch with a column no text codec can serialize.
    pub(crate) fn binary_batch() -> RecordBatch {
        use arrow::array::BinaryArray;

        let schema = Arc::new(Schema::new(vec![Field::new(
            "blob",
            DataType::Binary,
            false,
        )]));
        let column: ArrayRef = Arc::new(BinaryArray::from_vec(vec![b"ab", b"cd"]));
        RecordBatch::try_new(schema, vec![column]).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::testutil::{binary_batch, mixed_batch};
    use super::*;

    #[test]
    fn test_batch_to_table_preserves_schema_order() {
        let table = batch_to_table(&mixed_batch(), "pickle").unwrap();
        assert_eq!(table.columns, ["id", "value", "label"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(
            table.rows[1],
            vec![
                Cell::Int(2),
                Cell::Float(1.5),
                Cell::Str("beta".to_string())
            ]
        );
    }

    #[test]
    fn test_batch_to_table_rejects_binary_column() {
        let err = batch_to_table(&binary_batch(), "xml").unwrap_err();
        match err {
            BenchError::UnsupportedColumn { column, format, .. } => {
                assert_eq!(column, "blob");
                assert_eq!(format, "xml");
            }
            other => panic!("expected UnsupportedColumn, got {other}"),
        }
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Int(7).to_string(), "7");
        assert_eq!(Cell::Float(0.25).to_string(), "0.25");
        assert_eq!(Cell::Str("x".to_string()).to_string(), "x");
    }
}
