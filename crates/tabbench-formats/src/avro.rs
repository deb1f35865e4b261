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

//! Avro object container file codec, delegated to `apache-avro`.
//!
//! The record schema is derived from the batch schema at write time, so
//! the container is self-describing for any downstream reader.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use apache_avro::types::Value;
use apache_avro::{Reader, Schema, Writer};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use serde_json::json;

use tabbench_core::{BenchError, Result};

use crate::rows::{batch_to_table, Cell};

const TAG: &str = "avro";

/// Builds the Avro record schema matching the batch schema.
fn record_schema(batch: &RecordBatch) -> Result<Schema> {
    let mut fields = Vec::with_capacity(batch.num_columns());
    for field in batch.schema().fields() {
        let avro_type = match field.data_type() {
            DataType::Int64 => "long",
            DataType::Float64 => "double",
            DataType::Utf8 => "string",
            other => {
                return Err(BenchError::UnsupportedColumn {
                    column: field.name().clone(),
                    data_type: other.to_string(),
                    format: TAG.to_string(),
                })
            }
        };
        fields.push(json!({ "name": field.name(), "type": avro_type }));
    }

    let document = json!({
        "type": "record",
        "name": "row",
        "fields": fields,
    });
    Schema::parse_str(&document.to_string()).map_err(|e| BenchError::encode(TAG, e))
}

fn cell_value(cell: &Cell) -> Value {
    match cell {
        Cell::Int(v) => Value::Long(*v),
        Cell::Float(v) => Value::Double(*v),
        Cell::Str(s) => Value::String(s.clone()),
    }
}

/// Writes the batch to `path` as an Avro object container file.
pub fn write_avro(batch: &RecordBatch, path: &Path) -> Result<()> {
    let schema = record_schema(batch)?;
    let table = batch_to_table(batch, TAG)?;

    let file = File::create(path).map_err(|e| BenchError::encode(TAG, e))?;
    let mut writer = Writer::new(&schema, BufWriter::new(file));

    for row in &table.rows {
        let record = Value::Record(
            table
                .columns
                .iter()
                .zip(row)
                .map(|(name, cell)| (name.clone(), cell_value(cell)))
                .collect(),
        );
        writer
            .append(record)
            .map_err(|e| BenchError::encode(TAG, e))?;
    }

    writer.flush().map_err(|e| BenchError::encode(TAG, e))?;
    writer
        .into_inner()
        .map_err(|e| BenchError::encode(TAG, e))?
        .flush()
        .map_err(|e| BenchError::encode(TAG, e))?;
    Ok(())
}

/// Reads the container file at `path` record by record and discards it.
pub fn read_avro(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| BenchError::decode(TAG, e))?;
    let reader = Reader::new(BufReader::new(file)).map_err(|e| BenchError::decode(TAG, e))?;
    for value in reader {
        value.map_err(|e| BenchError::decode(TAG, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::testutil::{binary_batch, mixed_batch};

    #[test]
    fn test_avro_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.avro");

        write_avro(&mixed_batch(), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);

        read_avro(&path).unwrap();
    }

    #[test]
    fn test_avro_round_trip_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.avro");

        write_avro(&mixed_batch(), &path).unwrap();

        let file = File::open(&path).unwrap();
        let reader = Reader::new(BufReader::new(file)).unwrap();
        let records: Vec<Value> = reader.map(|v| v.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            Value::Record(vec![
                ("id".to_string(), Value::Long(1)),
                ("value".to_string(), Value::Double(0.5)),
                ("label".to_string(), Value::String("alpha".to_string())),
            ])
        );
    }

    #[test]
    fn test_avro_rejects_binary_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.avro");

        let err = write_avro(&binary_batch(), &path).unwrap_err();
        assert!(matches!(err, BenchError::UnsupportedColumn { .. }));
    }
}
