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

//! XML codec, delegated to `quick-xml` events.
//!
//! Layout: a `<data>` root, one `<row>` element per row, one element per
//! cell named after its column.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use arrow::record_batch::RecordBatch;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use tabbench_core::{BenchError, Result};

use crate::rows::batch_to_table;

const TAG: &str = "xml";

/// Writes the batch to `path` as element-per-cell XML.
pub fn write_xml(batch: &RecordBatch, path: &Path) -> Result<()> {
    let table = batch_to_table(batch, TAG)?;

    let file = File::create(path).map_err(|e| BenchError::encode(TAG, e))?;
    let mut writer = Writer::new(BufWriter::new(file));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| BenchError::encode(TAG, e))?;
    writer
        .write_event(Event::Start(BytesStart::new("data")))
        .map_err(|e| BenchError::encode(TAG, e))?;

    for row in &table.rows {
        writer
            .write_event(Event::Start(BytesStart::new("row")))
            .map_err(|e| BenchError::encode(TAG, e))?;
        for (name, cell) in table.columns.iter().zip(row) {
            writer
                .write_event(Event::Start(BytesStart::new(name.as_str())))
                .map_err(|e| BenchError::encode(TAG, e))?;
            writer
                .write_event(Event::Text(BytesText::new(&cell.to_string())))
                .map_err(|e| BenchError::encode(TAG, e))?;
            writer
                .write_event(Event::End(BytesEnd::new(name.as_str())))
                .map_err(|e| BenchError::encode(TAG, e))?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("row")))
            .map_err(|e| BenchError::encode(TAG, e))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("data")))
        .map_err(|e| BenchError::encode(TAG, e))?;

    writer
        .into_inner()
        .flush()
        .map_err(|e| BenchError::encode(TAG, e))?;
    Ok(())
}

/// Parses the XML file at `path` event by event and discards it.
pub fn read_xml(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| BenchError::decode(TAG, e))?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    reader.trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Text(e)) => {
                e.unescape().map_err(|e| BenchError::decode(TAG, e))?;
            }
            Ok(_) => {}
            Err(e) => return Err(BenchError::decode(TAG, e)),
        }
        buf.clear();
    }
    Ok(())
}
