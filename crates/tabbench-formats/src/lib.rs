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

//! File format codecs benchmarked by tabbench.
//!
//! Each module binds one format's write/read pair to an external codec
//! crate; the [`Format`] enum dispatches over them and carries the tag and
//! file extension used for naming. The harness never inspects file
//! contents: writes serialize the full dataset, reads deserialize and
//! discard it.
//!
//! Columnar formats (CSV, JSON, Feather, Parquet, ORC) operate on the arrow
//! [`RecordBatch`](arrow::record_batch::RecordBatch) directly; row-oriented
//! formats (XML, Excel, Pickle, Avro, MessagePack) go through the typed
//! cell bridge in [`rows`].

pub mod avro;
pub mod csv;
pub mod feather;
pub mod format;
pub mod json;
pub mod msgpack;
pub mod orc;
pub mod parquet;
pub mod pickle;
pub mod rows;
pub mod xlsx;
pub mod xml;

pub use format::Format;
pub use rows::{batch_to_table, Cell, RowTable};
