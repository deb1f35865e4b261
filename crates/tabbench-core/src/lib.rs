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

//! Core data model and measurement primitives for tabbench.
//!
//! This crate holds everything the benchmark harness needs that is not a
//! format codec: the synthetic dataset generator, the error taxonomy, the
//! wall-clock sampling helper, and the result record/table types.

pub mod dataset;
pub mod error;
pub mod measure;
pub mod report;

pub use dataset::{numeric_batch, validate_dataset_size, MAX_DATASET_SIZE, NUMERIC_COLUMNS};
pub use error::{BenchError, Result};
pub use measure::sample;
pub use report::{ResultRecord, ResultTable};
