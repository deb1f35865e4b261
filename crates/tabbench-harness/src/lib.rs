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

//! Benchmark variants and the suite runner.
//!
//! A [`FormatBench`] measures one format against the shared dataset; a
//! [`BenchmarkSuite`] constructs one variant per requested format, runs
//! them in order, and guarantees every variant's benchmark file is
//! cleaned afterwards, pass or fail.

pub mod bench;
pub mod suite;

pub use bench::FormatBench;
pub use suite::BenchmarkSuite;
