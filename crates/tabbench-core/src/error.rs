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

//! Error types for benchmark operations.
//!
//! One structured error enum covers the whole workspace: codec failures,
//! filesystem failures, and configuration problems. Encode and decode errors
//! are fatal for the variant that raised them and are never retried.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while generating data, measuring a format, or
/// cleaning up after a run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Dataset size exceeds the maximum allowed limit.
    #[error("dataset size {requested} exceeds maximum allowed limit of {max}")]
    DatasetTooLarge {
        /// Requested row count.
        requested: usize,
        /// Maximum allowed row count.
        max: usize,
    },

    /// Dataset construction failed.
    #[error("failed to generate dataset: {message}")]
    Generation {
        /// Error message.
        message: String,
    },

    /// Invalid configuration parameter.
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name.
        parameter: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// A format encoder rejected the dataset or failed to write it.
    #[error("{format} encode failed: {message}")]
    Encode {
        /// Format tag that failed.
        format: String,
        /// Error message from the codec.
        message: String,
    },

    /// A format decoder failed to read the file back.
    #[error("{format} decode failed: {message}")]
    Decode {
        /// Format tag that failed.
        format: String,
        /// Error message from the codec.
        message: String,
    },

    /// A column cannot be serialized by the requested format.
    #[error("column '{column}' has unsupported type {data_type} for {format}")]
    UnsupportedColumn {
        /// Column name.
        column: String,
        /// Arrow data type description.
        data_type: String,
        /// Format tag that rejected the column.
        format: String,
    },

    /// File size query failed, typically because no write has happened yet.
    #[error("file size unavailable for '{}': {message}", .path.display())]
    FileSize {
        /// Path that was queried.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },

    /// Output directory could not be created.
    #[error("failed to create output directory '{}': {message}", .path.display())]
    OutputDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },

    /// Removing a benchmark file at scope exit failed.
    #[error("failed to clean '{}': {message}", .path.display())]
    Cleanup {
        /// Path that could not be removed.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },

    /// Result table serialization failed.
    #[error("report serialization failed: {message}")]
    Report {
        /// Error message.
        message: String,
    },
}

impl BenchError {
    /// Builds an encode error for the given format tag.
    pub fn encode(format: impl Into<String>, err: impl fmt::Display) -> Self {
        BenchError::Encode {
            format: format.into(),
            message: err.to_string(),
        }
    }

    /// Builds a decode error for the given format tag.
    pub fn decode(format: impl Into<String>, err: impl fmt::Display) -> Self {
        BenchError::Decode {
            format: format.into(),
            message: err.to_string(),
        }
    }
}
