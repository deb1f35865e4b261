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

//! Synthetic dataset generation for benchmarks.
//!
//! The reference workload is a [`RecordBatch`] of five `Float64` columns
//! named `a` through `e`, filled with uniformly distributed values from a
//! seeded RNG so repeated runs benchmark identical bytes.
//!
//! Generation validates the requested row count against
//! [`MAX_DATASET_SIZE`] to prevent accidental memory exhaustion.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{BenchError, Result};

/// Maximum dataset size in rows (10 million).
///
/// Benchmarks beyond this size stop measuring codecs and start measuring
/// the allocator; requests above the limit are rejected.
pub const MAX_DATASET_SIZE: usize = 10_000_000;

/// Column names of the reference workload.
pub const NUMERIC_COLUMNS: [&str; 5] = ["a", "b", "c", "d", "e"];

/// Validate that a dataset size is within acceptable limits.
///
/// # Examples
///
/// ```
/// use tabbench_core::dataset::{validate_dataset_size, MAX_DATASET_SIZE};
///
/// assert!(validate_dataset_size(1000).is_ok());
/// assert!(validate_dataset_size(MAX_DATASET_SIZE + 1).is_err());
/// ```
#[inline]
pub fn validate_dataset_size(rows: usize) -> Result<()> {
    if rows > MAX_DATASET_SIZE {
        Err(BenchError::DatasetTooLarge {
            requested: rows,
            max: MAX_DATASET_SIZE,
        })
    } else {
        Ok(())
    }
}

/// Generates the reference workload: `rows` rows of five `Float64` columns.
///
/// The same `seed` always produces the same batch.
///
/// # Errors
///
/// Returns [`BenchError::DatasetTooLarge`] if `rows` exceeds
/// [`MAX_DATASET_SIZE`].
///
/// # Examples
///
/// ```
/// use tabbench_core::dataset::numeric_batch;
///
/// let batch = numeric_batch(100, 2908).unwrap();
/// assert_eq!(batch.num_rows(), 100);
/// assert_eq!(batch.num_columns(), 5);
/// ```
pub fn numeric_batch(rows: usize, seed: u64) -> Result<RecordBatch> {
    validate_dataset_size(rows)?;

    let mut rng = StdRng::seed_from_u64(seed);

    let fields: Vec<Field> = NUMERIC_COLUMNS
        .iter()
        .map(|name| Field::new(*name, DataType::Float64, false))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let columns: Vec<ArrayRef> = NUMERIC_COLUMNS
        .iter()
        .map(|_| {
            let values: Vec<f64> = (0..rows).map(|_| rng.gen::<f64>()).collect();
            Arc::new(Float64Array::from(values)) as ArrayRef
        })
        .collect();

    RecordBatch::try_new(schema, columns).map_err(|e| BenchError::Generation {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_batch_shape() {
        let batch = numeric_batch(50, 1).unwrap();
        assert_eq!(batch.num_rows(), 50);
        assert_eq!(batch.num_columns(), 5);

        let schema = batch.schema();
        let names: Vec<&str> = schema
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect();
        assert_eq!(names, NUMERIC_COLUMNS);
    }

    #[test]
    fn test_numeric_batch_deterministic_per_seed() {
        let a = numeric_batch(20, 2908).unwrap();
        let b = numeric_batch(20, 2908).unwrap();
        assert_eq!(a, b);

        let c = numeric_batch(20, 2909).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_numeric_batch_rejects_oversized_request() {
        let result = numeric_batch(MAX_DATASET_SIZE + 1, 0);
        assert!(matches!(
            result,
            Err(BenchError::DatasetTooLarge { .. })
        ));
    }

    #[test]
    fn test_empty_batch_is_allowed() {
        let batch = numeric_batch(0, 0).unwrap();
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.num_columns(), 5);
    }
}
