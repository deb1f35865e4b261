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

//! Wall-clock sampling of repeated operations.
//!
//! Every repeat is a fresh, independent invocation: no warm-up exclusion,
//! no outlier trimming. The harness reports raw repeated-trial data and
//! leaves statistical treatment to the caller.

use std::time::Instant;

use crate::error::Result;

/// Runs `op` `repeats` times, timing each call, and returns one duration
/// sample in seconds per call.
///
/// The first error from `op` aborts sampling and propagates; samples from
/// earlier successful calls are discarded with it.
///
/// # Examples
///
/// ```
/// use tabbench_core::measure::sample;
///
/// let samples = sample(3, || Ok(())).unwrap();
/// assert_eq!(samples.len(), 3);
/// ```
pub fn sample<F>(repeats: u32, mut op: F) -> Result<Vec<f64>>
where
    F: FnMut() -> Result<()>,
{
    let mut samples = Vec::with_capacity(repeats as usize);
    for _ in 0..repeats {
        let start = Instant::now();
        op()?;
        samples.push(start.elapsed().as_secs_f64());
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_sample_count_contract() {
        let samples = sample(5, || Ok(())).unwrap();
        assert_eq!(samples.len(), 5);
    }

    #[test]
    fn test_sample_measures_elapsed_time() {
        let samples = sample(2, || {
            thread::sleep(Duration::from_millis(5));
            Ok(())
        })
        .unwrap();

        assert_eq!(samples.len(), 2);
        for s in samples {
            assert!(s >= 0.005);
        }
    }

    #[test]
    fn test_sample_propagates_first_error() {
        let mut calls = 0;
        let result = sample(4, || {
            calls += 1;
            if calls == 2 {
                Err(BenchError::encode("csv", "boom"))
            } else {
                Ok(())
            }
        });

        assert!(result.is_err());
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_zero_repeats_yields_no_samples() {
        let samples = sample(0, || Ok(())).unwrap();
        assert!(samples.is_empty());
    }
}
