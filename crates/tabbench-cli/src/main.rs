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

//! tabbench command line interface.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use tabbench_core::{numeric_batch, Result};
use tabbench_formats::Format;
use tabbench_harness::BenchmarkSuite;

/// Benchmark write time, read time, and file size of tabular file formats.
///
/// Generates a seeded synthetic dataset of five float columns, serializes
/// it through every requested format, and reports raw repeated-trial
/// measurements as a table or as JSON.
///
/// # Examples
///
/// ```bash
/// # Full default run: 1M rows, 3 repeats, every format
/// tabbench
///
/// # Quick comparison of the columnar formats
/// tabbench --rows 100000 --formats feather,parquet,orc
///
/// # Machine-readable output
/// tabbench --rows 10000 --json
/// ```
#[derive(Parser)]
#[command(name = "tabbench")]
#[command(author, version, about = "Tabular file format benchmarks", long_about = None)]
struct Cli {
    /// Number of dataset rows to generate.
    #[arg(long, default_value_t = 1_000_000)]
    rows: usize,

    /// RNG seed for dataset generation.
    #[arg(long, default_value_t = 2908)]
    seed: u64,

    /// Timed repetitions per write and per read.
    #[arg(long, default_value_t = 3)]
    repeats: u32,

    /// Directory holding the benchmark files, created if missing.
    #[arg(long, default_value = ".cache")]
    out_dir: PathBuf,

    /// Benchmark file name prefix.
    #[arg(long, default_value = "benchmark")]
    prefix: String,

    /// Comma-separated subset of formats to run (default: all).
    #[arg(long, value_delimiter = ',')]
    formats: Vec<Format>,

    /// Emit results as pretty-printed JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> Result<()> {
    if !cli.json {
        println!(
            "{} {} rows, seed {}, {} repeats",
            "Benchmarking:".bold(),
            cli.rows,
            cli.seed,
            cli.repeats
        );
    }

    let dataset = numeric_batch(cli.rows, cli.seed)?;

    let mut suite = BenchmarkSuite::new(dataset, cli.out_dir, cli.prefix, cli.repeats)?;
    if !cli.formats.is_empty() {
        suite = suite.with_formats(cli.formats);
    }

    let results = suite.results()?;
    if cli.json {
        println!("{}", results.to_json()?);
    } else {
        println!();
        print!("{}", results);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
