//! Software hash-rate benchmark.
//!
//! Hashes a deterministic test pattern a fixed number of times and reports
//! hash rate and throughput from wall-clock time. The hash is called as an
//! opaque pure function; workers share nothing but the config.

use core::{fmt, hint::black_box, time::Duration};
use std::{thread, time::Instant};

use tracing::{debug, info};

use crate::{Digest, Error, sha3_256};

/// Message size used by the reference run.
pub const DEFAULT_DATA_SIZE: usize = 850;

/// Hash count used by the reference run.
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

/// Benchmark parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Bytes hashed per call.
    pub data_size: usize,
    /// Total number of hashes across all workers.
    pub iterations: u64,
    /// Worker threads; iterations are split as evenly as possible.
    pub threads: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_size: DEFAULT_DATA_SIZE,
            iterations: DEFAULT_ITERATIONS,
            threads: 1,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.iterations == 0 {
            return Err(Error::InvalidConfig {
                field: "iterations",
                reason: "must be at least 1",
            });
        }
        if self.threads == 0 {
            return Err(Error::InvalidConfig {
                field: "threads",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Header printed before the timed loop.
    pub fn banner(&self) -> String {
        let rule = "=".repeat(40);
        format!(
            "{rule}\nSHA3-256 Software Benchmark\n{rule}\n\
             Data size: {} bytes\n\
             Number of hashes: {}\n\
             Threads: {}\n\
             Starting benchmark...\n",
            self.data_size, self.iterations, self.threads
        )
    }

    /// Hash count for worker `index`; the first `iterations % threads`
    /// workers take one extra.
    fn share(&self, index: usize) -> u64 {
        let threads = self.threads as u64;
        let base = self.iterations / threads;
        base + u64::from((index as u64) < self.iterations % threads)
    }
}

/// Outcome of one [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchReport {
    pub data_size: usize,
    pub iterations: u64,
    pub threads: usize,
    pub elapsed: Duration,
    /// Digest of the test pattern, identical for every iteration.
    pub final_digest: Digest,
}

impl BenchReport {
    /// Millions of hashes per second.
    pub fn hash_rate_mhs(&self) -> f64 {
        self.iterations as f64 / self.secs() / 1e6
    }

    /// MiB hashed per second.
    pub fn throughput_mibs(&self) -> f64 {
        (self.data_size as f64 * self.iterations as f64) / self.secs() / (1024.0 * 1024.0)
    }

    /// Average wall time per hash in microseconds.
    pub fn avg_hash_micros(&self) -> f64 {
        self.secs() * 1e6 / self.iterations as f64
    }

    fn secs(&self) -> f64 {
        // Clamp so a sub-resolution run never divides by zero.
        self.elapsed.as_secs_f64().max(f64::MIN_POSITIVE)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elapsed time: {:.3} seconds", self.elapsed.as_secs_f64())?;
        writeln!(f, "Hash rate: {:.3} MH/s", self.hash_rate_mhs())?;
        writeln!(f, "Throughput: {:.3} MB/s", self.throughput_mibs())?;
        writeln!(f, "Average time per hash: {:.3} µs", self.avg_hash_micros())?;
        writeln!(f)?;
        write!(f, "Final hash: {}", self.final_digest)
    }
}

/// Byte `i` is `i & 0xFF`.
pub fn test_pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i & 0xFF) as u8).collect()
}

fn hash_loop(input: &[u8], count: u64) -> Option<Digest> {
    let mut last = None;
    for _ in 0..count {
        last = Some(sha3_256(black_box(input)));
    }
    last
}

/// Run the benchmark described by `config`.
pub fn run(config: &BenchConfig) -> Result<BenchReport, Error> {
    config.validate()?;
    let pattern = test_pattern(config.data_size);
    info!(
        data_size = config.data_size,
        iterations = config.iterations,
        threads = config.threads,
        "starting SHA3-256 benchmark"
    );

    let start = Instant::now();
    let digests: Vec<Option<Digest>> = if config.threads == 1 {
        vec![hash_loop(&pattern, config.iterations)]
    } else {
        thread::scope(|s| {
            let workers: Vec<_> = (0..config.threads)
                .map(|index| {
                    let buf = pattern.clone();
                    let count = config.share(index);
                    s.spawn(move || {
                        debug!(worker = index, count, "worker started");
                        hash_loop(&buf, count)
                    })
                })
                .collect();
            workers
                .into_iter()
                .map(|w| w.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        })
    };
    let elapsed = start.elapsed();

    let final_digest = sha3_256(&pattern);
    debug_assert!(digests.iter().flatten().all(|d| *d == final_digest));

    let report = BenchReport {
        data_size: config.data_size,
        iterations: config.iterations,
        threads: config.threads,
        elapsed,
        final_digest,
    };
    info!(
        elapsed_ms = elapsed.as_millis() as u64,
        hash_rate_mhs = report.hash_rate_mhs(),
        throughput_mibs = report.throughput_mibs(),
        "benchmark finished"
    );
    Ok(report)
}
