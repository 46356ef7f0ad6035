//! Exhaustive key search.
//!
//! Every permutation of `1..=n`, for each key length in a range, is tried as a
//! key and the ciphertext decoded under it. Work is split into chunks of
//! consecutive permutation indices; each chunk is decoded in parallel and the
//! caller's [`ProgressCallback`] is consulted between chunks, so a search can
//! be abandoned at any chunk boundary.

pub mod permutations;

use self::permutations::{factorial, Permutations};
use crate::cipher::decode_chars;
use crate::config::Config;
use crate::error::{TrResult, TranspositionError};
use crate::key::ColumnOrder;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::ops::RangeInclusive;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info, warn};

/// Inclusive range of key lengths to try.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyLengthRange {
    pub min: usize,
    pub max: usize,
}

impl KeyLengthRange {
    pub fn new(min: usize, max: usize) -> TrResult<Self> {
        if min == 0 {
            return Err(TranspositionError::InvalidKey(
                "key length must be at least 1".to_string(),
            ));
        }
        if min > max {
            return Err(TranspositionError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn single(length: usize) -> TrResult<Self> {
        Self::new(length, length)
    }

    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResult {
    pub key: Vec<i64>,
    pub key_length: usize,
    pub decoded: String,
}

/// Receives progress between chunks.
/// Returning false aborts the search.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, done: usize, total: usize) -> bool;
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &T {
    fn on_progress(&self, done: usize, total: usize) -> bool {
        (**self).on_progress(done, total)
    }
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _done: usize, _total: usize) -> bool {
        true
    }
}

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl ProgressCallback for StopFlag {
    fn on_progress(&self, _done: usize, _total: usize) -> bool {
        !self.is_stopped()
    }
}

/// Longest key any search accepts, whatever the configured cap.
/// 12! candidates already exceed what a result list can hold.
pub const KEY_LENGTH_LIMIT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BruteForce {
    max_key_length: usize,
    chunk_size: usize,
}

impl From<&Config> for BruteForce {
    fn from(cfg: &Config) -> Self {
        Self::new(cfg.search.max_key_length, cfg.search.chunk_size)
    }
}

impl BruteForce {
    pub fn new(max_key_length: usize, chunk_size: usize) -> Self {
        Self {
            max_key_length,
            chunk_size: chunk_size.max(1),
        }
    }

    /// The configured cap, clamped to [`KEY_LENGTH_LIMIT`].
    pub fn max_key_length(&self) -> usize {
        self.max_key_length.min(KEY_LENGTH_LIMIT)
    }

    /// Number of candidates a search over `range` produces (Σ n!).
    /// Fails before any work if `range` exceeds the cap.
    pub fn candidate_count(&self, range: KeyLengthRange) -> TrResult<usize> {
        let cap = self.max_key_length();
        if range.max > cap {
            warn!("Rejecting key length {} (cap is {})", range.max, cap);
            return Err(TranspositionError::TooExpensive {
                length: range.max,
                cap,
            });
        }

        range.lengths().try_fold(0usize, |acc, n| {
            factorial(n)
                .and_then(|f| acc.checked_add(f))
                .ok_or(TranspositionError::TooExpensive { length: n, cap })
        })
    }

    pub fn run(
        &self,
        cipher_text: &str,
        range: KeyLengthRange,
    ) -> TrResult<Vec<CandidateResult>> {
        self.run_with(cipher_text, range, NoProgress)
    }

    pub fn run_with<CB: ProgressCallback>(
        &self,
        cipher_text: &str,
        range: KeyLengthRange,
        callback: CB,
    ) -> TrResult<Vec<CandidateResult>> {
        let total = self.candidate_count(range)?;
        let chars: Vec<char> = cipher_text.chars().collect();

        info!(
            "Brute-forcing key lengths {}..={} ({} candidates)",
            range.min, range.max, total
        );

        if !callback.on_progress(0, total) {
            warn!("Search cancelled before start");
            return Err(TranspositionError::Cancelled);
        }

        // Reserve one chunk; the rest is allocated as chunks complete.
        let mut results = Vec::with_capacity(total.min(self.chunk_size));
        for n in range.lengths() {
            let count = factorial(n).ok_or(TranspositionError::TooExpensive {
                length: n,
                cap: self.max_key_length(),
            })?;

            let mut start = 0;
            while start < count {
                let end = count.min(start + self.chunk_size);
                let keys: Vec<Vec<i64>> = Permutations::starting_at(n, start)
                    .take(end - start)
                    .collect();

                // Indexed collect keeps permutation order.
                let chunk: Vec<CandidateResult> = keys
                    .into_par_iter()
                    .map(|key| {
                        let decoded = decode_chars(&chars, &ColumnOrder::of_ranks(&key));
                        CandidateResult {
                            key,
                            key_length: n,
                            decoded,
                        }
                    })
                    .collect();
                results.extend(chunk);

                debug!("Length {}: {}/{} permutations", n, end, count);

                if !callback.on_progress(results.len(), total) {
                    warn!(
                        "Search cancelled after {}/{} candidates",
                        results.len(),
                        total
                    );
                    return Err(TranspositionError::Cancelled);
                }
                start = end;
            }
        }

        rank_candidates(&mut results);
        Ok(results)
    }

    /// Runs the search on its own thread. Dropping the handle cancels it.
    pub fn spawn(&self, cipher_text: String, range: KeyLengthRange) -> SearchHandle {
        let flag = StopFlag::new();
        let search = *self;
        let thread_flag = flag.clone();
        let handle = thread::spawn(move || search.run_with(&cipher_text, range, thread_flag));

        SearchHandle {
            flag,
            handle: Some(handle),
        }
    }
}

/// Decoded length descending, then key length ascending, then key ascending.
pub fn rank_candidates(candidates: &mut [CandidateResult]) {
    candidates.sort_by_cached_key(|c| {
        (
            Reverse(c.decoded.chars().count()),
            c.key_length,
            c.key.clone(),
        )
    });
}

/// An in-flight search started with [`BruteForce::spawn`].
pub struct SearchHandle {
    flag: StopFlag,
    handle: Option<JoinHandle<TrResult<Vec<CandidateResult>>>>,
}

impl SearchHandle {
    /// Requests a stop; the search ends at its next chunk boundary.
    pub fn cancel(&self) {
        self.flag.stop();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Waits for the search to end. A panic on the search thread is
    /// re-raised here.
    pub fn join(mut self) -> TrResult<Vec<CandidateResult>> {
        let Some(handle) = self.handle.take() else {
            return Err(TranspositionError::Cancelled);
        };
        match handle.join() {
            Ok(result) => result,
            Err(payload) => {
                error!("Search thread panicked");
                panic::resume_unwind(payload)
            }
        }
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.flag.stop();
        }
    }
}
