//! Timed sort execution.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::mergesort::mergesort;
use super::quicksort::quicksort;
use super::types::SortAlgorithm;
use crate::error::Result;
use crate::ordering::RecordOrder;

/// Result of a single timed sort.
#[derive(Debug, Clone)]
pub struct SortOutcome<T> {
    /// Sorted copy of the input.
    pub records: Vec<T>,
    /// Algorithm that produced `records`.
    pub algorithm: SortAlgorithm,
    /// Wall-clock time spent sorting (excluding the input copy).
    pub elapsed: Duration,
}

/// Side-by-side run of every algorithm on the same input.
#[derive(Debug, Clone)]
pub struct SortComparison<T> {
    /// One outcome per algorithm, in [`SortAlgorithm::ALL`] order.
    pub outcomes: Vec<SortOutcome<T>>,
    /// Whether all outcomes are element-for-element equal under the order.
    pub consistent: bool,
}

impl<T> SortComparison<T> {
    /// Returns the outcome for `algorithm`.
    pub fn get(&self, algorithm: SortAlgorithm) -> Option<&SortOutcome<T>> {
        self.outcomes.iter().find(|o| o.algorithm == algorithm)
    }

    /// Returns the outcome with the smallest elapsed time.
    pub fn fastest(&self) -> Option<&SortOutcome<T>> {
        self.outcomes.iter().min_by_key(|o| o.elapsed)
    }
}

/// Runs the report sorters.
///
/// # Examples
///
/// ```ignore
/// let outcome = SortEngine::sort_by_name(&processed, "mergesort", &ReportOrder)?;
/// println!("{} in {:?}", outcome.algorithm, outcome.elapsed);
/// ```
pub struct SortEngine;

impl SortEngine {
    /// Sorts a copy of `records` with `algorithm`, timing the sort.
    ///
    /// The caller's slice is never mutated.
    pub fn sort<T, O>(records: &[T], algorithm: SortAlgorithm, order: &O) -> SortOutcome<T>
    where
        T: Clone,
        O: RecordOrder<T> + ?Sized,
    {
        let start = Instant::now();
        let sorted = match algorithm {
            SortAlgorithm::Quicksort => quicksort(records, order),
            SortAlgorithm::Mergesort => mergesort(records, order),
            SortAlgorithm::Baseline => {
                let mut copy = records.to_vec();
                copy.sort_by(|a, b| order.compare(a, b));
                copy
            }
        };
        let elapsed = start.elapsed();

        tracing::debug!(
            algorithm = %algorithm,
            order = order.name(),
            records = sorted.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "sorted records"
        );

        SortOutcome {
            records: sorted,
            algorithm,
            elapsed,
        }
    }

    /// Sorts with an algorithm selected by name.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedAlgorithm`](crate::DispatchError::UnsupportedAlgorithm)
    /// for names other than `quicksort`, `mergesort`, `baseline` (or its
    /// alias `timsort`).
    pub fn sort_by_name<T, O>(records: &[T], name: &str, order: &O) -> Result<SortOutcome<T>>
    where
        T: Clone,
        O: RecordOrder<T> + ?Sized,
    {
        let algorithm: SortAlgorithm = name.parse()?;
        Ok(Self::sort(records, algorithm, order))
    }

    /// Runs every algorithm on its own copy of `records`.
    ///
    /// With the `parallel` feature the runs execute concurrently; they
    /// never share a buffer.
    #[cfg(not(feature = "parallel"))]
    pub fn compare_all<T, O>(records: &[T], order: &O) -> SortComparison<T>
    where
        T: Clone,
        O: RecordOrder<T>,
    {
        let outcomes = SortAlgorithm::ALL
            .iter()
            .map(|&alg| Self::sort(records, alg, order))
            .collect();
        Self::summarize(outcomes, order)
    }

    /// Runs every algorithm on its own copy of `records`.
    ///
    /// With the `parallel` feature the runs execute concurrently; they
    /// never share a buffer.
    #[cfg(feature = "parallel")]
    pub fn compare_all<T, O>(records: &[T], order: &O) -> SortComparison<T>
    where
        T: Clone + Send + Sync,
        O: RecordOrder<T>,
    {
        let outcomes = SortAlgorithm::ALL[..]
            .par_iter()
            .map(|&alg| Self::sort(records, alg, order))
            .collect();
        Self::summarize(outcomes, order)
    }

    fn summarize<T, O: RecordOrder<T>>(outcomes: Vec<SortOutcome<T>>, order: &O) -> SortComparison<T> {
        let consistent = match outcomes.split_first() {
            Some((first, rest)) => rest.iter().all(|other| {
                other.records.len() == first.records.len()
                    && other
                        .records
                        .iter()
                        .zip(&first.records)
                        .all(|(a, b)| order.compare(a, b) == Ordering::Equal)
            }),
            None => true,
        };
        if !consistent {
            tracing::warn!(order = order.name(), "sort algorithms disagree on output order");
        }
        SortComparison {
            outcomes,
            consistent,
        }
    }
}
