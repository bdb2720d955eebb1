//! Dispatch execution engine.
//!
//! # Algorithm
//!
//! 1. Pop the minimal record from the queue
//! 2. Stamp the dispatch instant from the clock
//! 3. Let the handler apply its side effect and mark the record
//! 4. Append a log event and retain the record
//! 5. Repeat until the queue is empty

use std::time::{Duration, Instant};

use chrono::Utc;

use super::config::DispatchConfig;
use super::types::{DispatchEvent, DispatchHandler, DispatchOutcome};
use crate::error::Result;
use crate::ordering::RecordOrder;
use crate::queue::PriorityQueue;
use crate::record::{Dispatchable, Timestamp};

/// Result of a full drain.
///
/// `log[i]` describes `processed[i]`, so handler-specific payload such as
/// a call's category or location is read from the processed record.
#[derive(Debug, Clone)]
pub struct DispatchRun<T> {
    /// Events in dispatch order.
    pub log: Vec<DispatchEvent>,
    /// Processed records in dispatch order.
    pub processed: Vec<T>,
    /// Records that were already dispatched when popped. They bypass the
    /// handler and the log but are handed back unchanged.
    pub skipped: Vec<T>,
    /// Wall-clock duration of the drain.
    pub elapsed: Duration,
}

impl<T> DispatchRun<T> {
    /// Number of events with the given outcome.
    pub fn count(&self, outcome: DispatchOutcome) -> usize {
        self.log.iter().filter(|e| e.outcome == outcome).count()
    }

    /// Number of records that were served.
    pub fn served(&self) -> usize {
        self.log.iter().filter(|e| e.outcome.is_served()).count()
    }
}

/// Dispatch engine.
pub struct DispatchEngine;

impl DispatchEngine {
    /// Drains `queue` through `handler`, stamping events with `Utc::now`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use u_dispatch::dispatch::{DispatchConfig, DispatchEngine};
    /// use u_dispatch::emergency::{EmergencyCall, EmergencyHandler};
    /// use u_dispatch::queue::load_batch;
    ///
    /// let calls: Vec<EmergencyCall> = Vec::new();
    /// let queue = load_batch(calls).unwrap();
    /// let run = DispatchEngine::run(queue, &mut EmergencyHandler, &DispatchConfig::default()).unwrap();
    /// assert!(run.processed.is_empty());
    /// ```
    pub fn run<T, O, H>(
        queue: PriorityQueue<T, O>,
        handler: &mut H,
        config: &DispatchConfig,
    ) -> Result<DispatchRun<T>>
    where
        T: Dispatchable,
        O: RecordOrder<T>,
        H: DispatchHandler<T>,
    {
        Self::run_with_clock(queue, handler, config, Utc::now)
    }

    /// Drains `queue` through `handler`, stamping events with `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidConfig`](crate::DispatchError::InvalidConfig)
    /// if `config` fails validation. Once draining starts it runs to
    /// completion.
    pub fn run_with_clock<T, O, H, C>(
        mut queue: PriorityQueue<T, O>,
        handler: &mut H,
        config: &DispatchConfig,
        mut clock: C,
    ) -> Result<DispatchRun<T>>
    where
        T: Dispatchable,
        O: RecordOrder<T>,
        H: DispatchHandler<T>,
        C: FnMut() -> Timestamp,
    {
        config.validate()?;

        let start = Instant::now();
        let total = queue.len();
        let mut log = Vec::with_capacity(total);
        let mut processed = Vec::with_capacity(total);
        let mut skipped = Vec::new();

        tracing::info!(handler = handler.name(), queued = total, "starting dispatch");

        while let Some(mut record) = queue.pop() {
            if record.is_dispatched() {
                tracing::warn!(id = record.id(), "skipping record that was already dispatched");
                skipped.push(record);
                continue;
            }

            let at = clock();
            let outcome = handler.dispatch(&mut record, at);
            tracing::trace!(
                id = record.id(),
                priority = record.priority(),
                outcome = %outcome,
                "dispatched record"
            );

            log.push(DispatchEvent {
                sequence: log.len(),
                id: record.id().to_string(),
                priority: record.priority(),
                dispatched_at: at,
                outcome,
            });
            processed.push(record);

            if processed.len() % config.progress_interval == 0 {
                tracing::debug!(
                    processed = processed.len(),
                    remaining = queue.len(),
                    "dispatch progress"
                );
            }
        }

        let run = DispatchRun {
            log,
            processed,
            skipped,
            elapsed: start.elapsed(),
        };

        tracing::info!(
            handler = handler.name(),
            processed = run.processed.len(),
            served = run.served(),
            skipped = run.skipped.len(),
            elapsed_ms = run.elapsed.as_millis() as u64,
            "dispatch complete"
        );

        Ok(run)
    }
}
