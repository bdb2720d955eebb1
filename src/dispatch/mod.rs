//! Queue draining and per-record processing.
//!
//! [`DispatchEngine`] pops records from a [`PriorityQueue`](crate::queue::PriorityQueue)
//! in order until it is empty. Each record is handed to a
//! [`DispatchHandler`], which applies the scenario's side effect and
//! moves the record from `Queued` to `Dispatched` in one call:
//!
//! - emergency calls are stamped with their dispatch time;
//! - loan requests check out a copy of the requested book if one is
//!   available.
//!
//! A run never aborts part-way and yields both an append-only event log
//! and the full set of processed records.

mod config;
mod engine;
mod types;

pub use config::DispatchConfig;
pub use engine::{DispatchEngine, DispatchRun};
pub use types::{DispatchEvent, DispatchHandler, DispatchOutcome};
