//! Priority dispatch and report sorting over prioritized records.
//!
//! Provides the processing core of a batch dispatch pipeline:
//!
//! - **Ordering**: total-order comparators shared by every stage:
//!   dispatch order (priority, arrival, id) and report order (a domain
//!   sort key first).
//! - **Queue**: binary min-heap driven by a comparator object.
//! - **Dispatch**: drains the queue, applying a per-record side effect
//!   (timestamp stamping, or claiming a unit of a shared counter) and
//!   accumulating an event log.
//! - **Sorting**: iterative quicksort, recursive mergesort and the
//!   standard stable sort behind one timed interface, so their output
//!   and performance can be compared.
//! - **Traversal**: pre-order flattening of nested subtasks and
//!   depth-bounded, cycle-safe reachability over link graphs.
//!
//! Two scenarios are built on the core: [`emergency`] (call dispatch)
//! and [`library`] (loan requests against a book catalog).
//!
//! # Pipeline
//!
//! ```
//! use u_dispatch::dispatch::{DispatchConfig, DispatchEngine};
//! use u_dispatch::emergency::{build_call_report, EmergencyHandler};
//! use u_dispatch::queue::load_batch;
//! use u_dispatch::sorting::{ReportConfig, SortAlgorithm};
//! use u_dispatch::workload::WorkloadConfig;
//!
//! let calls = WorkloadConfig::default().with_seed(42).calls(100);
//! let queue = load_batch(calls).unwrap();
//! let run = DispatchEngine::run(queue, &mut EmergencyHandler, &DispatchConfig::default()).unwrap();
//!
//! let config = ReportConfig::default().with_algorithm(SortAlgorithm::Mergesort);
//! let report = build_call_report(&run.processed, &config);
//! assert_eq!(report.entries.len(), 100);
//! ```
//!
//! I/O, parsing and console formatting are left to callers; the crate
//! consumes in-memory records and returns in-memory results. Enable the
//! `serde` feature to serialize them.

pub mod dispatch;
pub mod emergency;
mod error;
pub mod library;
pub mod ordering;
pub mod queue;
pub mod record;
pub mod sorting;
pub mod traversal;
pub mod workload;

pub use error::{DispatchError, Result};
