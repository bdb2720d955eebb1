//! Record comparators.
//!
//! Every ordering decision in the crate, whether a heap sift or a sort
//! partition, goes through a [`RecordOrder`]. Using the same comparator
//! object in the queue and the sort engine keeps the two phases
//! consistent:
//!
//! - **Dispatch order** ([`DispatchOrder`]): priority, then timestamp,
//!   then id. Used to drain the priority queue.
//! - **Report order** ([`ReportOrder`]): sort key, then the dispatch
//!   order fields. Used to sort processed records for reports.
//!
//! Scenario-specific orders (e.g. the library catalog order) implement
//! the same trait next to their record types.

mod comparator;

pub use comparator::{DispatchOrder, RecordOrder, ReportOrder};
