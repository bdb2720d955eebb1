//! Binary min-heap priority queue.
//!
//! Unlike `std::collections::BinaryHeap`, the queue takes its ordering
//! from a [`RecordOrder`](crate::ordering::RecordOrder) value rather than
//! from `Ord`, so the heap and the sort engine share one comparator.

mod heap;

pub use heap::{load_batch, PriorityQueue};
