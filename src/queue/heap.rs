//! Array-backed binary heap.
//!
//! # Invariant
//!
//! For every index `i > 0`, `items[(i - 1) / 2] <= items[i]` under the
//! queue's order. Index 0 therefore always holds the minimum.

use crate::error::{DispatchError, Result};
use crate::ordering::{DispatchOrder, RecordOrder};
use crate::record::Dispatchable;

/// A min-heap ordered by `O`.
///
/// # Examples
///
/// ```ignore
/// let mut queue = PriorityQueue::new(DispatchOrder);
/// queue.push(call);
/// let next = queue.extract_min()?;
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, O = DispatchOrder> {
    items: Vec<T>,
    order: O,
}

impl<T, O: RecordOrder<T>> PriorityQueue<T, O> {
    /// Creates an empty queue.
    pub fn new(order: O) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }

    /// Creates an empty queue with room for `capacity` records.
    pub fn with_capacity(order: O, capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Returns the number of queued records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the comparator used by this queue.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Inserts a record. O(log n).
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Returns the minimal record without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes and returns the minimal record, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Removes and returns the minimal record. O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::EmptyQueue`] if the queue is empty.
    pub fn extract_min(&mut self) -> Result<T> {
        self.pop().ok_or(DispatchError::EmptyQueue)
    }

    /// Consumes the queue, returning its records in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop() {
            out.push(item);
        }
        out
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.order.le(&self.items[parent], &self.items[idx]) {
                break;
            }
            self.items.swap(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len && !self.order.le(&self.items[left], &self.items[right]) {
                smallest = right;
            }
            if self.order.le(&self.items[idx], &self.items[smallest]) {
                break;
            }
            self.items.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T, O: RecordOrder<T> + Default> Default for PriorityQueue<T, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<T, O: RecordOrder<T>> Extend<T> for PriorityQueue<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.items.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

/// Bulk-inserts a freshly loaded batch into a dispatch-ordered queue.
///
/// # Errors
///
/// Returns [`DispatchError::AlreadyDispatched`] if any record has
/// already been processed; processed records are never re-queued.
pub fn load_batch<T, I>(records: I) -> Result<PriorityQueue<T, DispatchOrder>>
where
    T: Dispatchable,
    I: IntoIterator<Item = T>,
{
    let records = records.into_iter();
    let mut queue = PriorityQueue::with_capacity(DispatchOrder, records.size_hint().0);
    for record in records {
        if record.is_dispatched() {
            return Err(DispatchError::AlreadyDispatched(record.id().to_string()));
        }
        queue.push(record);
    }
    tracing::debug!(queued = queue.len(), "loaded dispatch batch");
    Ok(queue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Prioritized, Timestamp};
    use chrono::DateTime;

    #[derive(Debug, Clone)]
    struct Job {
        id: String,
        priority: i64,
        ts: i64,
        done: bool,
    }

    impl Prioritized for Job {
        fn id(&self) -> &str {
            &self.id
        }
        fn priority(&self) -> i64 {
            self.priority
        }
        fn timestamp(&self) -> Timestamp {
            DateTime::from_timestamp(self.ts, 0).unwrap()
        }
    }

    impl Dispatchable for Job {
        fn is_dispatched(&self) -> bool {
            self.done
        }
    }

    fn job(id: &str, priority: i64, ts: i64) -> Job {
        Job {
            id: id.to_string(),
            priority,
            ts,
            done: false,
        }
    }

    #[test]
    fn test_extraction_sequence_follows_dispatch_order() {
        let mut queue = load_batch(vec![job("x", 2, 1), job("y", 1, 1), job("z", 1, 0)]).unwrap();

        let ids: Vec<String> = std::iter::from_fn(|| queue.pop()).map(|j| j.id).collect();
        assert_eq!(ids, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_extract_min_empty() {
        let mut queue: PriorityQueue<Job> = PriorityQueue::default();
        assert_eq!(queue.extract_min().unwrap_err(), DispatchError::EmptyQueue);
        assert!(queue.peek().is_none());
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut queue = PriorityQueue::new(DispatchOrder);
        queue.push(job("b", 3, 0));
        queue.push(job("a", 1, 0));

        assert_eq!(queue.peek().unwrap().id, "a");
        assert_eq!(queue.peek().unwrap().id, "a");
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_many_inserts_drain_sorted() {
        let mut queue = PriorityQueue::new(DispatchOrder);
        for i in 0..200i64 {
            queue.push(job(&format!("j{i:03}"), (i * 37) % 11, (i * 13) % 7));
        }

        let drained = queue.into_sorted_vec();
        assert_eq!(drained.len(), 200);
        for pair in drained.windows(2) {
            assert!(DispatchOrder.le(&pair[0], &pair[1]));
        }
    }

    #[test]
    fn test_load_batch_rejects_dispatched() {
        let mut done = job("d", 1, 0);
        done.done = true;

        let err = load_batch(vec![job("a", 1, 0), done]).unwrap_err();
        assert_eq!(err, DispatchError::AlreadyDispatched("d".into()));
    }

    #[test]
    fn test_extend() {
        let mut queue = PriorityQueue::new(DispatchOrder);
        queue.extend(vec![job("b", 2, 0), job("a", 1, 0)]);
        assert_eq!(queue.extract_min().unwrap().id, "a");
        assert_eq!(queue.extract_min().unwrap().id, "b");
        assert!(queue.is_empty());
    }
}
