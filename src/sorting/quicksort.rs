//! Iterative quicksort.
//!
//! # Algorithm
//!
//! 1. Push the full index range `(0, n - 1)` on an explicit stack
//! 2. Pop a range, partition it around its last element (Lomuto)
//! 3. Push the non-trivial left and right sub-ranges
//! 4. Repeat until the stack is empty
//!
//! The explicit stack replaces call-stack recursion, so adversarial
//! input costs O(n²) time but never overflows the thread stack.

use crate::ordering::RecordOrder;

/// Returns a sorted copy of `items`. Not stable.
pub fn quicksort<T: Clone, O: RecordOrder<T> + ?Sized>(items: &[T], order: &O) -> Vec<T> {
    let mut out = items.to_vec();
    if out.len() <= 1 {
        return out;
    }

    let mut stack: Vec<(usize, usize)> = vec![(0, out.len() - 1)];
    while let Some((low, high)) = stack.pop() {
        if low >= high {
            continue;
        }
        let pivot = partition(&mut out, low, high, order);

        if pivot > low + 1 {
            stack.push((low, pivot - 1));
        }
        if pivot + 1 < high {
            stack.push((pivot + 1, high));
        }
    }
    out
}

/// Lomuto partition of `items[low..=high]` around `items[high]`.
///
/// Returns the final pivot index.
fn partition<T, O: RecordOrder<T> + ?Sized>(
    items: &mut [T],
    low: usize,
    high: usize,
    order: &O,
) -> usize {
    let mut store = low;
    for j in low..high {
        if order.le(&items[j], &items[high]) {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, high);
    store
}
