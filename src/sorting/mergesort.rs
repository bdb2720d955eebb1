//! Top-down merge sort.
//!
//! Splits at `n / 2`, sorts each half recursively, then merges with a
//! single scratch buffer holding the left run. Ties take the left run
//! first, which makes the sort stable. Recursion depth is ⌈log₂ n⌉.

use crate::ordering::RecordOrder;

/// Returns a stably sorted copy of `items`.
pub fn mergesort<T: Clone, O: RecordOrder<T> + ?Sized>(items: &[T], order: &O) -> Vec<T> {
    let mut out = items.to_vec();
    let mut scratch = Vec::with_capacity(out.len() / 2 + 1);
    sort_run(&mut out, &mut scratch, order);
    out
}

fn sort_run<T: Clone, O: RecordOrder<T> + ?Sized>(items: &mut [T], scratch: &mut Vec<T>, order: &O) {
    let n = items.len();
    if n <= 1 {
        return;
    }
    let mid = n / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        sort_run(left, scratch, order);
        sort_run(right, scratch, order);
    }
    // Runs already in order.
    if order.le(&items[mid - 1], &items[mid]) {
        return;
    }
    merge(items, mid, scratch, order);
}

/// Merges the sorted runs `items[..mid]` and `items[mid..]` in place.
///
/// The left run is copied into `scratch`; slots `items[k..j]` are free
/// while merging, so right-run elements are swapped down into them.
fn merge<T: Clone, O: RecordOrder<T> + ?Sized>(
    items: &mut [T],
    mid: usize,
    scratch: &mut Vec<T>,
    order: &O,
) {
    scratch.clear();
    scratch.extend_from_slice(&items[..mid]);

    let n = items.len();
    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < scratch.len() && j < n {
        if order.le(&scratch[i], &items[j]) {
            std::mem::swap(&mut items[k], &mut scratch[i]);
            i += 1;
        } else {
            items.swap(k, j);
            j += 1;
        }
        k += 1;
    }
    while i < scratch.len() {
        std::mem::swap(&mut items[k], &mut scratch[i]);
        i += 1;
        k += 1;
    }
}
