//! Comparator trait and the two generic record orders.

use std::cmp::Ordering;

use crate::record::{Prioritized, ReportKeyed};

/// A total order over records of type `T`.
///
/// Implementations must be irreflexive and transitive, and must only
/// return [`Ordering::Equal`] for records that agree on every key,
/// including the identifier.
///
/// # Examples
///
/// ```ignore
/// struct ByTitle;
///
/// impl RecordOrder<Book> for ByTitle {
///     fn name(&self) -> &str { "title" }
///     fn compare(&self, a: &Book, b: &Book) -> Ordering {
///         a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id))
///     }
/// }
/// ```
pub trait RecordOrder<T>: Send + Sync {
    /// Returns the name of this order.
    fn name(&self) -> &str;

    /// Compares two records.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` sorts before or together with `b`.
    fn le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}

/// Priority ascending, then timestamp ascending, then id ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOrder;

impl<T: Prioritized> RecordOrder<T> for DispatchOrder {
    fn name(&self) -> &str {
        "dispatch"
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.priority()
            .cmp(&b.priority())
            .then_with(|| a.timestamp().cmp(&b.timestamp()))
            .then_with(|| a.id().cmp(b.id()))
    }
}

/// Sort key ascending, then falls back to [`DispatchOrder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOrder;

impl<T: ReportKeyed> RecordOrder<T> for ReportOrder {
    fn name(&self) -> &str {
        "report"
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.sort_key()
            .cmp(&b.sort_key())
            .then_with(|| DispatchOrder.compare(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Timestamp;
    use chrono::DateTime;

    struct Rec {
        id: &'static str,
        priority: i64,
        ts: i64,
        key: i64,
    }

    impl Prioritized for Rec {
        fn id(&self) -> &str {
            self.id
        }
        fn priority(&self) -> i64 {
            self.priority
        }
        fn timestamp(&self) -> Timestamp {
            DateTime::from_timestamp(self.ts, 0).unwrap()
        }
    }

    impl ReportKeyed for Rec {
        fn sort_key(&self) -> i64 {
            self.key
        }
    }

    fn rec(id: &'static str, priority: i64, ts: i64, key: i64) -> Rec {
        Rec {
            id,
            priority,
            ts,
            key,
        }
    }

    #[test]
    fn test_dispatch_priority_first() {
        let a = rec("a", 1, 100, 0);
        let b = rec("b", 2, 0, 0);
        assert_eq!(DispatchOrder.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_dispatch_timestamp_breaks_priority_tie() {
        let a = rec("a", 1, 5, 0);
        let b = rec("b", 1, 3, 0);
        assert_eq!(DispatchOrder.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_dispatch_id_is_last_resort() {
        let a = rec("a", 1, 3, 0);
        let b = rec("b", 1, 3, 0);
        assert_eq!(DispatchOrder.compare(&a, &b), Ordering::Less);
        assert_eq!(DispatchOrder.compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_report_key_overrides_priority() {
        let urgent_slow = rec("a", 1, 0, 30);
        let minor_fast = rec("b", 5, 0, 10);
        assert_eq!(DispatchOrder.compare(&urgent_slow, &minor_fast), Ordering::Less);
        assert_eq!(ReportOrder.compare(&urgent_slow, &minor_fast), Ordering::Greater);
    }

    #[test]
    fn test_report_falls_back_to_dispatch_order() {
        let a = rec("a", 2, 0, 10);
        let b = rec("b", 1, 0, 10);
        assert_eq!(ReportOrder.compare(&a, &b), Ordering::Greater);
        assert!(ReportOrder.le(&b, &a));
    }

    #[test]
    fn test_order_names() {
        assert_eq!(RecordOrder::<Rec>::name(&DispatchOrder), "dispatch");
        assert_eq!(RecordOrder::<Rec>::name(&ReportOrder), "report");
    }
}
