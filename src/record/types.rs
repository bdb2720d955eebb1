//! Core traits for prioritized records.

use chrono::{DateTime, Utc};

/// Instant used for record arrival and dispatch stamps.
pub type Timestamp = DateTime<Utc>;

/// A record that can be ordered for dispatch.
///
/// Lower `priority` values are served first (consistent with the
/// minimization convention used throughout the crate). `timestamp` and
/// `id` act as successive tie-breakers, so `id` must be unique within a
/// batch for the dispatch order to be total.
pub trait Prioritized {
    /// Unique identifier within one load batch.
    fn id(&self) -> &str;

    /// Dispatch priority. Lower is more urgent.
    fn priority(&self) -> i64;

    /// Arrival instant.
    fn timestamp(&self) -> Timestamp;
}

/// A record carrying a report-specific primary sort key.
///
/// The key is distinct from the dispatch priority: an emergency call is
/// dispatched by urgency but reported by estimated response time.
pub trait ReportKeyed: Prioritized {
    /// Primary key for report ordering.
    fn sort_key(&self) -> i64;
}

/// A record with a one-way `Queued -> Dispatched` transition.
pub trait Dispatchable: Prioritized {
    /// Whether the record has already been processed.
    fn is_dispatched(&self) -> bool;
}
