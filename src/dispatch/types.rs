//! Dispatch events and the handler trait.

use std::fmt;

use crate::record::Timestamp;

/// Result of processing one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DispatchOutcome {
    /// Dispatched with no shared resource involved.
    Dispatched,
    /// A shared resource was available and has been claimed.
    Success,
    /// The requested resource had no remaining availability.
    NoAvailability,
}

impl DispatchOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchOutcome::Dispatched => "dispatched",
            DispatchOutcome::Success => "success",
            DispatchOutcome::NoAvailability => "no_availability",
        }
    }

    /// Whether the record was served.
    pub fn is_served(self) -> bool {
        !matches!(self, DispatchOutcome::NoAvailability)
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the dispatch log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchEvent {
    /// Position in the drain, starting at 0.
    pub sequence: usize,
    pub id: String,
    pub priority: i64,
    pub dispatched_at: Timestamp,
    pub outcome: DispatchOutcome,
}

/// Applies a scenario's side effect to a dequeued record.
///
/// `dispatch` is called exactly once per record and must perform both
/// the side effect and the record's state transition, so no other code
/// can observe one without the other.
///
/// # Examples
///
/// ```ignore
/// struct StampOnly;
///
/// impl DispatchHandler<EmergencyCall> for StampOnly {
///     fn name(&self) -> &str { "stamp" }
///     fn dispatch(&mut self, call: &mut EmergencyCall, at: Timestamp) -> DispatchOutcome {
///         call.dispatched_at = Some(at);
///         DispatchOutcome::Dispatched
///     }
/// }
/// ```
pub trait DispatchHandler<T> {
    /// Returns the name of this handler.
    fn name(&self) -> &str;

    /// Processes `record` at instant `at`.
    fn dispatch(&mut self, record: &mut T, at: Timestamp) -> DispatchOutcome;
}
