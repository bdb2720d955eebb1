//! Emergency call dispatch scenario.
//!
//! Calls are dispatched by urgency (priority, arrival, id) and reported
//! by estimated response time. Each call may carry a tree of nested
//! subtasks that reports flatten with path annotations.

mod handler;
mod report;
mod types;

pub use handler::EmergencyHandler;
pub use report::{build_call_report, CallReport, CallReportEntry};
pub use types::{EmergencyCall, Subtask};
