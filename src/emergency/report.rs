//! Sorted dispatch report for emergency calls.

use std::time::Duration;

use super::types::EmergencyCall;
use crate::ordering::ReportOrder;
use crate::record::Timestamp;
use crate::sorting::{ReportConfig, SortAlgorithm, SortEngine};
use crate::traversal::FlatSubtask;

/// One dispatched call as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallReportEntry {
    pub id: String,
    pub priority: i64,
    pub timestamp: Timestamp,
    pub estimated_response_time: i64,
    pub category: String,
    pub location: String,
    pub description: String,
    pub subtasks: Vec<FlatSubtask>,
    pub total_subtasks: usize,
    pub dispatched_at: Option<Timestamp>,
}

impl CallReportEntry {
    fn from_call(call: &EmergencyCall) -> Self {
        let subtasks = call.flatten_subtasks();
        Self {
            id: call.id.clone(),
            priority: call.priority,
            timestamp: call.timestamp,
            estimated_response_time: call.estimated_response_time,
            category: call.category.clone(),
            location: call.location.clone(),
            description: call.description.clone(),
            total_subtasks: subtasks.len(),
            subtasks,
            dispatched_at: call.dispatched_at,
        }
    }
}

/// Calls in report order, with the time spent sorting them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CallReport {
    pub algorithm: SortAlgorithm,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub sort_time: Duration,
    pub entries: Vec<CallReportEntry>,
}

/// Sorts processed calls in report order and expands their subtasks.
///
/// Only the sort itself is timed. `processed` is borrowed, so building
/// several reports with different algorithms never disturbs it.
pub fn build_call_report(processed: &[EmergencyCall], config: &ReportConfig) -> CallReport {
    let outcome = SortEngine::sort(processed, config.algorithm, &ReportOrder);
    let limit = config.limit.unwrap_or(outcome.records.len());

    let entries: Vec<CallReportEntry> = outcome
        .records
        .iter()
        .take(limit)
        .map(CallReportEntry::from_call)
        .collect();

    tracing::info!(
        algorithm = %outcome.algorithm,
        entries = entries.len(),
        sort_us = outcome.elapsed.as_micros() as u64,
        "built call report"
    );

    CallReport {
        algorithm: outcome.algorithm,
        sort_time: outcome.elapsed,
        entries,
    }
}
