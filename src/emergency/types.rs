//! Emergency call records.

use crate::record::{Dispatchable, Prioritized, ReportKeyed, Timestamp};
use crate::traversal::{flatten_tree, FlatSubtask, TaskNode};

/// A nested unit of work attached to a call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subtask {
    pub kind: String,
    pub estimated_resource: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtasks: Vec<Subtask>,
}

impl Subtask {
    pub fn new(kind: impl Into<String>, estimated_resource: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            estimated_resource: estimated_resource.into(),
            subtasks: Vec::new(),
        }
    }

    pub fn with_subtask(mut self, subtask: Subtask) -> Self {
        self.subtasks.push(subtask);
        self
    }
}

impl TaskNode for Subtask {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn estimated_resource(&self) -> &str {
        &self.estimated_resource
    }

    fn children(&self) -> &[Subtask] {
        &self.subtasks
    }
}

/// An incoming emergency call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmergencyCall {
    pub id: String,
    pub timestamp: Timestamp,
    /// Lower is more urgent.
    pub priority: i64,
    pub category: String,
    pub location: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtasks: Vec<Subtask>,
    /// Estimated response time in minutes; the report sort key.
    #[cfg_attr(feature = "serde", serde(default))]
    pub estimated_response_time: i64,
    /// Set once by the dispatch engine.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dispatched_at: Option<Timestamp>,
}

impl EmergencyCall {
    pub fn new(id: impl Into<String>, priority: i64, timestamp: Timestamp) -> Self {
        Self {
            id: id.into(),
            timestamp,
            priority,
            category: String::new(),
            location: String::new(),
            description: String::new(),
            subtasks: Vec::new(),
            estimated_response_time: 0,
            dispatched_at: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_response_time(mut self, minutes: i64) -> Self {
        self.estimated_response_time = minutes;
        self
    }

    pub fn with_subtask(mut self, subtask: Subtask) -> Self {
        self.subtasks.push(subtask);
        self
    }

    /// Pre-order flattening of this call's subtask tree.
    pub fn flatten_subtasks(&self) -> Vec<FlatSubtask> {
        flatten_tree(&self.subtasks)
    }
}

impl Prioritized for EmergencyCall {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i64 {
        self.priority
    }

    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl ReportKeyed for EmergencyCall {
    fn sort_key(&self) -> i64 {
        self.estimated_response_time
    }
}

impl Dispatchable for EmergencyCall {
    fn is_dispatched(&self) -> bool {
        self.dispatched_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_flatten_subtasks() {
        let call = EmergencyCall::new("C1", 1, DateTime::from_timestamp(0, 0).unwrap())
            .with_subtask(
                Subtask::new("medical", "ambulance")
                    .with_subtask(Subtask::new("transport", "stretcher")),
            )
            .with_subtask(Subtask::new("traffic", "patrol"));

        let flat = call.flatten_subtasks();
        let paths: Vec<&str> = flat.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["0", "0/0", "1"]);
        assert_eq!(flat[1].estimated_resource, "stretcher");
    }

    #[test]
    fn test_no_subtasks() {
        let call = EmergencyCall::new("C2", 3, DateTime::from_timestamp(0, 0).unwrap());
        assert!(call.flatten_subtasks().is_empty());
        assert!(!call.is_dispatched());
    }
}
