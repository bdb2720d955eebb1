//! Dispatch side effect for emergency calls.

use super::types::EmergencyCall;
use crate::dispatch::{DispatchHandler, DispatchOutcome};
use crate::record::Timestamp;

/// Stamps each call with its dispatch instant.
///
/// Calls compete for no shared resource, so every call is dispatched.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmergencyHandler;

impl DispatchHandler<EmergencyCall> for EmergencyHandler {
    fn name(&self) -> &str {
        "emergency"
    }

    fn dispatch(&mut self, call: &mut EmergencyCall, at: Timestamp) -> DispatchOutcome {
        call.dispatched_at = Some(at);
        tracing::debug!(
            id = %call.id,
            priority = call.priority,
            category = %call.category,
            location = %call.location,
            "dispatched emergency call"
        );
        DispatchOutcome::Dispatched
    }
}
