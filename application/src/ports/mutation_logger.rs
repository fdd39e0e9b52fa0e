//! Port for structured mutation logging.
//!
//! Defines the [`MutationLogger`] trait for recording roster mutations
//! (doctor writes, specialty count changes, administrative edits) to an
//! append-only audit trail.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures every completed
//! mutation in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured mutation event for logging.
pub struct MutationEvent {
    /// Event type identifier (e.g., "doctor_added", "specialty_decremented").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl MutationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging mutation events.
///
/// `log` is synchronous and infallible so that a broken audit trail never
/// fails a store mutation that already happened.
pub trait MutationLogger: Send + Sync {
    fn log(&self, event: MutationEvent);
}

/// No-op implementation for tests and when audit logging is disabled.
pub struct NoMutationLogger;

impl MutationLogger for NoMutationLogger {
    fn log(&self, _event: MutationEvent) {}
}
