//! Port for structured refinement logging.
//!
//! Defines the [`RefinementLogger`] trait for recording refinement events
//! (refinements, comparisons) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures a machine-readable
//! record of every refinement (JSONL).

use serde_json::Value;

/// A structured refinement event for logging.
pub struct RefinementEvent {
    /// Event type identifier (e.g., "prompt_refined", "prompts_compared").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl RefinementEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging refinement events to a structured log.
///
/// `log` is synchronous and never fails; write errors are swallowed by the
/// implementation so logging can never break a refinement.
pub trait RefinementLogger: Send + Sync {
    fn log(&self, event: RefinementEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoRefinementLogger;

impl RefinementLogger for NoRefinementLogger {
    fn log(&self, _event: RefinementEvent) {}
}
