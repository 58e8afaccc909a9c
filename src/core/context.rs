//! Per-request execution context.
//!
//! An [`ExecutionContext`] is created fresh for each request and passed to
//! the tool handler. It carries a request id for log correlation and an
//! advisory deadline (analogous to a serverless runtime's
//! remaining-time-in-millis). The deadline is never enforced by the
//! framework: a handler that wants to honor it must self-check.

use std::time::{Duration, Instant};

use uuid::Uuid;

/// Short-lived, per-request context exposed to tool handlers.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    request_id: String,
    started: Instant,
    deadline: Option<Instant>,
}

impl ExecutionContext {
    /// Create a context with a fresh request id and an optional advisory
    /// time budget.
    pub fn new(budget: Option<Duration>) -> Self {
        Self::with_request_id(Uuid::new_v4().to_string(), budget)
    }

    /// Create a context with an explicit request id.
    pub fn with_request_id(request_id: impl Into<String>, budget: Option<Duration>) -> Self {
        let started = Instant::now();
        Self {
            request_id: request_id.into(),
            started,
            deadline: budget.map(|b| started + b),
        }
    }

    /// Identifier correlating this request across log lines.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Time spent on this request so far.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Milliseconds left in the advisory budget, if one was configured.
    pub fn remaining_time_millis(&self) -> Option<u64> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()).as_millis() as u64)
    }

    /// True once the advisory budget is exhausted.
    pub fn is_expired(&self) -> bool {
        self.remaining_time_millis() == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_budget_never_expires() {
        let ctx = ExecutionContext::new(None);
        assert_eq!(ctx.remaining_time_millis(), None);
        assert!(!ctx.is_expired());
    }

    #[test]
    fn test_zero_budget_is_expired() {
        let ctx = ExecutionContext::new(Some(Duration::ZERO));
        assert!(ctx.is_expired());
    }

    #[test]
    fn test_generous_budget_not_expired() {
        let ctx = ExecutionContext::new(Some(Duration::from_secs(60)));
        assert!(!ctx.is_expired());
        assert!(ctx.remaining_time_millis().unwrap() > 0);
    }

    #[test]
    fn test_request_ids_are_unique() {
        let a = ExecutionContext::new(None);
        let b = ExecutionContext::new(None);
        assert_ne!(a.request_id(), b.request_id());
        assert!(!a.request_id().is_empty());
    }
}
