//! Evaluation Ordering Guard
//!
//! Form inputs fire evaluations faster than the oracle settles, and a
//! verdict computed from superseded input must not overwrite a newer
//! one. Each evaluation takes a ticket; only the latest ticket may
//! commit its result.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request sequence for in-flight evaluations
#[derive(Debug, Default)]
pub struct EvalSequence {
    latest: AtomicU64,
}

/// Ticket identifying one evaluation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalTicket(u64);

impl EvalSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, superseding all earlier ones
    pub fn begin(&self) -> EvalTicket {
        EvalTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether a ticket still identifies the newest request
    pub fn is_current(&self, ticket: EvalTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Keep a result only if it belongs to the newest request
    pub fn accept<T>(&self, ticket: EvalTicket, result: T) -> Option<T> {
        self.is_current(ticket).then_some(result)
    }
}
