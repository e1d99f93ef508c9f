// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! A [`Toast`] is immutable once created. Everything that changes over its
//! lifetime (render state, running transition) lives in the queue and is
//! described by [`Phase`].

use std::fmt;
use std::time::Instant;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// A short-lived, non-interactive status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
}

impl Toast {
    /// Creates a toast with a fresh ID. Any text is accepted, including
    /// empty or whitespace-only strings.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Presentation state of an active toast.
///
/// `Created -> Displayed -> (Animating)? -> Settled`, after which the toast
/// is removed from the queue. A removed toast has no phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Appended to the queue, not yet rendered.
    Created,
    /// Rendered at least once; no transition decided yet.
    Displayed,
    /// Rendered with a transition that started at the given instant.
    Animating { started: Instant },
    /// Presentation finished; waiting for the queue to drop it.
    Settled,
}

impl Phase {
    /// Whether the presentation still needs animation ticks.
    #[must_use]
    pub fn is_pending(self) -> bool {
        !matches!(self, Phase::Settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let t1 = Toast::new("test");
        let t2 = Toast::new("test");
        assert_ne!(t1.id(), t2.id());
    }

    #[test]
    fn message_is_kept_verbatim() {
        assert_eq!(Toast::new("   ").message(), "   ");
        assert_eq!(Toast::new("").message(), "");
        assert_eq!(Toast::new(String::from("Saved")).message(), "Saved");
    }

    #[test]
    fn display_uses_toast_prefix() {
        let id = ToastId::new();
        assert!(id.to_string().starts_with("toast-"));
    }

    #[test]
    fn only_settled_phase_is_not_pending() {
        assert!(Phase::Created.is_pending());
        assert!(Phase::Displayed.is_pending());
        assert!(Phase::Animating {
            started: Instant::now()
        }
        .is_pending());
        assert!(!Phase::Settled.is_pending());
    }
}
