// SPDX-License-Identifier: MPL-2.0
//! Rendezvous between showing a toast and its presentation finishing.
//!
//! Each toast gets a pair of one-shot channels. The queue keeps the sending
//! halves ([`Signals`]) and fires them as the toast is rendered and as its
//! transition completes. The caller of `show` holds the [`Settlement`] and
//! awaits both, in order. Dropping the signals without firing them makes the
//! wait fail instead of hanging.

use super::toast::ToastId;
use thiserror::Error;
use tokio::sync::oneshot;

/// Why a settlement wait failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// The toast was detached before it was ever rendered.
    #[error("{id} was never rendered")]
    NeverRendered { id: ToastId },
    /// The toast was rendered but its transition never completed.
    #[error("transition of {id} was aborted")]
    AnimationAborted { id: ToastId },
}

impl SettlementError {
    #[must_use]
    pub fn id(&self) -> ToastId {
        match self {
            SettlementError::NeverRendered { id } | SettlementError::AnimationAborted { id } => *id,
        }
    }
}

/// Sending half, owned by the queue.
#[derive(Debug)]
pub(crate) struct Signals {
    rendered: Option<oneshot::Sender<()>>,
    settled: Option<oneshot::Sender<()>>,
}

impl Signals {
    /// Fires the render-settled signal. Later calls are no-ops.
    pub(crate) fn rendered(&mut self) {
        if let Some(tx) = self.rendered.take() {
            // The receiver may already be gone if the caller dropped its wait.
            let _ = tx.send(());
        }
    }

    /// Fires the animation-settled signal. Later calls are no-ops.
    pub(crate) fn settled(&mut self) {
        if let Some(tx) = self.settled.take() {
            let _ = tx.send(());
        }
    }
}

/// Receiving half, handed to whoever called `show`.
#[derive(Debug)]
pub struct Settlement {
    id: ToastId,
    rendered: oneshot::Receiver<()>,
    settled: oneshot::Receiver<()>,
}

impl Settlement {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Waits for the toast to be rendered, then for its transition to finish.
    ///
    /// # Errors
    ///
    /// Fails if the queue stops tracking the toast before either signal fires.
    pub async fn wait(self) -> Result<(), SettlementError> {
        let id = self.id;
        self.rendered
            .await
            .map_err(|_| SettlementError::NeverRendered { id })?;
        self.settled
            .await
            .map_err(|_| SettlementError::AnimationAborted { id })
    }
}

pub(crate) fn channel(id: ToastId) -> (Signals, Settlement) {
    let (rendered_tx, rendered_rx) = oneshot::channel();
    let (settled_tx, settled_rx) = oneshot::channel();
    (
        Signals {
            rendered: Some(rendered_tx),
            settled: Some(settled_tx),
        },
        Settlement {
            id,
            rendered: rendered_rx,
            settled: settled_rx,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn wait_resolves_after_both_signals() {
        let id = ToastId::new();
        let (mut signals, settlement) = channel(id);
        signals.rendered();
        signals.settled();
        assert_eq!(settlement.wait().await, Ok(()));
    }

    #[tokio::test]
    async fn signals_can_fire_twice_without_effect() {
        let (mut signals, settlement) = channel(ToastId::new());
        signals.rendered();
        signals.rendered();
        signals.settled();
        signals.settled();
        assert!(settlement.wait().await.is_ok());
    }

    #[tokio::test]
    async fn dropping_before_render_reports_never_rendered() {
        let id = ToastId::new();
        let (signals, settlement) = channel(id);
        drop(signals);
        assert_eq!(
            settlement.wait().await,
            Err(SettlementError::NeverRendered { id })
        );
    }

    #[tokio::test]
    async fn dropping_after_render_reports_aborted_animation() {
        let id = ToastId::new();
        let (mut signals, settlement) = channel(id);
        signals.rendered();
        drop(signals);
        let err = settlement.wait().await.unwrap_err();
        assert_eq!(err, SettlementError::AnimationAborted { id });
        assert_eq!(err.id(), id);
    }

    #[tokio::test]
    async fn wait_suspends_until_settled_fires() {
        let (mut signals, settlement) = channel(ToastId::new());
        signals.rendered();
        let handle = tokio::spawn(settlement.wait());
        tokio::task::yield_now().await;
        assert!(!handle.is_finished());
        signals.settled();
        assert_eq!(handle.await.expect("task panicked"), Ok(()));
    }
}
