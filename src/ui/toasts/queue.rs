// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastQueue` owns the ordered list of active toasts. Showing a toast
//! appends it and hands back a task that resolves once the toast has been
//! rendered and its transition has finished; feeding that result back through
//! [`ToastQueue::update`] removes it.
//!
//! The list is never edited in place. Every add and remove installs a new
//! shared slice, so two snapshots compare unequal by pointer whenever the
//! contents changed.

use super::animation::{Frame, Transition};
use super::motion::{MotionMode, MotionPreference};
use super::settlement::{self, Settlement, SettlementError, Signals};
use super::toast::{Phase, Toast, ToastId};
use crate::config::ToastConfig;
use iced::{time, Subscription, Task};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Interval between animation ticks while any toast is being presented.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation clock.
    Tick(Instant),
    /// The settlement wait of a toast finished.
    Settled {
        id: ToastId,
        outcome: Result<(), SettlementError>,
    },
}

/// Lifecycle notifications for the host application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Added { id: ToastId },
    Removed { id: ToastId },
    /// The settlement failed and the toast was kept on screen.
    Stuck { id: ToastId, error: SettlementError },
}

/// What to do with a toast whose settlement wait failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure and remove the toast anyway.
    #[default]
    Remove,
    /// Log the failure and leave the toast in the queue.
    Retain,
}

/// Accessibility role of a rendered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Passive, announced without taking focus.
    Status,
}

/// Render description of one active toast.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRegion {
    pub role: Role,
    pub key: ToastId,
    pub text: String,
    pub frame: Frame,
}

#[derive(Debug)]
struct Presentation {
    phase: Phase,
    signals: Signals,
}

/// Ordered list of active toasts and their presentation state.
pub struct ToastQueue {
    toasts: Arc<[Toast]>,
    revision: u64,
    presentations: HashMap<ToastId, Presentation>,
    transition: Transition,
    motion: Box<dyn MotionPreference>,
    failure_policy: FailurePolicy,
    last_tick: Option<Instant>,
}

impl fmt::Debug for ToastQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastQueue")
            .field("toasts", &self.toasts)
            .field("revision", &self.revision)
            .field("transition", &self.transition)
            .field("failure_policy", &self.failure_policy)
            .finish_non_exhaustive()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self {
            toasts: Arc::from(Vec::new()),
            revision: 0,
            presentations: HashMap::new(),
            transition: Transition::default(),
            motion: Box::new(MotionMode::System),
            failure_policy: FailurePolicy::default(),
            last_tick: None,
        }
    }
}

impl ToastQueue {
    /// Creates an empty queue that follows the system motion preference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue from the `[toasts]` settings section.
    #[must_use]
    pub fn from_config(config: &ToastConfig) -> Self {
        Self::new()
            .with_transition(config.transition())
            .with_motion(config.motion.unwrap_or_default())
            .with_failure_policy(config.on_failure.unwrap_or_default())
    }

    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    #[must_use]
    pub fn with_motion(mut self, motion: impl MotionPreference + 'static) -> Self {
        self.motion = Box::new(motion);
        self
    }

    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Shows a message.
    ///
    /// The toast is in the queue and `Event::Added` is returned before this
    /// call returns. The task completes with `Message::Settled` once the
    /// toast has been rendered and its transition has finished; pass it back
    /// to [`ToastQueue::update`] to remove the toast.
    pub fn show(&mut self, message: impl Into<String>) -> (Event, Task<Message>) {
        let (event, settlement) = self.push(message);
        (event, Task::future(settled(settlement)))
    }

    /// Appends a toast and returns the raw settlement instead of a task.
    ///
    /// Useful for hosts that drive the wait themselves. The caller must still
    /// report the outcome through [`ToastQueue::settle`].
    pub fn push(&mut self, message: impl Into<String>) -> (Event, Settlement) {
        let toast = Toast::new(message);
        let id = toast.id();
        let (signals, settlement) = settlement::channel(id);

        let toasts = self.toasts.iter().cloned().chain(std::iter::once(toast)).collect();
        self.replace(toasts);
        self.presentations.insert(
            id,
            Presentation {
                phase: Phase::Created,
                signals,
            },
        );

        tracing::debug!(%id, active = self.toasts.len(), "toast added");
        (Event::Added { id }, settlement)
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::Tick(now) => {
                self.tick(now);
                (Event::None, Task::none())
            }
            Message::Settled { id, outcome } => (self.settle(id, outcome), Task::none()),
        }
    }

    /// Advances every pending presentation to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.last_tick = Some(now);
        let reduced = self.motion.prefers_reduced_motion();

        for (id, presentation) in &mut self.presentations {
            advance(*id, presentation, now, reduced, &self.transition);
        }
    }

    /// Applies the outcome of a settlement wait.
    ///
    /// Removal happens at most once: outcomes for toasts that are no longer
    /// active yield `Event::None`.
    pub fn settle(&mut self, id: ToastId, outcome: Result<(), SettlementError>) -> Event {
        if !self.contains(id) {
            return Event::None;
        }

        match outcome {
            Ok(()) => {
                self.remove(id);
                Event::Removed { id }
            }
            Err(error) => {
                tracing::error!(%id, %error, "toast presentation failed");
                match self.failure_policy {
                    FailurePolicy::Remove => {
                        self.remove(id);
                        Event::Removed { id }
                    }
                    FailurePolicy::Retain => Event::Stuck { id, error },
                }
            }
        }
    }

    /// Stops tracking the presentation of a toast.
    ///
    /// Its pending signals are dropped, so its settlement wait fails. The
    /// toast itself stays in the queue until that failure is settled.
    /// Returns `false` if the toast had no pending presentation.
    pub fn abort(&mut self, id: ToastId) -> bool {
        let aborted = self.presentations.remove(&id).is_some();
        if aborted {
            tracing::debug!(%id, "toast presentation aborted");
        }
        aborted
    }

    /// Emits animation ticks while any toast still needs them.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_pending() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Describes what should be on screen, in queue order.
    ///
    /// The motion preference is read on every call.
    #[must_use]
    pub fn regions(&self) -> Vec<StatusRegion> {
        let reduced = self.motion.prefers_reduced_motion();

        self.toasts
            .iter()
            .map(|toast| StatusRegion {
                role: Role::Status,
                key: toast.id(),
                text: toast.message().to_owned(),
                frame: if reduced {
                    Frame::STATIC
                } else {
                    self.frame_of(toast.id())
                },
            })
            .collect()
    }

    /// Returns the current list. The pointer changes on every add and remove.
    #[must_use]
    pub fn snapshot(&self) -> Arc<[Toast]> {
        Arc::clone(&self.toasts)
    }

    /// Number of list replacements so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.iter().any(|toast| toast.id() == id)
    }

    /// Presentation phase of an active toast, if it is still tracked.
    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<Phase> {
        self.presentations.get(&id).map(|p| p.phase)
    }

    /// Whether any toast still waits on rendering or its transition.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.presentations.values().any(|p| p.phase.is_pending())
    }

    fn frame_of(&self, id: ToastId) -> Frame {
        match self.phase(id) {
            // Reduced motion never gets here, so a settled toast has faded out.
            Some(Phase::Created | Phase::Displayed | Phase::Settled) => Frame::HIDDEN,
            Some(Phase::Animating { started }) => {
                let now = self.last_tick.unwrap_or(started);
                self.transition.sample(now.saturating_duration_since(started))
            }
            None => Frame::STATIC,
        }
    }

    fn remove(&mut self, id: ToastId) {
        let toasts = self
            .toasts
            .iter()
            .filter(|toast| toast.id() != id)
            .cloned()
            .collect();
        self.replace(toasts);
        self.presentations.remove(&id);
        tracing::debug!(%id, active = self.toasts.len(), "toast removed");
    }

    fn replace(&mut self, toasts: Arc<[Toast]>) {
        self.toasts = toasts;
        self.revision += 1;
    }
}

/// Waits on a settlement and wraps its outcome for [`ToastQueue::update`].
///
/// This is the future behind the task returned by [`ToastQueue::show`].
pub async fn settled(settlement: Settlement) -> Message {
    let id = settlement.id();
    Message::Settled {
        id,
        outcome: settlement.wait().await,
    }
}

fn advance(
    id: ToastId,
    presentation: &mut Presentation,
    now: Instant,
    reduced: bool,
    transition: &Transition,
) {
    if presentation.phase == Phase::Created {
        presentation.signals.rendered();
        presentation.phase = Phase::Displayed;
        tracing::trace!(%id, "toast displayed");
    }

    match presentation.phase {
        Phase::Displayed if reduced => finish(id, presentation),
        Phase::Displayed => {
            presentation.phase = Phase::Animating { started: now };
            tracing::trace!(%id, "toast transition started");
        }
        Phase::Animating { .. } if reduced => finish(id, presentation),
        Phase::Animating { started } => {
            if transition.is_finished(now.saturating_duration_since(started)) {
                finish(id, presentation);
            }
        }
        Phase::Created | Phase::Settled => {}
    }
}

fn finish(id: ToastId, presentation: &mut Presentation) {
    presentation.signals.settled();
    presentation.phase = Phase::Settled;
    tracing::trace!(%id, "toast presentation settled");
}
