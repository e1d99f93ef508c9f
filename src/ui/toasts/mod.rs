// SPDX-License-Identifier: MPL-2.0
//! Toast notifications that remove themselves.
//!
//! Toasts are short, non-interactive status messages. Each one is shown,
//! optionally animated in and out, and dropped from the queue as soon as its
//! presentation is over. Nothing has to dismiss them.
//!
//! # Components
//!
//! - [`toast`] - `Toast`, `ToastId` and the per-toast `Phase`
//! - [`queue`] - `ToastQueue`, the lifecycle owner
//! - [`settlement`] - the render/transition rendezvous behind `show`
//! - [`animation`] - entrance/hold/exit timeline
//! - [`motion`] - reduced-motion preference
//! - [`view`] - rendering of status regions
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::toasts::{self, ToastQueue};
//!
//! let mut queue = ToastQueue::new();
//!
//! // In update: show a message and forward the settlement task.
//! let (event, task) = queue.show("Image saved");
//! let task = task.map(Message::Toasts);
//!
//! // In update: feed toast messages back.
//! let (event, task) = queue.update(message);
//!
//! // In subscription and view:
//! queue.subscription().map(Message::Toasts);
//! toasts::view(&queue).map(Message::Toasts);
//! ```
//!
//! # Lifecycle
//!
//! `Created -> Displayed -> (Animating)? -> Settled -> removed`. With reduced
//! motion no transition is attached and a toast settles on the first tick
//! after it was rendered.

pub mod animation;
pub mod motion;
pub mod queue;
pub mod settlement;
pub mod toast;
mod view;

pub use animation::{Frame, Transition};
pub use motion::{MotionMode, MotionPreference};
pub use queue::{settled, Event, FailurePolicy, Message, Role, StatusRegion, ToastQueue};
pub use settlement::{Settlement, SettlementError};
pub use toast::{Phase, Toast, ToastId};
pub use view::view;
