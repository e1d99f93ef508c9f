// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::toasts;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The text field changed.
    DraftChanged(String),
    /// Show the current draft once.
    ShowRequested,
    /// Show the current draft several times without waiting in between.
    BurstRequested,
    Toasts(toasts::Message),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Force reduced motion regardless of settings and environment.
    pub reduced_motion: bool,
}
