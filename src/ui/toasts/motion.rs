// SPDX-License-Identifier: MPL-2.0
//! Reduced-motion preference.
//!
//! The queue asks this before attaching a transition and every time it
//! renders. Answers are never cached, so a change in the environment takes
//! effect on the next tick.

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`MotionMode::System`].
pub const ENV_REDUCED_MOTION: &str = "ICED_TOASTS_REDUCED_MOTION";

/// Source of the user's reduced-motion preference.
pub trait MotionPreference {
    fn prefers_reduced_motion(&self) -> bool;
}

/// Configured motion behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionMode {
    /// Follow the environment.
    #[default]
    System,
    /// Never animate.
    Reduced,
    /// Always animate.
    Full,
}

impl MotionPreference for MotionMode {
    fn prefers_reduced_motion(&self) -> bool {
        match self {
            MotionMode::Reduced => true,
            MotionMode::Full => false,
            MotionMode::System => std::env::var(ENV_REDUCED_MOTION)
                .map(|value| is_reduce_flag(&value))
                .unwrap_or(false),
        }
    }
}

impl<F> MotionPreference for F
where
    F: Fn() -> bool,
{
    fn prefers_reduced_motion(&self) -> bool {
        self()
    }
}

fn is_reduce_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "reduce"
    )
}
