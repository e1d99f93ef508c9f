// SPDX-License-Identifier: MPL-2.0
//! Entrance/exit transition for toasts.
//!
//! A transition is a fixed timeline: fade and slide in over `enter`, stay
//! fully visible for `hold`, then fade and slide out over `exit`. The queue
//! samples it on every tick; nothing here keeps time on its own.

use crate::config::{DEFAULT_ENTER_MS, DEFAULT_EXIT_MS, DEFAULT_HOLD_MS};
use std::time::Duration;

/// Vertical distance a toast travels while entering or leaving, in pixels.
pub const OFFSET_PX: f32 = 12.0;

/// Visual state of a toast at one point of its transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f32,
    /// Downward shift from the resting position, in pixels.
    pub offset: f32,
}

impl Frame {
    /// Frame used when no transition is attached.
    pub const STATIC: Frame = Frame {
        opacity: 1.0,
        offset: 0.0,
    };

    /// First frame of the entrance, and last frame of the exit.
    pub const HIDDEN: Frame = Frame {
        opacity: 0.0,
        offset: OFFSET_PX,
    };

    fn at(progress: f32) -> Self {
        let eased = ease_out_cubic(progress);
        Self {
            opacity: eased,
            offset: OFFSET_PX * (1.0 - eased),
        }
    }
}

/// Timeline of a toast's transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub enter: Duration,
    pub hold: Duration,
    pub exit: Duration,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(DEFAULT_ENTER_MS),
            hold: Duration::from_millis(DEFAULT_HOLD_MS),
            exit: Duration::from_millis(DEFAULT_EXIT_MS),
        }
    }
}

impl Transition {
    #[must_use]
    pub fn new(enter: Duration, hold: Duration, exit: Duration) -> Self {
        Self { enter, hold, exit }
    }

    /// Total length of the timeline.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.enter + self.hold + self.exit
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }

    /// Returns the frame to draw `elapsed` after the transition started.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Frame {
        let shown = self.enter + self.hold;

        if elapsed < self.enter {
            Frame::at(ratio(elapsed, self.enter))
        } else if elapsed < shown {
            Frame::STATIC
        } else {
            Frame::at(1.0 - ratio(elapsed - shown, self.exit))
        }
    }
}

fn ratio(part: Duration, whole: Duration) -> f32 {
    if whole.is_zero() {
        return 1.0;
    }
    (part.as_secs_f32() / whole.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn transition() -> Transition {
        Transition::new(ms(100), ms(1000), ms(100))
    }

    #[test]
    fn total_sums_all_stages() {
        assert_eq!(transition().total(), ms(1200));
    }

    #[test]
    fn entrance_starts_hidden() {
        assert_eq!(transition().sample(Duration::ZERO), Frame::HIDDEN);
    }

    #[test]
    fn hold_is_fully_visible() {
        assert_eq!(transition().sample(ms(100)), Frame::STATIC);
        assert_eq!(transition().sample(ms(700)), Frame::STATIC);
    }

    #[test]
    fn entrance_is_monotonic() {
        let t = transition();
        let early = t.sample(ms(20));
        let late = t.sample(ms(80));
        assert!(early.opacity < late.opacity);
        assert!(early.offset > late.offset);
    }

    #[test]
    fn exit_fades_out() {
        let t = transition();
        let mid = t.sample(ms(1150));
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert_eq!(t.sample(ms(1200)), Frame::HIDDEN);
        assert_eq!(t.sample(ms(5000)), Frame::HIDDEN);
    }

    #[test]
    fn finishes_at_total() {
        let t = transition();
        assert!(!t.is_finished(ms(1199)));
        assert!(t.is_finished(ms(1200)));
    }

    #[test]
    fn zero_length_transition_is_finished_immediately() {
        let t = Transition::new(Duration::ZERO, Duration::ZERO, Duration::ZERO);
        assert!(t.is_finished(Duration::ZERO));
        assert_eq!(t.sample(Duration::ZERO), Frame::HIDDEN);
    }
}
