// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Transition**: Toast entrance/exit durations
//! - **Hold**: How long a toast stays fully visible

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default entrance duration (in milliseconds).
pub const DEFAULT_ENTER_MS: u64 = 250;

/// Default exit duration (in milliseconds).
pub const DEFAULT_EXIT_MS: u64 = 250;

/// Minimum entrance/exit duration. Zero disables that half of the transition.
pub const MIN_TRANSITION_MS: u64 = 0;

/// Maximum entrance/exit duration.
pub const MAX_TRANSITION_MS: u64 = 2_000;

// ==========================================================================
// Hold Defaults
// ==========================================================================

/// Default time a toast stays fully visible (in milliseconds).
pub const DEFAULT_HOLD_MS: u64 = 3_000;

/// Minimum hold time.
pub const MIN_HOLD_MS: u64 = 500;

/// Maximum hold time.
pub const MAX_HOLD_MS: u64 = 30_000;

const _: () = {
    assert!(DEFAULT_ENTER_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_EXIT_MS <= MAX_TRANSITION_MS);
    assert!(MIN_HOLD_MS <= DEFAULT_HOLD_MS && DEFAULT_HOLD_MS <= MAX_HOLD_MS);
};
