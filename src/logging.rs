// SPDX-License-Identifier: MPL-2.0
//! Diagnostic output.
//!
//! Library code only emits `tracing` events. The binary installs a formatter
//! filtered by `RUST_LOG`, falling back to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "iced_toasts=info";

/// Installs the global subscriber. Later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
