// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`toasts`] - Toast queue, lifecycle and rendering
//! - [`design_tokens`] - Design system constants (spacing, sizing, typography)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod theming;
pub mod toasts;
