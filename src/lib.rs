// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` provides self-removing toast notifications for the Iced GUI
//! framework.
//!
//! Toasts are shown through a [`ui::toasts::ToastQueue`], animate in and out
//! unless the user prefers reduced motion, and leave the queue on their own
//! once their presentation is over. A small demo application lives in
//! [`app`].

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
