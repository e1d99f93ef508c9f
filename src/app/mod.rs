// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single toast queue.
//!
//! The `App` struct wires the toast queue into the Iced update loop: it
//! forwards toast messages, maps the settlement tasks returned by `show`, and
//! logs the lifecycle events the queue reports.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::ui::theming::ThemeMode;
use crate::ui::toasts::{self, MotionMode, ToastQueue};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Number of toasts shown by the burst action.
pub const BURST_SIZE: usize = 3;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;

/// Root Iced application state.
pub struct App {
    draft: String,
    toasts: ToastQueue,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("draft", &self.draft)
            .field("active_toasts", &self.toasts.len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            draft: String::from("Saved"),
            toasts: ToastQueue::new(),
            theme_mode: ThemeMode::System,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and builds the toast queue from them.
    ///
    /// A settings file that cannot be read is reported as the first toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let mut toasts = ToastQueue::from_config(&config.toasts);
        if flags.reduced_motion {
            toasts = toasts.with_motion(MotionMode::Reduced);
        }

        let mut app = App {
            toasts,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        let task = match config_warning {
            Some(warning) => app.show(warning),
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        match self.toasts.len() {
            0 => String::from("Toasts"),
            n => format!("Toasts ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DraftChanged(draft) => {
                self.draft = draft;
                Task::none()
            }
            Message::ShowRequested => self.show(self.draft.clone()),
            Message::BurstRequested => {
                let tasks: Vec<Task<Message>> = (0..BURST_SIZE)
                    .map(|_| self.show(self.draft.clone()))
                    .collect();
                Task::batch(tasks)
            }
            Message::Toasts(message) => {
                let (event, task) = self.toasts.update(message);
                log_event(&event);
                task.map(Message::Toasts)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            draft: &self.draft,
            toasts: &self.toasts,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toasts)
    }

    fn show(&mut self, text: String) -> Task<Message> {
        let (event, task) = self.toasts.show(text);
        log_event(&event);
        task.map(Message::Toasts)
    }
}

fn log_event(event: &toasts::Event) {
    match event {
        toasts::Event::None => {}
        toasts::Event::Added { id } => tracing::info!(%id, "toast-added"),
        toasts::Event::Removed { id } => tracing::info!(%id, "toast-removed"),
        toasts::Event::Stuck { id, error } => tracing::warn!(%id, %error, "toast stuck"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toasts::Phase;
    use std::time::Instant;

    fn reduced_app() -> App {
        App {
            toasts: ToastQueue::new().with_motion(MotionMode::Reduced),
            ..App::default()
        }
    }

    #[test]
    fn title_counts_active_toasts() {
        let mut app = reduced_app();
        assert_eq!(app.title(), "Toasts");

        let _ = app.update(Message::ShowRequested);
        assert_eq!(app.title(), "Toasts (1)");
    }

    #[test]
    fn draft_changes_are_stored() {
        let mut app = reduced_app();
        let _ = app.update(Message::DraftChanged("Copied".into()));
        let _ = app.update(Message::ShowRequested);

        let shown: Vec<&str> = app.toasts.iter().map(|t| t.message()).collect();
        assert_eq!(shown, vec!["Copied"]);
    }

    #[test]
    fn burst_shows_identical_toasts_with_distinct_ids() {
        let mut app = reduced_app();
        let _ = app.update(Message::BurstRequested);

        let ids: Vec<_> = app.toasts.iter().map(|t| t.id()).collect();
        assert_eq!(ids.len(), BURST_SIZE);
        assert!(ids.windows(2).all(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn toast_messages_are_forwarded_to_the_queue() {
        let mut app = reduced_app();
        let _ = app.update(Message::ShowRequested);
        let id = app.toasts.iter().next().map(|t| t.id()).expect("toast shown");

        let _ = app.update(Message::Toasts(toasts::Message::Tick(Instant::now())));
        assert_eq!(app.toasts.phase(id), Some(Phase::Settled));

        let _ = app.update(Message::Toasts(toasts::Message::Settled { id, outcome: Ok(()) }));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn theme_follows_mode() {
        let app = App {
            theme_mode: ThemeMode::Light,
            ..reduced_app()
        };
        assert_eq!(app.theme(), Theme::Light);
    }
}
