// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Both subscriptions are scoped: the keyboard listener exists only while
//! the lightbox is open, and the animation tick only while a tween is in
//! flight. The rest of the time the application sleeps between user
//! events.

use super::{App, Message, Screen};
use crate::ui::gallery::component;
use iced::{event, keyboard, time, Subscription};
use std::time::{Duration, Instant};

/// Interval between animation frames.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = Vec::new();

    if wants_keyboard(app) {
        subscriptions.push(event::listen_with(|event, status, window_id| {
            if status == event::Status::Captured {
                return None;
            }
            if let event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) = &event {
                return Some(Message::Gallery(component::Message::RawEvent {
                    window: window_id,
                    event,
                }));
            }
            None
        }));
    }

    if wants_tick(app, Instant::now()) {
        subscriptions.push(
            time::every(TICK_INTERVAL)
                .map(|instant| Message::Gallery(component::Message::Tick(instant))),
        );
    }

    Subscription::batch(subscriptions)
}

/// The keyboard listener exists only while the gallery screen shows an
/// open lightbox.
fn wants_keyboard(app: &App) -> bool {
    app.screen == Screen::Gallery && app.gallery.is_lightbox_open()
}

/// The animation tick exists only while a tween is in flight on the
/// gallery screen.
fn wants_tick(app: &App, now: Instant) -> bool {
    app.screen == Screen::Gallery && app.gallery.is_animating(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::config::Config;
    use crate::ui::gallery::component::LIGHTBOX_FADE_DURATION;
    use iced::keyboard;
    use std::fs;
    use tempfile::tempdir;

    fn app_with_photos(count: usize, reveal: bool) -> App {
        let dir = tempdir().unwrap();
        for i in 0..count {
            fs::write(dir.path().join(format!("photo_{i}.jpg")), b"fake").unwrap();
        }
        let flags = Flags {
            lang: None,
            source: Some(dir.path().display().to_string()),
        };
        let config = Config {
            reveal_animation: Some(reveal),
            ..Config::default()
        };
        App::with_config(flags, config).0
    }

    #[test]
    fn keyboard_listener_exists_only_while_lightbox_open() {
        let mut app = app_with_photos(2, false);
        assert!(!wants_keyboard(&app));

        app.gallery.open_lightbox(0, Instant::now());
        assert!(wants_keyboard(&app));

        // Leaving the gallery screen drops the listener too.
        app.screen = Screen::About;
        assert!(!wants_keyboard(&app));
        app.screen = Screen::Gallery;
        assert!(wants_keyboard(&app));

        app.gallery
            .on_key_pressed(&keyboard::Key::Named(keyboard::key::Named::Escape));
        assert!(!wants_keyboard(&app));
    }

    #[test]
    fn tick_exists_only_while_a_tween_runs() {
        let mut app = app_with_photos(1, false);
        let opened = Instant::now();
        assert!(!wants_tick(&app, opened));

        app.gallery.open_lightbox(0, opened);
        assert!(wants_tick(&app, opened));
        assert!(!wants_tick(&app, opened + LIGHTBOX_FADE_DURATION));
    }
}
