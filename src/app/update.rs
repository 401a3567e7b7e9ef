// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::Task;
use std::time::Instant;

/// Routes a top-level message to the owning component and applies the
/// resulting screen changes.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(msg) => app.gallery.handle_message(msg).map(Message::Gallery),
        Message::Navbar(msg) => match navbar::update(&msg) {
            NavbarEvent::OpenAbout => switch_screen(app, Screen::About),
        },
        Message::About(msg) => match about::update(&msg) {
            AboutEvent::BackToGallery => switch_screen(app, Screen::Gallery),
        },
    }
}

fn switch_screen(app: &mut App, screen: Screen) -> Task<Message> {
    app.screen = screen;
    if screen == Screen::Gallery {
        // No-op after the first activation; the entrance animation does
        // not replay when returning from the about screen.
        app.gallery.activate(Instant::now());
    }
    Task::none()
}
