// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown at the top of the gallery screen.
//!
//! A slim toolbar with the application title on the left and a button
//! opening the about screen on the right.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenAbout,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenAbout => Event::OpenAbout,
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE);

    let about_button = button(Text::new(ctx.i18n.tr("navbar-about-button")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::navbar())
        .on_press(Message::OpenAbout);

    let bar = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(about_button);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::toolbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_button_raises_open_about() {
        assert_eq!(update(&Message::OpenAbout), Event::OpenAbout);
    }
}
