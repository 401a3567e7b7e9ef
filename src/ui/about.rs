// SPDX-License-Identifier: MPL-2.0
//! About screen with application information and the license notice.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{button, scrollable, text, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToGallery,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    BackToGallery,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToGallery => Event::BackToGallery,
    }
}

/// Render the about screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("about-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToGallery);

    let title = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG))
        .push(Text::new(format!("v{APP_VERSION}")).size(typography::BODY));

    let description = Text::new(ctx.i18n.tr("about-description")).size(typography::BODY);
    let license = Text::new(ctx.i18n.tr("about-license-notice")).size(typography::CAPTION);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::LG)
        .push(back_button)
        .push(title)
        .push(description)
        .push(license);

    scrollable(content).into()
}
