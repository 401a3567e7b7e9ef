// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message, Screen};
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    match app.screen {
        Screen::Gallery => view_gallery(app),
        Screen::About => {
            about::view(AboutViewContext { i18n: &app.i18n }).map(Message::About)
        }
    }
}

fn view_gallery(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext { i18n: &app.i18n }).map(Message::Navbar);

    let content: Element<'_, Message> =
        if app.gallery.collection().is_empty() && app.collection_error.is_some() {
            collection_error_view(app)
        } else {
            app.gallery
                .view(&app.i18n, app.grid_columns)
                .map(Message::Gallery)
        };

    let base = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar)
        .push(content);

    // The lightbox covers the whole window, navbar included.
    match app.gallery.view_lightbox(&app.i18n) {
        Some(lightbox) => Stack::new()
            .push(base)
            .push(lightbox.map(Message::Gallery))
            .into(),
        None => base.into(),
    }
}

fn collection_error_view(app: &App) -> Element<'_, Message> {
    let title = Text::new(app.i18n.tr("error-collection-load-failed"))
        .size(typography::TITLE)
        .color(palette::ERROR_500);
    let details = app
        .collection_error
        .as_ref()
        .map(|error| error.to_string())
        .unwrap_or_default();

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(Text::new(details).size(typography::BODY).color(palette::GRAY_400));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
