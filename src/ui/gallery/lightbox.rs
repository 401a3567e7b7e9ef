// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox view.
//!
//! Stacked over the whole window: a near-opaque backdrop that closes the
//! lightbox when clicked, the photo fading and scaling in at its center,
//! previous/next controls at the edges, a close control in the corner,
//! and the caption with a position counter along the bottom.

use super::component::{Message, ThumbnailSlot, LIGHTBOX_SCALE_FROM};
use crate::animation::{cubic_out, lerp};
use crate::collection::Photo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Image, Row, Space, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub photo: &'a Photo,
    pub slot: &'a ThumbnailSlot,
    /// Zero-based index of the shown photo.
    pub position: usize,
    pub count: usize,
    /// Raw fade tween progress in `0.0..=1.0`.
    pub fade_progress: f32,
}

/// Renders the lightbox overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let eased = cubic_out(ctx.fade_progress);

    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::CloseLightbox);

    Stack::new()
        .push(backdrop)
        .push(content(&ctx, eased))
        .into()
}

fn content<'a>(ctx: &ViewContext<'a>, eased: f32) -> Element<'a, Message> {
    let close = button(Text::new("\u{2715}").size(typography::GLYPH))
        .width(Length::Fixed(sizing::LIGHTBOX_CLOSE))
        .height(Length::Fixed(sizing::LIGHTBOX_CLOSE))
        .style(styles::button::lightbox_control())
        .on_press(Message::CloseLightbox);

    let top_bar = Row::new()
        .width(Length::Fill)
        .padding(spacing::MD)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(close);

    let previous = arrow("\u{276E}", Message::PreviousPhoto);
    let next = arrow("\u{276F}", Message::NextPhoto);

    // Clicks on the photo itself must not reach the backdrop.
    let photo = mouse_area(photo_view(ctx, eased)).on_press(Message::PhotoPressed);

    let middle = Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(previous)
        .push(
            Container::new(photo)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .push(next);

    let caption = Container::new(Text::new(ctx.photo.caption.clone()).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::SM));

    let counter = Container::new(
        Text::new(format!("{} / {}", ctx.position + 1, ctx.count)).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::SM));

    let bottom_bar = Row::new()
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(caption)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(counter);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(top_bar)
        .push(middle)
        .push(bottom_bar)
        .into()
}

fn photo_view<'a>(ctx: &ViewContext<'a>, eased: f32) -> Element<'a, Message> {
    match ctx.slot {
        ThumbnailSlot::Ready(data) => Image::new(data.full.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .opacity(eased.clamp(0.0, 1.0))
            .scale(lerp(LIGHTBOX_SCALE_FROM, 1.0, eased))
            .into(),
        ThumbnailSlot::Loading => Text::new(ctx.i18n.tr("thumbnail-loading"))
            .size(typography::BODY)
            .into(),
        ThumbnailSlot::Failed(_) => Text::new(ctx.i18n.tr("thumbnail-load-failed"))
            .size(typography::BODY)
            .into(),
    }
}

fn arrow<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    Container::new(
        button(Text::new(glyph).size(typography::GLYPH))
            .padding(spacing::SM)
            .style(styles::button::lightbox_control())
            .on_press(message),
    )
    .width(Length::Fixed(sizing::LIGHTBOX_ARROW))
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}
