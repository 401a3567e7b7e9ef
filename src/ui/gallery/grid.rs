// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid view.
//!
//! Rows of square cells, chunked by the configured column count. Each
//! cell renders its photo at the current reveal progress: rising from a
//! vertical offset while scaling and fading in. Hovering a loaded cell
//! shows its caption bar.

use super::component::{Message, State, ThumbnailSlot};
use crate::animation::lerp;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{mouse_area, Column, Container, Image, Row, Scrollable, Stack, Text};
use iced::{mouse, ContentFit, Element, Length, Padding};
use std::time::Instant;

/// Vertical offset a thumbnail rises from while revealing.
pub const REVEAL_OFFSET_Y: f32 = 50.0;
/// Scale a thumbnail grows from while revealing.
pub const REVEAL_SCALE_FROM: f32 = 0.8;

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub columns: u16,
    pub now: Instant,
}

/// Renders the scrollable thumbnail grid.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let columns = usize::from(ctx.columns.max(1));
    let count = ctx.state.collection().len();

    let mut grid = Column::new().spacing(spacing::LG);
    for row_start in (0..count).step_by(columns) {
        let mut row = Row::new().spacing(spacing::LG);
        for index in row_start..(row_start + columns).min(count) {
            row = row.push(thumbnail_cell(&ctx, index));
        }
        grid = grid.push(row);
    }

    let centered = Container::new(grid)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center);

    Scrollable::new(centered)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One grid cell: the photo (or a placeholder) with its reveal transform
/// applied, wrapped in a mouse area for hover and click handling.
fn thumbnail_cell<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let eased = ctx.state.reveal_progress(index, ctx.now);
    let opacity = eased.clamp(0.0, 1.0);
    // The back ease overshoots 1.0, so the offset briefly dips past zero;
    // padding cannot go negative, hence the clamp.
    let lift = ((1.0 - eased) * REVEAL_OFFSET_Y).max(0.0);
    let side = sizing::THUMBNAIL_CELL * lerp(REVEAL_SCALE_FROM, 1.0, eased).min(1.0);

    let slot = &ctx.state.thumbnails()[index];
    let photo: Element<'a, Message> = match slot {
        ThumbnailSlot::Ready(data) => Image::new(data.thumbnail.clone())
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
            .content_fit(ContentFit::Cover)
            .opacity(opacity)
            .into(),
        ThumbnailSlot::Loading => placeholder(ctx.i18n.tr("thumbnail-loading"), side),
        ThumbnailSlot::Failed(_) => placeholder(ctx.i18n.tr("thumbnail-load-failed"), side),
    };

    let hovered = ctx.state.hovered() == Some(index) && matches!(slot, ThumbnailSlot::Ready(_));
    let content: Element<'a, Message> = if hovered {
        let caption = ctx
            .state
            .collection()
            .get(index)
            .map(|photo| photo.caption.clone())
            .unwrap_or_default();
        let caption_bar = Container::new(Text::new(caption).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator(radius::SM));

        Stack::new()
            .push(photo)
            .push(
                Container::new(caption_bar)
                    .width(Length::Fixed(side))
                    .height(Length::Fixed(side))
                    .padding(spacing::XS)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Bottom),
            )
            .into()
    } else {
        photo
    };

    let cell = Container::new(content)
        .width(Length::Fixed(sizing::THUMBNAIL_CELL))
        .height(Length::Fixed(sizing::THUMBNAIL_CELL + REVEAL_OFFSET_Y))
        .padding(Padding {
            top: lift,
            ..Padding::ZERO
        })
        .align_x(Horizontal::Center);

    mouse_area(cell)
        .on_press(Message::ThumbnailPressed(index))
        .on_enter(Message::ThumbnailHovered(index))
        .on_exit(Message::ThumbnailUnhovered(index))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn placeholder<'a>(label: String, side: f32) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::thumbnail_placeholder)
        .into()
}

/// Renders the empty state when the collection has no photos.
pub fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);
    let hint = Text::new(i18n.tr("empty-state-hint"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
