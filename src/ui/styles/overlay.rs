// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop, captions and counters.

use crate::ui::design_tokens::{opacity, palette, with_alpha};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Full-window backdrop behind the lightbox content.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(
            palette::BLACK,
            opacity::BACKDROP,
        ))),
        ..Default::default()
    }
}

/// Generic style for overlay indicators like the caption bar and the
/// photo position counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(with_alpha(
            palette::BLACK,
            opacity::OVERLAY_STRONG,
        ))),
        text_color: Some(palette::WHITE),
        border: Border {
            color: with_alpha(palette::WHITE, opacity::OVERLAY_SUBTLE),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}
