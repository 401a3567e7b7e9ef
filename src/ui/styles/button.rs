// SPDX-License-Identifier: MPL-2.0
//! Button styles for lightbox controls and navigation.

use crate::ui::design_tokens::{opacity, palette, radius, with_alpha};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style for the glyph controls inside the lightbox (close, previous,
/// next): no chrome at rest, a subtle halo on hover.
pub fn lightbox_control() -> impl Fn(&Theme, button::Status) -> button::Style {
    |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Some(Background::Color(with_alpha(
                palette::WHITE,
                opacity::OVERLAY_SUBTLE,
            ))),
            button::Status::Pressed => Some(Background::Color(with_alpha(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
            ))),
            button::Status::Active | button::Status::Disabled => None,
        };

        button::Style {
            background,
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Style for navbar text buttons, following the ambient theme palette.
pub fn navbar() -> impl Fn(&Theme, button::Status) -> button::Style {
    |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        match status {
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(palette.background.strong.color.into()),
                text_color: palette.background.base.text,
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                ..Default::default()
            },
            button::Status::Active | button::Status::Disabled => button::Style {
                background: None,
                text_color: palette.background.base.text,
                border: Border::default(),
                ..Default::default()
            },
        }
    }
}
