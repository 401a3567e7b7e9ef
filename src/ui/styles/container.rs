// SPDX-License-Identifier: MPL-2.0
//! Container styles for the navbar and thumbnail cells.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Style for the top navigation bar.
#[must_use]
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Style for a thumbnail slot while its photo is loading or failed:
/// a flat dark card the size of the final image.
#[must_use]
pub fn thumbnail_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_400),
        border: Border {
            color: palette::GRAY_700,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
