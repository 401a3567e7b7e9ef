// SPDX-License-Identifier: MPL-2.0
//! UI modules: screens, components, styles and design tokens.

pub mod about;
pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod styles;
pub mod theming;
