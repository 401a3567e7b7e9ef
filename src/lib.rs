// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an animated photo gallery built with the Iced GUI framework.
//!
//! It renders a grid of photo thumbnails with a staggered entrance animation
//! and opens a full-screen lightbox with mouse and keyboard navigation. It
//! demonstrates internationalization with Fluent, user preference management,
//! and modular UI design.

pub mod animation;
pub mod app;
pub mod collection;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
