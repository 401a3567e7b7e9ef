// SPDX-License-Identifier: MPL-2.0
//! Gallery module: the thumbnail grid, its entrance animation and the
//! full-screen lightbox.

pub mod component;
pub mod grid;
pub mod lightbox;
pub mod reveal;

pub use component::{Message, State};
