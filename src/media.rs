// SPDX-License-Identifier: MPL-2.0
//! Photo loading and decoding.
//!
//! Decodes raster images with the `image` crate, honors the EXIF
//! orientation tag for camera JPEGs, and produces two Iced image handles
//! per photo: the full-resolution one for the lightbox and a downscaled
//! one for the thumbnail grid.

use crate::error::{Error, Result};
use exif::{In, Reader, Tag, Value};
use iced::widget::image;
use image_rs::GenericImageView;
use std::io::Cursor;
use std::path::Path;

/// Longest edge of a grid thumbnail, in pixels.
const THUMBNAIL_MAX_EDGE: u32 = 480;

/// Decoded photo ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Full-resolution handle shown in the lightbox.
    pub full: image::Handle,
    /// Downscaled handle shown in the thumbnail grid.
    pub thumbnail: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Loads and decodes the photo at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`]
/// if decoding fails.
pub fn load_photo(path: &Path) -> Result<ImageData> {
    let bytes = std::fs::read(path)?;

    let orientation = if is_jpeg(path) {
        orientation_from_bytes(&bytes).unwrap_or_else(|| {
            eprintln!(
                "Warning: could not read EXIF data for {}",
                path.display()
            );
            1
        })
    } else {
        1
    };

    let decoded = image_rs::load_from_memory(&bytes)
        .map_err(|e| Error::Image(format!("{}: {}", path.display(), e)))?;
    let oriented = apply_orientation(decoded, orientation);

    let (width, height) = oriented.dimensions();

    let thumbnail = oriented.thumbnail(THUMBNAIL_MAX_EDGE, THUMBNAIL_MAX_EDGE);
    let (thumb_width, thumb_height) = thumbnail.dimensions();

    Ok(ImageData {
        full: image::Handle::from_rgba(width, height, oriented.into_rgba8().into_vec()),
        thumbnail: image::Handle::from_rgba(
            thumb_width,
            thumb_height,
            thumbnail.into_rgba8().into_vec(),
        ),
        width,
        height,
    })
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

/// Reads the EXIF orientation tag from encoded JPEG bytes.
/// Returns `None` if there is no EXIF segment or no orientation field.
fn orientation_from_bytes(bytes: &[u8]) -> Option<u16> {
    let exif = Reader::new()
        .read_from_container(&mut Cursor::new(bytes))
        .ok()?;
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    match &field.value {
        Value::Short(values) => values.first().copied(),
        _ => None,
    }
}

/// Applies an EXIF orientation to a decoded image.
///
/// Only the rotation values (1, 3, 6, 8) are handled; the mirrored
/// variants (2, 4, 5, 7) are rare in practice and left as-is.
fn apply_orientation(img: image_rs::DynamicImage, orientation: u16) -> image_rs::DynamicImage {
    match orientation {
        3 => img.rotate180(),
        6 => img.rotate90(),
        8 => img.rotate270(),
        _ => img,
    }
}
