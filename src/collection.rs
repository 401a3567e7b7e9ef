// SPDX-License-Identifier: MPL-2.0
//! Photo collection loading and wrap-around navigation.
//!
//! The collection is built once at startup, either from a TOML manifest or
//! by scanning a directory, and stays immutable for the lifetime of the
//! application. Lightbox navigation is plain index arithmetic on this list,
//! wrapping modulo the photo count in both directions.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File extensions accepted when scanning a directory for photos.
const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// A single gallery entry: the photo on disk plus its display caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub path: PathBuf,
    pub caption: String,
}

/// Manifest schema for `[[photos]]` entries in a gallery TOML file.
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    photos: Vec<ManifestPhoto>,
}

#[derive(Debug, Deserialize)]
struct ManifestPhoto {
    src: PathBuf,
    caption: Option<String>,
}

/// An ordered, immutable list of photos.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoCollection {
    photos: Vec<Photo>,
}

impl PhotoCollection {
    /// Builds a collection from `source`: a directory is scanned for
    /// supported images, a `.toml` file is parsed as a manifest.
    pub fn load(source: &Path) -> Result<Self> {
        if source.is_dir() {
            Self::scan_directory(source)
        } else if source.extension().is_some_and(|e| e.eq_ignore_ascii_case("toml")) {
            Self::from_manifest(source)
        } else {
            Err(Error::Collection(format!(
                "not a directory or manifest file: {}",
                source.display()
            )))
        }
    }

    /// Parses a TOML manifest listing photos in display order.
    ///
    /// Relative `src` paths are resolved against the manifest's directory.
    /// Missing captions fall back to the file stem.
    pub fn from_manifest(manifest_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(manifest_path)?;
        let manifest: Manifest = toml::from_str(&content)?;
        let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));

        let photos = manifest
            .photos
            .into_iter()
            .map(|entry| {
                let path = if entry.src.is_absolute() {
                    entry.src
                } else {
                    base.join(entry.src)
                };
                let caption = entry
                    .caption
                    .unwrap_or_else(|| caption_from_path(&path));
                Photo { path, caption }
            })
            .collect();

        Ok(Self { photos })
    }

    /// Scans `directory` for supported image files, sorted by file name.
    /// Captions are derived from file stems.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let mut paths = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_supported_image(&path) {
                paths.push(path);
            }
        }

        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let photos = paths
            .into_iter()
            .map(|path| {
                let caption = caption_from_path(&path);
                Photo { path, caption }
            })
            .collect();

        Ok(Self { photos })
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }

    /// Index of the photo after `index`, wrapping to the first photo past
    /// the end of the list.
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty; callers only navigate while a
    /// lightbox is open, which requires at least one photo.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        assert!(!self.photos.is_empty(), "navigation on empty collection");
        (index + 1) % self.photos.len()
    }

    /// Index of the photo before `index`, wrapping to the last photo when
    /// at the start of the list.
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty; see [`Self::next_index`].
    #[must_use]
    pub fn previous_index(&self, index: usize) -> usize {
        assert!(!self.photos.is_empty(), "navigation on empty collection");
        (index + self.photos.len() - 1) % self.photos.len()
    }
}

/// Human-readable caption from a file path: the stem with separators
/// replaced by spaces.
fn caption_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default()
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to create test file");
        path
    }

    fn collection_of(count: usize) -> PhotoCollection {
        let photos = (0..count)
            .map(|i| Photo {
                path: PathBuf::from(format!("photo_{i}.jpg")),
                caption: format!("photo {i}"),
            })
            .collect();
        PhotoCollection { photos }
    }

    #[test]
    fn next_index_advances_and_wraps() {
        let collection = collection_of(10);
        assert_eq!(collection.next_index(0), 1);
        assert_eq!(collection.next_index(8), 9);
        assert_eq!(collection.next_index(9), 0); // wraps to first
    }

    #[test]
    fn previous_index_recedes_and_wraps() {
        let collection = collection_of(10);
        assert_eq!(collection.previous_index(5), 4);
        assert_eq!(collection.previous_index(0), 9); // wraps to last
    }

    #[test]
    fn single_photo_wraps_to_itself() {
        let collection = collection_of(1);
        assert_eq!(collection.next_index(0), 0);
        assert_eq!(collection.previous_index(0), 0);
    }

    #[test]
    fn scan_directory_finds_images_sorted_by_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "c.png");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.webp");
        fs::write(temp_dir.path().join("notes.txt"), b"not an image").unwrap();

        let collection =
            PhotoCollection::scan_directory(temp_dir.path()).expect("scan failed");

        let names: Vec<_> = collection
            .iter()
            .map(|p| p.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.jpg", "b.webp", "c.png"]);
    }

    #[test]
    fn scan_directory_derives_captions_from_stems() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "summer_trip-day1.jpg");

        let collection =
            PhotoCollection::scan_directory(temp_dir.path()).expect("scan failed");

        assert_eq!(collection.get(0).unwrap().caption, "summer trip day1");
    }

    #[test]
    fn from_manifest_keeps_declared_order_and_captions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = temp_dir.path().join("gallery.toml");
        fs::write(
            &manifest_path,
            r#"
[[photos]]
src = "z.jpg"
caption = "Memory 1"

[[photos]]
src = "a.jpg"
"#,
        )
        .unwrap();

        let collection =
            PhotoCollection::from_manifest(&manifest_path).expect("manifest failed");

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(0).unwrap().caption, "Memory 1");
        assert_eq!(collection.get(0).unwrap().path, temp_dir.path().join("z.jpg"));
        // Missing caption falls back to the file stem.
        assert_eq!(collection.get(1).unwrap().caption, "a");
    }

    #[test]
    fn from_manifest_keeps_absolute_paths() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = temp_dir.path().join("gallery.toml");
        fs::write(
            &manifest_path,
            "[[photos]]\nsrc = \"/shared/photos/one.png\"\n",
        )
        .unwrap();

        let collection =
            PhotoCollection::from_manifest(&manifest_path).expect("manifest failed");
        assert_eq!(
            collection.get(0).unwrap().path,
            PathBuf::from("/shared/photos/one.png")
        );
    }

    #[test]
    fn load_rejects_unknown_source() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let weird = create_test_image(temp_dir.path(), "photo.jpg");
        let err = PhotoCollection::load(&weird).unwrap_err();
        assert!(matches!(err, Error::Collection(_)));
    }

    #[test]
    fn empty_manifest_yields_empty_collection() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = temp_dir.path().join("gallery.toml");
        fs::write(&manifest_path, "").unwrap();

        let collection =
            PhotoCollection::from_manifest(&manifest_path).expect("manifest failed");
        assert!(collection.is_empty());
    }
}
