// SPDX-License-Identifier: MPL-2.0
//! Integration tests exercising the config, i18n, collection and gallery
//! modules together.

use iced_gallery::collection::PhotoCollection;
use iced_gallery::config::{self, Config, DEFAULT_GRID_COLUMNS};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::ui::gallery::component::{Message, State};
use iced_gallery::ui::theming::ThemeMode;
use std::fs;
use std::time::Instant;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
        reveal_animation: Some(true),
        grid_columns: Some(DEFAULT_GRID_COLUMNS),
    };
    config::save_to_path(&initial_config, &config_path).expect("Failed to write config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..initial_config
    };
    config::save_to_path(&french_config, &config_path).expect("Failed to write config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_en.tr("window-title"), i18n_fr.tr("window-title"));
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.language = Some("en-US".to_string());

    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn scanned_directory_drives_gallery_navigation() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["one.jpg", "two.png", "three.webp"] {
        fs::write(dir.path().join(name), b"fake image data").unwrap();
    }

    let collection = PhotoCollection::scan_directory(dir.path()).expect("scan failed");
    assert_eq!(collection.len(), 3);

    let mut gallery = State::new(collection, true);
    let _ = gallery.handle_message(Message::ThumbnailPressed(0));
    assert!(gallery.is_lightbox_open());

    // Walk forward through the whole collection and wrap back to the start.
    let now = Instant::now();
    for _ in 0..3 {
        gallery.show_next(now);
    }
    assert_eq!(gallery.lightbox().unwrap().index, 0);

    gallery.show_previous(now);
    assert_eq!(gallery.lightbox().unwrap().index, 2);
}

#[test]
fn manifest_collection_preserves_captions_through_gallery() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest = dir.path().join("gallery.toml");
    fs::write(
        &manifest,
        r#"
[[photos]]
src = "beach.jpg"
caption = "Low tide"

[[photos]]
src = "dunes.jpg"
"#,
    )
    .unwrap();

    let collection = PhotoCollection::load(&manifest).expect("manifest load failed");
    let gallery = State::new(collection, false);

    assert_eq!(gallery.collection().get(0).unwrap().caption, "Low tide");
    assert_eq!(gallery.collection().get(1).unwrap().caption, "dunes");
    // Reveal disabled in config: thumbnails are fully visible right away.
    assert_eq!(gallery.reveal_progress(1, Instant::now()), 1.0);
}
