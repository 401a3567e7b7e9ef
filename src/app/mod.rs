// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and
//! about screens.
//!
//! The `App` struct wires together the photo collection, localization and
//! user preferences, and translates top-level messages into screen
//! switches or background photo loads. Policy decisions (window sizing,
//! column clamping, locale resolution) stay close to the main loop so the
//! user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::collection::PhotoCollection;
use crate::config;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::gallery::component;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

/// Root Iced application state bridging the gallery, localization and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    gallery: component::State,
    theme_mode: ThemeMode,
    grid_columns: u16,
    /// Set when the collection source could not be read at startup; shown
    /// instead of the empty state.
    collection_error: Option<Error>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("photo_count", &self.gallery.collection().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            eprintln!("Warning: could not read settings: {error}");
            config::Config::default()
        });
        Self::with_config(flags, config)
    }

    /// Builds the application from an explicit config, so tests are not
    /// affected by the settings file on the developer's machine.
    fn with_config(flags: Flags, config: config::Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);

        let (collection, collection_error) = match &flags.source {
            Some(source) => match PhotoCollection::load(&PathBuf::from(source)) {
                Ok(collection) => (collection, None),
                Err(error) => {
                    eprintln!("Failed to load photos from {source}: {error}");
                    (PhotoCollection::default(), Some(error))
                }
            },
            None => (PhotoCollection::default(), None),
        };

        let load_tasks = spawn_photo_loads(&collection);

        let reveal_enabled = config.reveal_animation.unwrap_or(true);
        let mut gallery = component::State::new(collection, reveal_enabled);
        // The gallery screen is the one shown at startup.
        gallery.activate(Instant::now());

        let grid_columns = config::clamp_grid_columns(
            config.grid_columns.unwrap_or(config::DEFAULT_GRID_COLUMNS),
        );

        let app = Self {
            i18n,
            screen: Screen::Gallery,
            gallery,
            theme_mode: config.theme_mode,
            grid_columns,
            collection_error,
        };

        (app, load_tasks)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

/// One background decode task per photo, batched so they run concurrently
/// on the blocking pool while the UI stays responsive.
fn spawn_photo_loads(collection: &PhotoCollection) -> Task<Message> {
    let tasks = collection.iter().enumerate().map(|(index, photo)| {
        let path = photo.path.clone();
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || media::load_photo(&path))
                    .await
                    .map_err(|error| Error::Io(error.to_string()))?
            },
            move |result| Message::Gallery(component::Message::ThumbnailLoaded { index, result }),
        )
    });

    Task::batch(tasks)
}
