// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.
//!
//! The component owns the photo collection, the per-photo thumbnail
//! slots, the one-shot entrance animation and the lightbox. All state is
//! mutated synchronously inside `handle_message`; animation progress is
//! derived from the clock, never stored.

use crate::animation::Tween;
use crate::collection::PhotoCollection;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::gallery::reveal::RevealAnimation;
use crate::ui::gallery::{grid, lightbox};
use crate::i18n::fluent::I18n;
use iced::{event, keyboard, window, Element, Task};
use std::time::{Duration, Instant};

/// Duration of the lightbox fade/scale-in, restarted on every photo change.
pub const LIGHTBOX_FADE_DURATION: Duration = Duration::from_millis(300);
/// Scale the lightbox photo grows from while fading in.
pub const LIGHTBOX_SCALE_FROM: f32 = 0.9;

/// Decoding status of one grid thumbnail.
#[derive(Debug, Clone)]
pub enum ThumbnailSlot {
    Loading,
    Ready(ImageData),
    Failed(Error),
}

/// Open lightbox: which photo is shown and its fade-in tween.
#[derive(Debug, Clone, Copy)]
pub struct Lightbox {
    pub index: usize,
    pub fade: Tween,
}

/// Messages emitted by gallery widgets and subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    /// A photo finished decoding in the background.
    ThumbnailLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    ThumbnailPressed(usize),
    ThumbnailHovered(usize),
    ThumbnailUnhovered(usize),
    CloseLightbox,
    NextPhoto,
    PreviousPhoto,
    /// Click landed on the lightbox photo itself; swallowed so it does
    /// not fall through to the backdrop and close the lightbox.
    PhotoPressed,
    /// Animation frame tick, only subscribed while a tween is running.
    Tick(Instant),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Gallery component state.
pub struct State {
    collection: PhotoCollection,
    thumbnails: Vec<ThumbnailSlot>,
    reveal: RevealAnimation,
    lightbox: Option<Lightbox>,
    hovered: Option<usize>,
}

impl State {
    /// Creates the component for a fixed photo collection. The collection
    /// is immutable from here on.
    #[must_use]
    pub fn new(collection: PhotoCollection, reveal_enabled: bool) -> Self {
        let thumbnails = collection.iter().map(|_| ThumbnailSlot::Loading).collect();
        let reveal = RevealAnimation::new(collection.len(), reveal_enabled);
        Self {
            collection,
            thumbnails,
            reveal,
            lightbox: None,
            hovered: None,
        }
    }

    pub fn collection(&self) -> &PhotoCollection {
        &self.collection
    }

    pub fn thumbnails(&self) -> &[ThumbnailSlot] {
        &self.thumbnails
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }

    /// Lightbox visibility; the keyboard subscription exists only while
    /// this returns true.
    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// Whether the reveal has been triggered (the `photosRevealed` guard).
    #[must_use]
    pub fn photos_revealed(&self) -> bool {
        self.reveal.has_run()
    }

    /// Whether any tween needs animation frames at `now`; drives the
    /// tick subscription.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        if self.reveal.is_animating(now) {
            return true;
        }
        self.lightbox
            .is_some_and(|lightbox| !lightbox.fade.is_finished(now))
    }

    /// Called when the gallery screen becomes active. Starts the
    /// entrance reveal the first time only.
    pub fn activate(&mut self, now: Instant) {
        self.reveal.activate(now);
    }

    /// Eased reveal progress for thumbnail `index`.
    #[must_use]
    pub fn reveal_progress(&self, index: usize, now: Instant) -> f32 {
        self.reveal.progress(index, now)
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailLoaded { index, result } => {
                if let Some(slot) = self.thumbnails.get_mut(index) {
                    *slot = match result {
                        Ok(data) => ThumbnailSlot::Ready(data),
                        Err(error) => {
                            eprintln!(
                                "Failed to load photo {}: {}",
                                self.collection
                                    .get(index)
                                    .map(|p| p.path.display().to_string())
                                    .unwrap_or_default(),
                                error
                            );
                            ThumbnailSlot::Failed(error)
                        }
                    };
                }
                Task::none()
            }
            Message::ThumbnailPressed(index) => {
                self.open_lightbox(index, Instant::now());
                Task::none()
            }
            Message::ThumbnailHovered(index) => {
                self.hovered = Some(index);
                Task::none()
            }
            Message::ThumbnailUnhovered(index) => {
                if self.hovered == Some(index) {
                    self.hovered = None;
                }
                Task::none()
            }
            Message::CloseLightbox => {
                self.lightbox = None;
                Task::none()
            }
            Message::NextPhoto => {
                self.show_next(Instant::now());
                Task::none()
            }
            Message::PreviousPhoto => {
                self.show_previous(Instant::now());
                Task::none()
            }
            Message::PhotoPressed => Task::none(),
            Message::Tick(now) => {
                self.tick(now);
                Task::none()
            }
            Message::RawEvent { event, .. } => {
                if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
                    self.on_key_pressed(&key);
                }
                Task::none()
            }
        }
    }

    /// Opens the lightbox on `index`. Out-of-range indices (possible only
    /// through stale messages) are ignored.
    pub fn open_lightbox(&mut self, index: usize, now: Instant) {
        if index >= self.collection.len() {
            return;
        }
        self.lightbox = Some(Lightbox {
            index,
            fade: Tween::new(now, LIGHTBOX_FADE_DURATION),
        });
    }

    /// Advances to the next photo, wrapping past the last one, and
    /// restarts the fade-in.
    pub fn show_next(&mut self, now: Instant) {
        if let Some(lightbox) = &mut self.lightbox {
            lightbox.index = self.collection.next_index(lightbox.index);
            lightbox.fade.restart(now);
        }
    }

    /// Steps back to the previous photo, wrapping before the first one,
    /// and restarts the fade-in.
    pub fn show_previous(&mut self, now: Instant) {
        if let Some(lightbox) = &mut self.lightbox {
            lightbox.index = self.collection.previous_index(lightbox.index);
            lightbox.fade.restart(now);
        }
    }

    /// Keyboard navigation; only meaningful while the lightbox is open.
    /// The subscription is already scoped to that window, this guard
    /// covers messages racing a close.
    pub fn on_key_pressed(&mut self, key: &keyboard::Key) {
        if self.lightbox.is_none() {
            return;
        }
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                self.lightbox = None;
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                self.show_next(Instant::now());
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                self.show_previous(Instant::now());
            }
            _ => {}
        }
    }

    fn tick(&mut self, now: Instant) {
        self.reveal.tick(now);
    }

    /// Renders the thumbnail grid, or the empty state when the collection
    /// has no photos.
    pub fn view<'a>(&'a self, i18n: &'a I18n, grid_columns: u16) -> Element<'a, Message> {
        if self.collection.is_empty() {
            return grid::empty_state(i18n);
        }

        grid::view(grid::ViewContext {
            i18n,
            state: self,
            columns: grid_columns,
            now: Instant::now(),
        })
    }

    /// Renders the lightbox overlay while one is open. The caller stacks
    /// it over the rest of the window so the backdrop covers everything.
    pub fn view_lightbox<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        let open = self.lightbox.as_ref()?;
        let photo = self
            .collection
            .get(open.index)
            .expect("lightbox index is kept within the collection");

        Some(lightbox::view(lightbox::ViewContext {
            i18n,
            photo,
            slot: &self.thumbnails[open.index],
            position: open.index,
            count: self.collection.len(),
            fade_progress: open.fade.progress(Instant::now()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::PhotoCollection;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn collection_with(count: usize, dir: &Path) -> PhotoCollection {
        for i in 0..count {
            fs::write(dir.join(format!("photo_{i:02}.jpg")), b"fake").unwrap();
        }
        PhotoCollection::scan_directory(dir).expect("scan failed")
    }

    fn state_with(count: usize, dir: &Path) -> State {
        State::new(collection_with(count, dir), true)
    }

    #[test]
    fn thumbnail_press_opens_lightbox_at_that_index() {
        let dir = tempdir().unwrap();
        let mut state = state_with(10, dir.path());

        let _ = state.handle_message(Message::ThumbnailPressed(3));

        assert!(state.is_lightbox_open());
        assert_eq!(state.lightbox().unwrap().index, 3);
    }

    #[test]
    fn out_of_range_press_is_ignored() {
        let dir = tempdir().unwrap();
        let mut state = state_with(2, dir.path());

        let _ = state.handle_message(Message::ThumbnailPressed(17));
        assert!(!state.is_lightbox_open());
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let dir = tempdir().unwrap();
        let mut state = state_with(10, dir.path());
        state.open_lightbox(9, Instant::now());

        state.show_next(Instant::now());
        assert_eq!(state.lightbox().unwrap().index, 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let dir = tempdir().unwrap();
        let mut state = state_with(10, dir.path());
        state.open_lightbox(0, Instant::now());

        state.show_previous(Instant::now());
        assert_eq!(state.lightbox().unwrap().index, 9);
    }

    #[test]
    fn photo_change_restarts_fade() {
        let dir = tempdir().unwrap();
        let mut state = state_with(3, dir.path());
        let opened = Instant::now();
        state.open_lightbox(0, opened);

        let later = opened + LIGHTBOX_FADE_DURATION;
        assert!(!state.is_animating(later));

        state.show_next(later);
        assert!(state.is_animating(later));
        assert_eq!(state.lightbox().unwrap().fade.progress(later), 0.0);
    }

    #[test]
    fn escape_closes_lightbox() {
        let dir = tempdir().unwrap();
        let mut state = state_with(4, dir.path());
        state.open_lightbox(1, Instant::now());

        state.on_key_pressed(&keyboard::Key::Named(keyboard::key::Named::Escape));
        assert!(!state.is_lightbox_open());
    }

    #[test]
    fn arrow_keys_navigate_while_open() {
        let dir = tempdir().unwrap();
        let mut state = state_with(4, dir.path());
        state.open_lightbox(0, Instant::now());

        state.on_key_pressed(&keyboard::Key::Named(keyboard::key::Named::ArrowRight));
        assert_eq!(state.lightbox().unwrap().index, 1);

        state.on_key_pressed(&keyboard::Key::Named(keyboard::key::Named::ArrowLeft));
        assert_eq!(state.lightbox().unwrap().index, 0);
    }

    #[test]
    fn keys_are_ignored_while_lightbox_closed() {
        let dir = tempdir().unwrap();
        let mut state = state_with(4, dir.path());

        state.on_key_pressed(&keyboard::Key::Named(keyboard::key::Named::ArrowRight));
        state.on_key_pressed(&keyboard::Key::Named(keyboard::key::Named::Escape));
        assert!(!state.is_lightbox_open());
    }

    #[test]
    fn activation_reveals_once_only() {
        let dir = tempdir().unwrap();
        let mut state = state_with(2, dir.path());
        assert!(!state.photos_revealed());

        let now = Instant::now();
        state.activate(now);
        assert!(state.photos_revealed());
        assert!(state.is_animating(now));

        // Finish the reveal, then re-activate: no replay.
        let end = now + Duration::from_secs(2);
        let _ = state.handle_message(Message::Tick(end));
        assert!(!state.is_animating(end));

        state.activate(end);
        assert!(!state.is_animating(end + Duration::from_millis(1)));
        assert_eq!(state.reveal_progress(0, end), 1.0);
    }

    #[test]
    fn failed_thumbnail_is_recorded() {
        let dir = tempdir().unwrap();
        let mut state = state_with(2, dir.path());

        let _ = state.handle_message(Message::ThumbnailLoaded {
            index: 1,
            result: Err(Error::Image("bad data".into())),
        });

        assert!(matches!(state.thumbnails()[1], ThumbnailSlot::Failed(_)));
        assert!(matches!(state.thumbnails()[0], ThumbnailSlot::Loading));
    }

    #[test]
    fn hover_tracks_current_thumbnail() {
        let dir = tempdir().unwrap();
        let mut state = state_with(3, dir.path());

        let _ = state.handle_message(Message::ThumbnailHovered(2));
        assert_eq!(state.hovered(), Some(2));

        // Unhover for a stale index does not clear a newer hover.
        let _ = state.handle_message(Message::ThumbnailUnhovered(1));
        assert_eq!(state.hovered(), Some(2));

        let _ = state.handle_message(Message::ThumbnailUnhovered(2));
        assert_eq!(state.hovered(), None);
    }
}
