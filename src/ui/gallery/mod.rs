// SPDX-License-Identifier: MPL-2.0
//! Gallery state machine.
//!
//! ```text
//! Loading ──ok──▶ Ready ──SelectPhoto(id)──▶ Ready + slider open at P
//!    │  ▲                ◀──Close(any trigger)──┘
//!   err │
//!    ▼  │ Retry
//!  Failed
//! ```
//!
//! The gallery never performs I/O itself. [`State::mount`] and
//! [`State::handle`] return an [`Effect`] that the application turns into a
//! task, and the task's result comes back as a [`Message`]. Every fetch
//! carries a request number; results for any other number are ignored.

pub mod masonry;
mod view;

pub use view::ViewContext;

use crate::config::GalleryConfig;
use crate::error::ApiError;
use crate::photo::images::{ImageKind, LoadedImage};
use crate::photo::{filter_by_group, unique_groups, validate_photos, GroupKey, ImageCache, Photo, PhotoId};
use crate::ui::slider::{self, ScrollLock};
use iced::{Element, Subscription};

/// Loading phase of the photo listing.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Failed(ApiError),
    Ready,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Outcome of the fetch started for `request`.
    PhotosLoaded {
        request: u64,
        result: Result<Vec<Photo>, ApiError>,
    },
    Retry,
    SelectPhoto(PhotoId),
    /// Narrow the grid to one album/author, or show everything.
    FilterChanged(Option<GroupKey>),
    Slider(slider::Message),
    ImageLoaded(LoadedImage),
}

/// Work requested from the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch the photo listing and answer with [`Message::PhotosLoaded`].
    FetchPhotos { request: u64 },
    /// Download these images and answer with one [`Message::ImageLoaded`] each.
    LoadImages(Vec<String>),
}

#[derive(Debug)]
pub struct State {
    phase: Phase,
    photos: Vec<Photo>,
    visible: Vec<Photo>,
    filter: Option<GroupKey>,
    slider: Option<slider::State>,
    scroll_lock: ScrollLock,
    images: ImageCache,
    columns: Option<usize>,
    request: u64,
}

impl State {
    /// Creates the gallery and requests the initial fetch.
    ///
    /// This is the only place a fetch starts without user action.
    pub fn mount(config: &GalleryConfig) -> (Self, Effect) {
        let state = Self {
            phase: Phase::Loading,
            photos: Vec::new(),
            visible: Vec::new(),
            filter: None,
            slider: None,
            scroll_lock: ScrollLock::new(),
            images: ImageCache::new(config.image_cache_entries()),
            columns: config.columns(),
            request: 1,
        };
        let effect = Effect::FetchPhotos {
            request: state.request,
        };
        (state, effect)
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::PhotosLoaded { request, result } => self.on_photos_loaded(request, result),
            Message::Retry => self.retry(),
            Message::SelectPhoto(id) => self.select(&id),
            Message::FilterChanged(filter) => self.set_filter(filter),
            Message::Slider(message) => self.on_slider(message),
            Message::ImageLoaded(loaded) => {
                self.images.complete(loaded);
                Effect::None
            }
        }
    }

    /// Keyboard listener of the slider, present only while it is open.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.slider.is_some() {
            slider::State::subscription().map(Message::Slider)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::view(self, ctx)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Every validated photo of the last successful fetch.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Photos shown in the grid, after the album/author filter.
    pub fn visible_photos(&self) -> &[Photo] {
        &self.visible
    }

    pub fn filter(&self) -> Option<&GroupKey> {
        self.filter.as_ref()
    }

    /// Distinct albums/authors of the current listing, sorted.
    pub fn groups(&self) -> Vec<GroupKey> {
        unique_groups(&self.photos)
    }

    /// Position of `id` in the grid.
    pub fn position_of(&self, id: &PhotoId) -> Option<usize> {
        self.visible.iter().position(|photo| &photo.id == id)
    }

    /// Position shown by the slider, `None` while it is closed.
    pub fn selected_position(&self) -> Option<usize> {
        self.slider.as_ref().map(slider::State::position)
    }

    pub fn selected_photo(&self) -> Option<&Photo> {
        self.selected_position().and_then(|p| self.visible.get(p))
    }

    pub fn slider(&self) -> Option<&slider::State> {
        self.slider.as_ref()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    /// Fixed column count from the configuration, if any.
    pub fn columns(&self) -> Option<usize> {
        self.columns
    }

    /// Number of the fetch currently expected.
    pub fn request(&self) -> u64 {
        self.request
    }

    fn on_photos_loaded(&mut self, request: u64, result: Result<Vec<Photo>, ApiError>) -> Effect {
        if request != self.request || self.phase != Phase::Loading {
            tracing::debug!(request, expected = self.request, "ignoring stale photo listing");
            return Effect::None;
        }

        match result {
            Ok(photos) => {
                self.photos = validate_photos(photos);
                self.images
                    .retain_thumbnails(self.photos.iter().map(|p| p.thumbnail_url.as_str()));
                if let Some(filter) = &self.filter {
                    if !self.photos.iter().any(|p| p.group.as_ref() == Some(filter)) {
                        self.filter = None;
                    }
                }
                self.refresh_visible();
                self.phase = Phase::Ready;
                tracing::info!(count = self.photos.len(), "gallery ready");
                self.load_thumbnails()
            }
            Err(error) => {
                tracing::warn!(%error, "photo listing failed");
                self.photos.clear();
                self.visible.clear();
                self.phase = Phase::Failed(error);
                Effect::None
            }
        }
    }

    fn retry(&mut self) -> Effect {
        if !matches!(self.phase, Phase::Failed(_)) {
            return Effect::None;
        }
        self.request += 1;
        self.phase = Phase::Loading;
        tracing::info!(request = self.request, "retrying photo listing");
        Effect::FetchPhotos {
            request: self.request,
        }
    }

    fn select(&mut self, id: &PhotoId) -> Effect {
        if self.phase != Phase::Ready {
            return Effect::None;
        }
        let Some(position) = self.position_of(id) else {
            tracing::debug!(%id, "selected photo is not in the grid");
            return Effect::None;
        };

        // Release the previous guard before taking a new one
        self.slider = None;
        self.slider = Some(slider::State::open(
            self.visible.len(),
            position,
            self.scroll_lock.acquire(),
        ));
        tracing::debug!(%id, position, "slider opened");
        self.load_slides_around(position)
    }

    fn set_filter(&mut self, filter: Option<GroupKey>) -> Effect {
        if self.phase != Phase::Ready || self.slider.is_some() || self.filter == filter {
            return Effect::None;
        }
        self.filter = filter;
        self.refresh_visible();
        self.load_thumbnails()
    }

    fn on_slider(&mut self, message: slider::Message) -> Effect {
        let Some(slider) = self.slider.as_mut() else {
            return Effect::None;
        };

        match slider.handle(message) {
            slider::Event::None => Effect::None,
            slider::Event::PositionChanged(position) => self.load_slides_around(position),
            slider::Event::Close(trigger) => {
                self.slider = None;
                tracing::debug!(?trigger, "slider closed");
                Effect::None
            }
        }
    }

    fn refresh_visible(&mut self) {
        self.visible = match &self.filter {
            Some(group) => filter_by_group(&self.photos, group),
            None => self.photos.clone(),
        };
    }

    fn load_thumbnails(&mut self) -> Effect {
        let urls = self.images.claim_missing(
            ImageKind::Thumbnail,
            self.visible.iter().map(|p| p.thumbnail_url.as_str()),
        );
        images_effect(urls)
    }

    /// Full-resolution images of `position` and its neighbours.
    fn load_slides_around(&mut self, position: usize) -> Effect {
        let start = position.saturating_sub(1);
        let end = (position + 2).min(self.visible.len());
        let urls = self.images.claim_missing(
            ImageKind::Full,
            self.visible[start..end].iter().map(|p| p.url.as_str()),
        );
        images_effect(urls)
    }
}

fn images_effect(urls: Vec<String>) -> Effect {
    if urls.is_empty() {
        Effect::None
    } else {
        Effect::LoadImages(urls)
    }
}
