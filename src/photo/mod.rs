// SPDX-License-Identifier: MPL-2.0
//! Photo records shown by the gallery.
//!
//! A [`Photo`] is produced once by the service layer from one raw listing
//! record and never mutated afterwards. The gallery keeps the validated list
//! and drops it when it refetches.

pub mod images;
pub mod service;

pub use images::ImageCache;
pub use service::{
    filter_by_group, listing_url, unique_groups, validate_photos, PhotoService,
};

use serde::Deserialize;
use std::fmt;

/// Identifier of a photo as the backend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum PhotoId {
    Int(u64),
    Text(String),
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoId::Int(id) => write!(f, "{}", id),
            PhotoId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<u64> for PhotoId {
    fn from(id: u64) -> Self {
        PhotoId::Int(id)
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        PhotoId::Text(id.to_string())
    }
}

/// Grouping of photos: the album for JSONPlaceholder, the author for Picsum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey {
    Album(u64),
    Author(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Album(id) => write!(f, "Album {}", id),
            GroupKey::Author(name) => write!(f, "{}", name),
        }
    }
}

/// One displayable photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    /// Title, or author name for backends without titles.
    pub title: String,
    /// Full-resolution image shown in the slider.
    pub url: String,
    /// Reduced-size image shown in the grid.
    pub thumbnail_url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub group: Option<GroupKey>,
}

impl Photo {
    /// True when every field needed to render the photo is non-empty.
    pub fn is_displayable(&self) -> bool {
        !self.url.is_empty() && !self.thumbnail_url.is_empty() && !self.title.is_empty()
    }

    /// First words of the title, used as card heading.
    pub fn short_title(&self, max_words: usize) -> String {
        self.title
            .split_whitespace()
            .take(max_words)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
pub(crate) fn sample_photo(id: u64, title: &str) -> Photo {
    Photo {
        id: PhotoId::Int(id),
        title: title.to_string(),
        url: format!("https://img.test/seed/{id}/1200/800"),
        thumbnail_url: format!("https://img.test/seed/{id}/600/800"),
        width: None,
        height: None,
        group: Some(GroupKey::Album(id % 3 + 1)),
    }
}
