// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Listing endpoints, image host and page size
//! - **Gallery**: Column count bounds and image cache capacity

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the JSONPlaceholder photo listing.
pub const JSONPLACEHOLDER_ENDPOINT: &str = "https://jsonplaceholder.typicode.com";

/// Base URL of the Picsum photo listing.
pub const PICSUM_ENDPOINT: &str = "https://picsum.photos";

/// Host serving the seeded display and thumbnail images.
pub const DEFAULT_IMAGE_BASE: &str = "https://picsum.photos";

/// Number of photos requested when nothing else is configured.
pub const DEFAULT_PHOTO_LIMIT: usize = 50;

/// Smallest page size accepted from config or CLI.
pub const MIN_PHOTO_LIMIT: usize = 1;

/// Largest page size accepted from config or CLI.
pub const MAX_PHOTO_LIMIT: usize = 500;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Image Size Defaults
// ==========================================================================

/// Full-resolution image size shown in the slider (width, height).
pub const DISPLAY_IMAGE_SIZE: (u32, u32) = (1200, 800);

/// Thumbnail size used by the masonry cards (width, height).
pub const THUMBNAIL_IMAGE_SIZE: (u32, u32) = (600, 800);

/// Maximum number of image downloads in flight at once.
pub const MAX_CONCURRENT_DOWNLOADS: usize = 6;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Minimum fixed column count.
pub const MIN_COLUMNS: usize = 1;

/// Maximum fixed column count.
pub const MAX_COLUMNS: usize = 6;

/// Default capacity of the decoded image cache.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 128;

/// Number of placeholder cards in the loading skeleton.
pub const SKELETON_CARD_COUNT: usize = 12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_limit_bounds_are_consistent() {
        assert!(MIN_PHOTO_LIMIT <= DEFAULT_PHOTO_LIMIT);
        assert!(DEFAULT_PHOTO_LIMIT <= MAX_PHOTO_LIMIT);
    }

    #[test]
    fn column_bounds_are_consistent() {
        assert!(MIN_COLUMNS >= 1);
        assert!(MIN_COLUMNS <= MAX_COLUMNS);
    }

    #[test]
    fn thumbnails_are_smaller_than_display_images() {
        assert!(THUMBNAIL_IMAGE_SIZE.0 < DISPLAY_IMAGE_SIZE.0);
    }
}
