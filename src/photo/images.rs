// SPDX-License-Identifier: MPL-2.0
//! Image downloads and the decoded-handle cache.
//!
//! Thumbnails and slider images are fetched as raw bytes and wrapped in an
//! Iced [`Handle`]; decoding happens in the renderer. Handles are kept in an
//! LRU cache keyed by URL so reopening the slider or scrolling back does not
//! hit the network again.

use crate::config::MAX_CONCURRENT_DOWNLOADS;
use crate::error::ApiError;
use futures_util::stream::{self, Stream, StreamExt};
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

/// Result of one image download.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub url: String,
    pub result: Result<Handle, ApiError>,
}

/// Downloads one image.
pub async fn download(client: &reqwest::Client, url: &str) -> Result<Handle, ApiError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::http_status(status.as_u16()));
    }
    let bytes = response.bytes().await?;
    Ok(Handle::from_bytes(bytes))
}

/// Downloads every URL with at most [`MAX_CONCURRENT_DOWNLOADS`] requests
/// in flight. Items arrive in completion order.
pub fn download_all(
    client: reqwest::Client,
    urls: Vec<String>,
) -> impl Stream<Item = LoadedImage> + Send + 'static {
    stream::iter(urls)
        .map(move |url| {
            let client = client.clone();
            async move {
                let result = download(&client, &url).await;
                LoadedImage { url, result }
            }
        })
        .buffer_unordered(MAX_CONCURRENT_DOWNLOADS)
}

/// Which store a downloaded image goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// Grid thumbnail, kept for as long as its photo is listed.
    Thumbnail,
    /// Full-resolution slide, kept in the bounded LRU.
    Full,
}

/// Decoded image handles plus the set of URLs whose download is in flight.
///
/// Thumbnails of the current listing are never evicted: the grid requests
/// them once per listing and shows a placeholder until they arrive. Only
/// full-resolution slides compete for the bounded LRU.
pub struct ImageCache {
    thumbnails: HashMap<String, Handle>,
    entries: LruCache<String, Handle>,
    pending: HashMap<String, ImageKind>,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("thumbnails", &self.thumbnails.len())
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl ImageCache {
    /// `capacity` bounds the full-resolution entries only.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            thumbnails: HashMap::new(),
            entries: LruCache::new(capacity),
            pending: HashMap::new(),
        }
    }

    /// Handle for `url`, without touching recency (usable from `view`).
    pub fn peek(&self, url: &str) -> Option<&Handle> {
        self.thumbnails.get(url).or_else(|| self.entries.peek(url))
    }

    pub fn contains(&self, url: &str) -> bool {
        self.thumbnails.contains_key(url) || self.entries.contains(url)
    }

    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.thumbnails.len() + self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Filters `urls` down to the ones neither cached nor in flight and
    /// marks those as in flight for `kind`. Cached full-resolution URLs are
    /// promoted in the LRU order.
    pub fn claim_missing<I, S>(&mut self, kind: ImageKind, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut missing = Vec::new();
        for url in urls {
            let url = url.as_ref();
            if self.thumbnails.contains_key(url)
                || self.entries.get(url).is_some()
                || self.pending.contains_key(url)
            {
                continue;
            }
            self.pending.insert(url.to_string(), kind);
            missing.push(url.to_string());
        }
        missing
    }

    /// Records the outcome of a download started through [`claim_missing`].
    ///
    /// [`claim_missing`]: Self::claim_missing
    pub fn complete(&mut self, loaded: LoadedImage) {
        let kind = self.pending.remove(&loaded.url);
        match loaded.result {
            Ok(handle) => match kind {
                Some(ImageKind::Thumbnail) => {
                    self.thumbnails.insert(loaded.url, handle);
                }
                Some(ImageKind::Full) | None => {
                    self.entries.put(loaded.url, handle);
                }
            },
            Err(err) => {
                tracing::warn!(url = %loaded.url, "image download failed: {}", err);
            }
        }
    }

    /// Drops thumbnails that are not in `urls`, typically the thumbnails
    /// of a new listing.
    pub fn retain_thumbnails<'a, I>(&mut self, urls: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keep: HashSet<&str> = urls.into_iter().collect();
        self.thumbnails.retain(|url, _| keep.contains(url.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(url: &str) -> LoadedImage {
        LoadedImage {
            url: url.to_string(),
            result: Ok(Handle::from_bytes(vec![0u8; 4])),
        }
    }

    #[test]
    fn claim_missing_marks_urls_pending_once() {
        let mut cache = ImageCache::new(4);
        let first = cache.claim_missing(ImageKind::Full, ["a", "b"]);
        assert_eq!(first, vec!["a".to_string(), "b".to_string()]);
        assert!(cache.is_pending("a"));

        let second = cache.claim_missing(ImageKind::Full, ["a", "b", "c"]);
        assert_eq!(second, vec!["c".to_string()]);
    }

    #[test]
    fn complete_moves_url_from_pending_to_cache() {
        let mut cache = ImageCache::new(4);
        cache.claim_missing(ImageKind::Full, ["a"]);
        cache.complete(loaded("a"));

        assert!(!cache.is_pending("a"));
        assert!(cache.peek("a").is_some());
        assert!(cache.claim_missing(ImageKind::Full, ["a"]).is_empty());
    }

    #[test]
    fn failed_download_can_be_claimed_again() {
        let mut cache = ImageCache::new(4);
        cache.claim_missing(ImageKind::Full, ["a"]);
        cache.complete(LoadedImage {
            url: "a".into(),
            result: Err(ApiError::http_status(404)),
        });

        assert!(!cache.contains("a"));
        assert_eq!(cache.claim_missing(ImageKind::Full, ["a"]), vec!["a".to_string()]);
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut cache = ImageCache::new(2);
        cache.complete(loaded("a"));
        cache.complete(loaded("b"));
        // Touch "a" so "b" becomes the eviction candidate
        cache.claim_missing(ImageKind::Full, ["a"]);
        cache.complete(loaded("c"));

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_still_holds_one_entry() {
        let mut cache = ImageCache::new(0);
        cache.complete(loaded("a"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn thumbnails_survive_full_resolution_churn() {
        let mut cache = ImageCache::new(2);
        let thumbs: Vec<String> = (0..10).map(|i| format!("thumb-{i}")).collect();
        let claimed = cache.claim_missing(ImageKind::Thumbnail, &thumbs);
        assert_eq!(claimed.len(), 10);
        for url in &claimed {
            cache.complete(loaded(url));
        }
        for url in ["full-1", "full-2", "full-3", "full-4"] {
            cache.claim_missing(ImageKind::Full, [url]);
            cache.complete(loaded(url));
        }

        assert!(thumbs.iter().all(|url| cache.peek(url).is_some()));
        assert!(!cache.contains("full-1"));
        assert!(cache.contains("full-4"));
        assert!(cache.claim_missing(ImageKind::Thumbnail, &thumbs).is_empty());
    }

    #[test]
    fn retain_thumbnails_drops_unlisted_ones() {
        let mut cache = ImageCache::new(2);
        for url in ["t1", "t2"] {
            cache.claim_missing(ImageKind::Thumbnail, [url]);
            cache.complete(loaded(url));
        }
        cache.retain_thumbnails(["t2"]);

        assert!(!cache.contains("t1"));
        assert!(cache.contains("t2"));
    }
}
