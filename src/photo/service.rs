// SPDX-License-Identifier: MPL-2.0
//! Photo listing client and the pure helpers around it.
//!
//! [`PhotoService::fetch_photos`] issues one GET to the configured listing
//! endpoint, maps every raw record into a [`Photo`] with image URLs derived
//! from its identifier, and normalizes every failure into an [`ApiError`].
//! Records that do not match the backend's shape are dropped rather than
//! failing the whole listing; [`validate_photos`] then drops the ones that
//! cannot be displayed.

use super::{GroupKey, Photo, PhotoId};
use crate::config::{
    clamp_limit, ApiBackend, ApiConfig, DISPLAY_IMAGE_SIZE, THUMBNAIL_IMAGE_SIZE, USER_AGENT,
};
use crate::error::ApiError;
use serde::Deserialize;
use std::collections::BTreeSet;

/// JSONPlaceholder `/photos` record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceholderRecord {
    id: PhotoId,
    #[serde(default)]
    album_id: Option<u64>,
    #[serde(default)]
    title: Option<String>,
}

/// Picsum `/v2/list` record.
#[derive(Debug, Deserialize)]
struct PicsumRecord {
    id: PhotoId,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
}

/// Client for the remote photo listing.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct PhotoService {
    client: reqwest::Client,
    config: ApiConfig,
}

impl PhotoService {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, config })
    }

    /// HTTP client shared with the image downloads.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches one page of photos.
    ///
    /// `limit` overrides the configured page size and is clamped to the
    /// supported range.
    pub async fn fetch_photos(&self, limit: Option<usize>) -> Result<Vec<Photo>, ApiError> {
        let limit = limit.map(clamp_limit).unwrap_or_else(|| self.config.limit());
        let url = listing_url(&self.config, limit);
        tracing::info!(%url, "fetching photo listing");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "photo listing request failed");
            return Err(ApiError::http_status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let photos = parse_listing(&self.config, &body)?;
        tracing::info!(count = photos.len(), "photo listing received");
        Ok(photos)
    }
}

/// Listing URL for the configured backend and page size.
pub fn listing_url(config: &ApiConfig, limit: usize) -> String {
    match config.backend {
        ApiBackend::JsonPlaceholder => format!("{}/photos?_limit={}", config.endpoint(), limit),
        ApiBackend::Picsum => format!("{}/v2/list?limit={}", config.endpoint(), limit),
    }
}

/// Display and thumbnail URLs of a photo.
///
/// Pure function of the identifier: the same id always maps to the same
/// image, whatever the listing returned for it.
pub fn image_urls(config: &ApiConfig, id: &PhotoId) -> (String, String) {
    let route = match config.backend {
        ApiBackend::JsonPlaceholder => "seed",
        ApiBackend::Picsum => "id",
    };
    let base = config.image_base();
    let id = id.to_string();
    (
        image_url(base, route, &id, DISPLAY_IMAGE_SIZE),
        image_url(base, route, &id, THUMBNAIL_IMAGE_SIZE),
    )
}

/// `{base}/{route}/{id}/{width}/{height}` with `id` escaped as one path
/// segment.
fn image_url(base: &str, route: &str, id: &str, (width, height): (u32, u32)) -> String {
    let width = width.to_string();
    let height = height.to_string();

    let Ok(mut url) = reqwest::Url::parse(base) else {
        tracing::debug!(base, "image base is not an absolute URL");
        return format!("{base}/{route}/{id}/{width}/{height}");
    };
    match url.path_segments_mut() {
        Ok(mut segments) => {
            segments
                .pop_if_empty()
                .extend([route, id, width.as_str(), height.as_str()]);
        }
        Err(()) => return format!("{base}/{route}/{id}/{width}/{height}"),
    }
    url.into()
}

/// Parses a listing body into photos.
///
/// Fails only if the body is not a JSON array. Elements that do not match
/// the backend's record shape are skipped.
pub fn parse_listing(config: &ApiConfig, body: &[u8]) -> Result<Vec<Photo>, ApiError> {
    let records: Vec<serde_json::Value> = serde_json::from_slice(body)?;
    let total = records.len();

    let photos: Vec<Photo> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match map_record(config, record) {
            Ok(photo) => Some(photo),
            Err(err) => {
                tracing::debug!(index, "dropping malformed photo record: {}", err);
                None
            }
        })
        .collect();

    if photos.len() < total {
        tracing::debug!(dropped = total - photos.len(), "listing contained malformed records");
    }
    Ok(photos)
}

fn map_record(config: &ApiConfig, record: serde_json::Value) -> Result<Photo, serde_json::Error> {
    match config.backend {
        ApiBackend::JsonPlaceholder => {
            let raw: PlaceholderRecord = serde_json::from_value(record)?;
            let (url, thumbnail_url) = image_urls(config, &raw.id);
            Ok(Photo {
                id: raw.id,
                title: raw.title.unwrap_or_default(),
                url,
                thumbnail_url,
                width: None,
                height: None,
                group: raw.album_id.map(GroupKey::Album),
            })
        }
        ApiBackend::Picsum => {
            let raw: PicsumRecord = serde_json::from_value(record)?;
            let (url, thumbnail_url) = image_urls(config, &raw.id);
            let author = raw.author.unwrap_or_default();
            let group = (!author.is_empty()).then(|| GroupKey::Author(author.clone()));
            Ok(Photo {
                id: raw.id,
                title: author,
                url,
                thumbnail_url,
                width: raw.width,
                height: raw.height,
                group,
            })
        }
    }
}

/// Keeps only photos whose display fields are all present, in order.
pub fn validate_photos(photos: Vec<Photo>) -> Vec<Photo> {
    let total = photos.len();
    let valid: Vec<Photo> = photos.into_iter().filter(Photo::is_displayable).collect();
    if valid.len() < total {
        tracing::debug!(dropped = total - valid.len(), "dropped photos missing display fields");
    }
    valid
}

/// Photos belonging to `group`, in their original order.
pub fn filter_by_group(photos: &[Photo], group: &GroupKey) -> Vec<Photo> {
    photos
        .iter()
        .filter(|photo| photo.group.as_ref() == Some(group))
        .cloned()
        .collect()
}

/// Sorted, distinct grouping keys present in `photos`.
pub fn unique_groups(photos: &[Photo]) -> Vec<GroupKey> {
    photos
        .iter()
        .filter_map(|photo| photo.group.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::sample_photo;

    fn placeholder_config() -> ApiConfig {
        ApiConfig {
            endpoint: Some("http://api.test/".into()),
            image_base: "https://img.test".into(),
            ..ApiConfig::default()
        }
    }

    fn picsum_config() -> ApiConfig {
        ApiConfig {
            backend: ApiBackend::Picsum,
            ..placeholder_config()
        }
    }

    #[test]
    fn listing_url_uses_backend_query_parameter() {
        assert_eq!(
            listing_url(&placeholder_config(), 50),
            "http://api.test/photos?_limit=50"
        );
        assert_eq!(
            listing_url(&picsum_config(), 30),
            "http://api.test/v2/list?limit=30"
        );
    }

    #[test]
    fn image_urls_are_seeded_by_identifier() {
        let config = placeholder_config();
        let (url, thumb) = image_urls(&config, &PhotoId::Int(3));
        assert_eq!(url, "https://img.test/seed/3/1200/800");
        assert_eq!(thumb, "https://img.test/seed/3/600/800");

        let (url, thumb) = image_urls(&picsum_config(), &PhotoId::Text("1084".into()));
        assert_eq!(url, "https://img.test/id/1084/1200/800");
        assert_eq!(thumb, "https://img.test/id/1084/600/800");
    }

    #[test]
    fn text_identifier_is_escaped_as_one_segment() {
        let (url, thumb) = image_urls(&picsum_config(), &PhotoId::Text("a b/c?d".into()));
        assert_eq!(url, "https://img.test/id/a%20b%2Fc%3Fd/1200/800");
        assert_eq!(thumb, "https://img.test/id/a%20b%2Fc%3Fd/600/800");
    }

    #[test]
    fn image_base_with_path_keeps_its_prefix() {
        let config = ApiConfig {
            image_base: "https://cdn.test/images/".into(),
            ..placeholder_config()
        };
        let (url, _) = image_urls(&config, &PhotoId::Int(5));
        assert_eq!(url, "https://cdn.test/images/seed/5/1200/800");
    }

    #[test]
    fn same_identifier_yields_identical_urls() {
        let config = placeholder_config();
        let body = br#"[{"albumId":1,"id":9,"title":"a"},{"albumId":2,"id":9,"title":"b"}]"#;
        let photos = parse_listing(&config, body).unwrap();
        assert_eq!(photos[0].url, photos[1].url);
        assert_eq!(photos[0].thumbnail_url, photos[1].thumbnail_url);
        assert_eq!(image_urls(&config, &photos[0].id).0, photos[0].url);
    }

    #[test]
    fn placeholder_records_map_title_and_album() {
        let body = br#"[{"albumId":2,"id":51,"title":"ut esse iure","url":"x","thumbnailUrl":"y"}]"#;
        let photos = parse_listing(&placeholder_config(), body).unwrap();

        assert_eq!(photos.len(), 1);
        let photo = &photos[0];
        assert_eq!(photo.id, PhotoId::Int(51));
        assert_eq!(photo.title, "ut esse iure");
        assert_eq!(photo.group, Some(GroupKey::Album(2)));
        // Upstream URLs are replaced by seeded ones
        assert_eq!(photo.url, "https://img.test/seed/51/1200/800");
    }

    #[test]
    fn picsum_records_use_author_and_dimensions() {
        let body = br#"[{"id":"0","author":"Alejandro Escamilla","width":5000,"height":3333,
            "url":"https://unsplash.com/x","download_url":"https://picsum.photos/id/0/5000/3333"}]"#;
        let photos = parse_listing(&picsum_config(), body).unwrap();

        let photo = &photos[0];
        assert_eq!(photo.id, PhotoId::Text("0".into()));
        assert_eq!(photo.title, "Alejandro Escamilla");
        assert_eq!(photo.width, Some(5000));
        assert_eq!(photo.height, Some(3333));
        assert_eq!(
            photo.group,
            Some(GroupKey::Author("Alejandro Escamilla".into()))
        );
    }

    #[test]
    fn malformed_records_are_dropped_not_fatal() {
        let body = br#"[{"albumId":1,"id":1,"title":"ok"},{"albumId":1,"title":"no id"},42]"#;
        let photos = parse_listing(&placeholder_config(), body).unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].id, PhotoId::Int(1));
    }

    #[test]
    fn non_array_body_is_an_error() {
        let err = parse_listing(&placeholder_config(), b"<html>oops</html>").unwrap_err();
        assert!(err.status.is_none());

        let err = parse_listing(&placeholder_config(), br#"{"photos":[]}"#).unwrap_err();
        assert!(err.message.starts_with("Invalid photo listing"));
    }

    #[test]
    fn missing_title_is_dropped_by_validation() {
        let body = br#"[
            {"albumId":1,"id":1,"title":"one"},
            {"albumId":1,"id":2,"title":"two"},
            {"albumId":1,"id":3},
            {"albumId":1,"id":4,"title":"four"},
            {"albumId":1,"id":5,"title":""},
            {"albumId":1,"id":6,"title":"six"}
        ]"#;
        let photos = validate_photos(parse_listing(&placeholder_config(), body).unwrap());
        let ids: Vec<String> = photos.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "6"]);
    }

    #[test]
    fn validate_preserves_order_of_remaining_photos() {
        let photos = vec![
            sample_photo(3, "c"),
            sample_photo(1, ""),
            sample_photo(2, "b"),
            Photo {
                url: String::new(),
                ..sample_photo(4, "d")
            },
            sample_photo(5, "e"),
        ];
        let valid = validate_photos(photos);
        let ids: Vec<PhotoId> = valid.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PhotoId::Int(3), PhotoId::Int(2), PhotoId::Int(5)]);
    }

    #[test]
    fn empty_listing_is_not_an_error() {
        let photos = parse_listing(&placeholder_config(), b"[]").unwrap();
        assert!(validate_photos(photos).is_empty());
    }

    #[test]
    fn filter_by_group_keeps_matching_photos_in_order() {
        let photos: Vec<Photo> = (1..=7).map(|id| sample_photo(id, "t")).collect();
        // sample_photo assigns album id % 3 + 1
        let album_two = filter_by_group(&photos, &GroupKey::Album(2));
        let ids: Vec<PhotoId> = album_two.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PhotoId::Int(1), PhotoId::Int(4), PhotoId::Int(7)]);
    }

    #[test]
    fn unique_groups_are_sorted_and_distinct() {
        let photos: Vec<Photo> = (1..=7).map(|id| sample_photo(id, "t")).collect();
        assert_eq!(
            unique_groups(&photos),
            vec![GroupKey::Album(1), GroupKey::Album(2), GroupKey::Album(3)]
        );
        assert!(unique_groups(&[]).is_empty());
    }
}
