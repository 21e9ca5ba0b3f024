// SPDX-License-Identifier: MPL-2.0
use iced::widget::image::Handle;
use iced_gallery::config::GalleryConfig;
use iced_gallery::error::ApiError;
use iced_gallery::photo::images::LoadedImage;
use iced_gallery::photo::{GroupKey, Photo, PhotoId};
use iced_gallery::ui::gallery::{Effect, Message, Phase, State};
use iced_gallery::ui::slider::{self, CloseTrigger};

fn photo(id: u64, title: &str) -> Photo {
    Photo {
        id: PhotoId::Int(id),
        title: title.to_string(),
        url: format!("https://img.test/seed/{id}/1200/800"),
        thumbnail_url: format!("https://img.test/seed/{id}/600/800"),
        width: None,
        height: None,
        group: Some(GroupKey::Album(if id <= 3 { 1 } else { 2 })),
    }
}

fn photos(count: u64) -> Vec<Photo> {
    (1..=count).map(|id| photo(id, "quidem molestiae enim")).collect()
}

fn ready_gallery(count: u64) -> State {
    let (mut state, _) = State::mount(&GalleryConfig::default());
    state.handle(Message::PhotosLoaded {
        request: 1,
        result: Ok(photos(count)),
    });
    assert_eq!(state.phase(), &Phase::Ready);
    state
}

#[test]
fn mount_requests_exactly_one_fetch() {
    let (state, effect) = State::mount(&GalleryConfig::default());
    assert_eq!(effect, Effect::FetchPhotos { request: 1 });
    assert_eq!(state.phase(), &Phase::Loading);
    assert!(state.photos().is_empty());
}

#[test]
fn server_error_then_single_retry() {
    let (mut state, _) = State::mount(&GalleryConfig::default());
    state.handle(Message::PhotosLoaded {
        request: 1,
        result: Err(ApiError::http_status(500)),
    });

    match state.phase() {
        Phase::Failed(error) => {
            assert_eq!(error.status, Some(500));
            assert!(error.message.contains("500"));
        }
        other => panic!("expected failure, got {:?}", other),
    }

    assert_eq!(state.handle(Message::Retry), Effect::FetchPhotos { request: 2 });
    assert_eq!(state.phase(), &Phase::Loading);
    // Already loading again: a second press starts nothing
    assert_eq!(state.handle(Message::Retry), Effect::None);

    state.handle(Message::PhotosLoaded {
        request: 2,
        result: Ok(photos(2)),
    });
    assert_eq!(state.phase(), &Phase::Ready);
    assert_eq!(state.photos().len(), 2);
}

#[test]
fn empty_listing_is_ready_with_no_cards() {
    let (mut state, _) = State::mount(&GalleryConfig::default());
    let effect = state.handle(Message::PhotosLoaded {
        request: 1,
        result: Ok(Vec::new()),
    });
    assert_eq!(state.phase(), &Phase::Ready);
    assert!(state.visible_photos().is_empty());
    assert_eq!(effect, Effect::None);
}

#[test]
fn untitled_photo_is_not_shown() {
    let (mut state, _) = State::mount(&GalleryConfig::default());
    let mut listing = photos(5);
    listing.insert(2, photo(99, ""));

    state.handle(Message::PhotosLoaded {
        request: 1,
        result: Ok(listing),
    });

    assert_eq!(state.photos().len(), 5);
    assert!(state.position_of(&PhotoId::Int(99)).is_none());
}

#[test]
fn ready_gallery_requests_thumbnails() {
    let (mut state, _) = State::mount(&GalleryConfig::default());
    let effect = state.handle(Message::PhotosLoaded {
        request: 1,
        result: Ok(photos(2)),
    });
    assert_eq!(
        effect,
        Effect::LoadImages(vec![
            "https://img.test/seed/1/600/800".to_string(),
            "https://img.test/seed/2/600/800".to_string(),
        ])
    );
}

#[test]
fn stale_listing_is_ignored() {
    let (mut state, _) = State::mount(&GalleryConfig::default());
    state.handle(Message::PhotosLoaded {
        request: 1,
        result: Err(ApiError::new("connection refused")),
    });
    state.handle(Message::Retry);

    // The first request answering late must not replace the second one
    let effect = state.handle(Message::PhotosLoaded {
        request: 1,
        result: Ok(photos(4)),
    });
    assert_eq!(effect, Effect::None);
    assert_eq!(state.phase(), &Phase::Loading);
    assert_eq!(state.request(), 2);
}

#[test]
fn selecting_opens_slider_at_photo_position() {
    let mut state = ready_gallery(5);
    state.handle(Message::SelectPhoto(PhotoId::Int(4)));

    assert_eq!(state.selected_position(), Some(3));
    assert_eq!(state.selected_photo().map(|p| &p.id), Some(&PhotoId::Int(4)));
    assert!(state.is_scroll_locked());
}

#[test]
fn unknown_photo_leaves_slider_closed() {
    let mut state = ready_gallery(3);
    let effect = state.handle(Message::SelectPhoto(PhotoId::Int(42)));
    assert_eq!(effect, Effect::None);
    assert!(state.slider().is_none());
    assert!(!state.is_scroll_locked());
}

#[test]
fn every_close_trigger_restores_scrolling() {
    for trigger in [
        CloseTrigger::Button,
        CloseTrigger::Backdrop,
        CloseTrigger::Escape,
    ] {
        let mut state = ready_gallery(3);
        state.handle(Message::SelectPhoto(PhotoId::Int(2)));
        assert!(state.is_scroll_locked());

        state.handle(Message::Slider(slider::Message::CloseRequested(trigger)));
        assert!(state.slider().is_none(), "{:?} left the slider open", trigger);
        assert!(!state.is_scroll_locked(), "{:?} kept scrolling locked", trigger);
    }
}

#[test]
fn reopening_keeps_a_single_lock() {
    let mut state = ready_gallery(3);
    state.handle(Message::SelectPhoto(PhotoId::Int(1)));
    state.handle(Message::SelectPhoto(PhotoId::Int(3)));
    state.handle(Message::Slider(slider::Message::CloseRequested(
        CloseTrigger::Escape,
    )));
    assert!(!state.is_scroll_locked());
}

#[test]
fn navigation_stops_at_both_ends() {
    let mut state = ready_gallery(3);
    state.handle(Message::SelectPhoto(PhotoId::Int(1)));

    assert_eq!(state.handle(Message::Slider(slider::Message::Previous)), Effect::None);
    assert_eq!(state.selected_position(), Some(0));

    state.handle(Message::Slider(slider::Message::Next));
    state.handle(Message::Slider(slider::Message::Next));
    state.handle(Message::Slider(slider::Message::Next));
    assert_eq!(state.selected_position(), Some(2));
}

#[test]
fn content_press_keeps_slider_open() {
    let mut state = ready_gallery(3);
    state.handle(Message::SelectPhoto(PhotoId::Int(2)));
    state.handle(Message::Slider(slider::Message::ContentPressed));
    assert_eq!(state.selected_position(), Some(1));
    assert!(state.is_scroll_locked());
}

#[test]
fn dropping_gallery_releases_scroll_lock() {
    let mut state = ready_gallery(3);
    state.handle(Message::SelectPhoto(PhotoId::Int(2)));
    let observer = state.scroll_lock().clone();
    assert!(observer.is_locked());

    drop(state);
    assert!(!observer.is_locked());
}

#[test]
fn filter_narrows_grid_and_slider_range() {
    let mut state = ready_gallery(5);
    state.handle(Message::FilterChanged(Some(GroupKey::Album(2))));

    let ids: Vec<_> = state.visible_photos().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![PhotoId::Int(4), PhotoId::Int(5)]);

    state.handle(Message::SelectPhoto(PhotoId::Int(5)));
    assert_eq!(state.selected_position(), Some(1));
    state.handle(Message::Slider(slider::Message::Next));
    assert_eq!(state.selected_position(), Some(1));
}

/// Answers every download requested by `effect` with a tiny image.
fn complete_downloads(state: &mut State, effect: Effect) {
    if let Effect::LoadImages(urls) = effect {
        for url in urls {
            state.handle(Message::ImageLoaded(LoadedImage {
                url,
                result: Ok(Handle::from_bytes(vec![0u8; 4])),
            }));
        }
    }
}

#[test]
fn large_listing_keeps_every_thumbnail_after_browsing() {
    let config = GalleryConfig::default();
    let (mut state, _) = State::mount(&config);
    let count = config.image_cache_entries() as u64 + 72;

    let effect = state.handle(Message::PhotosLoaded {
        request: 1,
        result: Ok(photos(count)),
    });
    complete_downloads(&mut state, effect);

    let effect = state.handle(Message::SelectPhoto(PhotoId::Int(1)));
    complete_downloads(&mut state, effect);
    for _ in 0..150 {
        let effect = state.handle(Message::Slider(slider::Message::Next));
        complete_downloads(&mut state, effect);
    }
    state.handle(Message::Slider(slider::Message::CloseRequested(
        CloseTrigger::Escape,
    )));

    let missing = state
        .visible_photos()
        .iter()
        .filter(|p| state.images().peek(&p.thumbnail_url).is_none())
        .count();
    assert_eq!(missing, 0, "grid cards left without a thumbnail");
}
