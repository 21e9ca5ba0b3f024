// SPDX-License-Identifier: MPL-2.0
//! Translation of gallery effects into Iced tasks.
//!
//! This is the only place that touches the network: the gallery describes
//! what it needs and the tasks built here answer with gallery messages.

use super::Message;
use crate::error::ApiError;
use crate::photo::images::download_all;
use crate::photo::PhotoService;
use crate::ui::gallery::{self, Effect};
use iced::Task;

pub struct EffectContext<'a> {
    pub service: &'a Result<PhotoService, ApiError>,
    /// Page size override from the command line.
    pub limit: Option<usize>,
}

pub fn run_effect(ctx: EffectContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::FetchPhotos { request } => fetch_photos(ctx, request),
        Effect::LoadImages(urls) => load_images(ctx, urls),
    }
}

fn fetch_photos(ctx: EffectContext<'_>, request: u64) -> Task<Message> {
    let service = match ctx.service {
        Ok(service) => service.clone(),
        Err(error) => {
            // No usable client, the fetch fails like a transport error would
            return Task::done(Message::Gallery(gallery::Message::PhotosLoaded {
                request,
                result: Err(error.clone()),
            }));
        }
    };
    let limit = ctx.limit;

    Task::perform(
        async move { service.fetch_photos(limit).await },
        move |result| Message::Gallery(gallery::Message::PhotosLoaded { request, result }),
    )
}

fn load_images(ctx: EffectContext<'_>, urls: Vec<String>) -> Task<Message> {
    let Ok(service) = ctx.service else {
        return Task::none();
    };
    tracing::debug!(count = urls.len(), "downloading images");

    Task::run(download_all(service.client().clone(), urls), |loaded| {
        Message::Gallery(gallery::Message::ImageLoaded(loaded))
    })
}
