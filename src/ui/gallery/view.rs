// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering: skeleton, error card, header and masonry grid.

use super::masonry::{self, CardHeight};
use super::{Message, Phase, State};
use crate::config::SKELETON_CARD_COUNT;
use crate::error::ApiError;
use crate::i18n::I18n;
use crate::photo::{GroupKey, ImageCache, Photo};
use crate::ui::components::error_display::ErrorDisplay;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::slider;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::scroll_suspend;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, image, opaque, pick_list, responsive, text, Column, Container, Row, Scrollable, Space,
    Stack, Text,
};
use iced::{ContentFit, Element, Length, Size, Theme};
use std::fmt;

/// Number of title words shown on a card.
const CARD_TITLE_WORDS: usize = 4;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Entry of the album/author picker.
#[derive(Debug, Clone, PartialEq)]
struct FilterOption {
    key: Option<GroupKey>,
    label: String,
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let body: Element<'a, Message> = match state.phase() {
        Phase::Loading => skeleton(state.columns()),
        Phase::Failed(error) => failed(error, i18n),
        Phase::Ready => ready(state, i18n),
    };

    let page = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    match state.slider() {
        Some(open) => {
            let overlay = open
                .view(slider::ViewContext {
                    photos: state.visible_photos(),
                    images: state.images(),
                    i18n,
                })
                .map(Message::Slider);
            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(page)
                .push(opaque(overlay))
                .into()
        }
        None => page.into(),
    }
}

fn failed<'a>(error: &ApiError, i18n: &'a I18n) -> Element<'a, Message> {
    let mut display = ErrorDisplay::new()
        .title(i18n.tr("gallery-error-title"))
        .message(i18n.tr(error.i18n_key()))
        .details(error.message.clone());
    if let Some(status) = error.status {
        let status = status.to_string();
        display = display.details(
            i18n.tr_with_args("gallery-error-status", &[("status", status.as_str())]),
        );
    }
    let card = display.action(i18n.tr("gallery-retry"), Message::Retry).view();

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn ready<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let photos = state.visible_photos();

    let count = photos.len().to_string();
    let summary = format!(
        "{} • {}",
        i18n.tr_with_args("gallery-count", &[("count", count.as_str())]),
        i18n.tr("gallery-hint")
    );

    let mut header = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(i18n.tr("gallery-title"))
                .size(typography::TITLE_LG)
                .style(accent_text),
        )
        .push(Text::new(summary).size(typography::CAPTION).style(secondary_text));

    let groups = state.groups();
    if groups.len() > 1 {
        header = header.push(filter_picker(state.filter(), groups, i18n));
    }

    let grid: Element<'a, Message> = if photos.is_empty() {
        Container::new(Text::new(i18n.tr("gallery-empty")).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::XXL)
            .align_x(Horizontal::Center)
            .into()
    } else {
        let fixed = state.columns();
        let images = state.images();
        responsive(move |size: Size| photo_grid(photos, images, fixed, size.width, i18n)).into()
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header)
        .push(grid);

    let scrollable = Scrollable::new(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    scroll_suspend(scrollable, state.is_scroll_locked()).into()
}

fn filter_picker<'a>(
    selected: Option<&GroupKey>,
    groups: Vec<GroupKey>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let all = FilterOption {
        key: None,
        label: i18n.tr("gallery-filter-all"),
    };
    let mut options = vec![all.clone()];
    options.extend(groups.into_iter().map(|group| FilterOption {
        label: group.to_string(),
        key: Some(group),
    }));
    let current = options
        .iter()
        .find(|option| option.key.as_ref() == selected)
        .cloned()
        .unwrap_or(all);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr("gallery-filter-label")).size(typography::BODY))
        .push(
            pick_list(options, Some(current), |option: FilterOption| {
                Message::FilterChanged(option.key)
            })
            .text_size(typography::BODY),
        )
        .into()
}

fn photo_grid<'a>(
    photos: &'a [Photo],
    images: &'a ImageCache,
    fixed_columns: Option<usize>,
    width: f32,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let columns = masonry::resolve_columns(fixed_columns, width);
    let placed = masonry::distribute(photos.len(), columns);

    Row::with_children(placed.into_iter().map(|indices| {
        Column::with_children(
            indices
                .into_iter()
                .map(|index| photo_card(&photos[index], index, images, i18n)),
        )
        .spacing(spacing::LG)
        .width(Length::FillPortion(1))
        .into()
    }))
    .spacing(spacing::LG)
    .width(Length::Fill)
    .into()
}

fn photo_card<'a>(
    photo: &'a Photo,
    index: usize,
    images: &'a ImageCache,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let height = CardHeight::for_index(index).pixels();

    let picture: Element<'a, Message> = match images.peek(&photo.thumbnail_url) {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(height)
            .into(),
        None => Container::new(Text::new(i18n.tr("gallery-thumbnail-loading")).size(typography::CAPTION))
            .width(Length::Fill)
            .height(height)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::card_image)
            .into(),
    };

    let id = photo.id.to_string();
    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr_with_args("gallery-photo-number", &[("id", id.as_str())]))
                .size(typography::CAPTION)
                .style(secondary_text),
        )
        .push(
            Text::new(photo.short_title(CARD_TITLE_WORDS))
                .size(typography::TITLE_SM)
                .style(accent_text),
        );

    let card = Column::new().push(picture).push(
        Container::new(caption)
            .width(Length::Fill)
            .height(sizing::CARD_CAPTION)
            .padding(spacing::MD)
            .style(styles::container::card_caption),
    );

    button(card)
        .padding(0.0)
        .width(Length::Fill)
        .on_press(Message::SelectPhoto(photo.id.clone()))
        .style(styles::button::card)
        .into()
}

fn skeleton<'a>(fixed_columns: Option<usize>) -> Element<'a, Message> {
    let header = Column::new()
        .spacing(spacing::SM)
        .push(bar(256.0, 40.0))
        .push(bar(192.0, 16.0));

    let grid = responsive(move |size: Size| {
        let columns = masonry::resolve_columns(fixed_columns, size.width);
        let placed = masonry::distribute(SKELETON_CARD_COUNT, columns);
        Row::with_children(placed.into_iter().map(|indices| {
            Column::with_children(indices.into_iter().map(skeleton_card))
                .spacing(spacing::LG)
                .width(Length::FillPortion(1))
                .into()
        }))
        .spacing(spacing::LG)
        .width(Length::Fill)
        .into()
    });

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header)
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .into()
}

fn skeleton_card<'a>(index: usize) -> Element<'a, Message> {
    let caption = Column::new()
        .spacing(spacing::XS)
        .push(bar(80.0, 12.0))
        .push(bar(180.0, 20.0));

    Container::new(
        Column::new()
            .push(
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(CardHeight::for_index(index).pixels())
                    .style(styles::container::card_image),
            )
            .push(
                Container::new(caption)
                    .width(Length::Fill)
                    .height(sizing::CARD_CAPTION)
                    .padding(spacing::MD),
            ),
    )
    .width(Length::Fill)
    .style(styles::container::skeleton_card)
    .into()
}

fn bar<'a>(width: f32, height: f32) -> Element<'a, Message> {
    Container::new(Space::new())
        .width(width)
        .height(height)
        .style(styles::container::skeleton)
        .into()
}

fn accent_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).accent),
    }
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}
