// SPDX-License-Identifier: MPL-2.0
//! Slider layout: backdrop, slide, navigation arrows and close button.

use super::{Carousel, CloseTrigger, Message};
use crate::i18n::I18n;
use crate::photo::{ImageCache, Photo};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, tooltip, Column, Container, Row, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Upper bound of the slide width, matching the gallery content width.
const SLIDE_MAX_WIDTH: f32 = sizing::CONTENT_MAX_WIDTH - 128.0;

pub struct ViewContext<'a> {
    pub photos: &'a [Photo],
    pub images: &'a ImageCache,
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'a>, carousel: &Carousel) -> Element<'a, Message> {
    let Some(photo) = ctx.photos.get(carousel.position()) else {
        return backdrop(Column::new().into());
    };

    let slide = slide(&ctx, photo, carousel);

    let previous = nav_button(
        "‹",
        ctx.i18n.tr("slider-previous"),
        carousel.has_previous().then_some(Message::Previous),
    );
    let next = nav_button(
        "›",
        ctx.i18n.tr("slider-next"),
        carousel.has_next().then_some(Message::Next),
    );

    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(previous)
        .push(slide)
        .push(next);

    // Everything inside the slide area swallows presses, so only the margin
    // around it acts as backdrop.
    let content = mouse_area(
        Container::new(content)
            .max_width(SLIDE_MAX_WIDTH)
            .height(Length::Fill),
    )
    .on_press(Message::ContentPressed);

    let centered = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::XXL, spacing::XS])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let close = close_button(ctx.i18n.tr("slider-close"));

    let close_layer = Container::new(close)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top);

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(centered)
        .push(close_layer);

    backdrop(layers.into())
}

fn backdrop(content: Element<'_, Message>) -> Element<'_, Message> {
    mouse_area(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::CloseRequested(CloseTrigger::Backdrop))
    .into()
}

fn slide<'a>(ctx: &ViewContext<'a>, photo: &'a Photo, carousel: &Carousel) -> Element<'a, Message> {
    // Full resolution when ready, the grid thumbnail meanwhile
    let handle = ctx
        .images
        .peek(&photo.url)
        .or_else(|| ctx.images.peek(&photo.thumbnail_url));

    let picture: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(Text::new(ctx.i18n.tr("slider-image-loading")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    };

    let caption = Container::new(
        Text::new(photo.title.as_str())
            .size(typography::BODY)
            .align_x(Horizontal::Center),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::slide_caption);

    let current = (carousel.position() + 1).to_string();
    let total = carousel.len().to_string();
    let counter = Text::new(ctx.i18n.tr_with_args(
        "slider-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION);

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture)
        .push(caption)
        .push(counter)
        .into()
}

/// Arrow button; disabled (no message) at the carousel boundaries.
fn nav_button<'a>(glyph: &'a str, label: String, message: Option<Message>) -> Element<'a, Message> {
    let arrow = button(
        Text::new(glyph)
            .size(typography::TITLE_LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(sizing::NAV_BUTTON)
    .height(sizing::NAV_BUTTON)
    .on_press_maybe(message)
    .style(styles::button_overlay(
        palette::WHITE,
        opacity::OVERLAY_STRONG,
        opacity::OVERLAY_HOVER,
    ));

    tooltip(arrow, Text::new(label).size(typography::CAPTION), tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .style(styles::container::slide_caption)
        .into()
}

fn close_button<'a>(label: String) -> Element<'a, Message> {
    let close = button(
        Text::new("✕")
            .size(typography::TITLE_MD)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(sizing::CLOSE_BUTTON)
    .height(sizing::CLOSE_BUTTON)
    .on_press(Message::CloseRequested(CloseTrigger::Button))
    .style(styles::button_overlay(
        palette::WHITE,
        opacity::OVERLAY_STRONG,
        opacity::OVERLAY_HOVER,
    ));

    tooltip(close, Text::new(label).size(typography::CAPTION), tooltip::Position::Left)
        .gap(spacing::XXS)
        .style(styles::container::slide_caption)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::photo::sample_photo;

    #[test]
    fn close_label_is_localized() {
        let en = I18n::new(Some("en-US".into()), &Config::default());
        let fr = I18n::new(Some("fr".into()), &Config::default());
        assert_eq!(en.tr("slider-close"), "Close slider");
        assert_eq!(fr.tr("slider-close"), "Fermer le diaporama");
    }

    #[test]
    fn slider_renders_at_both_ends() {
        let i18n = I18n::default();
        let images = ImageCache::new(4);
        let photos = vec![sample_photo(1, "a b"), sample_photo(2, "c d")];

        let mut carousel = Carousel::new(photos.len(), 0);
        let _ = view(ViewContext { photos: &photos, images: &images, i18n: &i18n }, &carousel);

        carousel.next();
        let _ = view(ViewContext { photos: &photos, images: &images, i18n: &i18n }, &carousel);
    }
}
