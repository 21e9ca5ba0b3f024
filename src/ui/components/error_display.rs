// SPDX-License-Identifier: MPL-2.0
//! Error card with a heading, an explanation and an optional action.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::ErrorDisplay;
//!
//! ErrorDisplay::new()
//!     .title("Oops! Something went wrong")
//!     .message("The photo service could not be reached.")
//!     .details("HTTP error: status 500")
//!     .action("Try again", Message::Retry)
//!     .view()
//! ```

use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: Option<String>,
    message: Option<String>,
    details: Vec<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            details: Vec::new(),
            action_label: None,
            action_message: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title (main heading).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (user-friendly explanation).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds one line of secondary detail (raw error text, status code).
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details.push(details.into());
        self
    }

    /// Sets the action button label and message.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    pub fn has_action(&self) -> bool {
        self.action_message.is_some()
    }

    /// Renders the card.
    pub fn view(self) -> Element<'static, Message> {
        let badge = Container::new(Text::new("!").size(typography::TITLE_LG).style(
            |_theme: &Theme| text::Style {
                color: Some(palette::ERROR_500),
            },
        ))
        .width(sizing::ICON_XL)
        .height(sizing::ICON_XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::ERROR_500
            })),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(badge);

        if let Some(title) = self.title {
            content = content.push(Text::new(title).size(typography::TITLE_MD));
        }

        if let Some(message) = self.message {
            content = content.push(
                Container::new(Text::new(message).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        for line in self.details {
            content = content.push(Text::new(line).size(typography::CAPTION).style(
                |theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                },
            ));
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            let action = button(Text::new(label).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .on_press(msg)
                .style(styles::button_primary);
            content = content.push(Container::new(action).padding(spacing::XS));
        }

        Container::new(content)
            .padding(spacing::XL)
            .max_width(sizing::ERROR_CARD_WIDTH)
            .style(styles::container::error_card)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
    }

    #[test]
    fn builder_collects_fields() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new()
            .title("Oops")
            .message("Unreachable")
            .details("HTTP error: status 500")
            .details("Status code: 500")
            .action("Try again", TestMessage::Retry);

        assert_eq!(display.title.as_deref(), Some("Oops"));
        assert_eq!(display.details.len(), 2);
        assert!(display.has_action());
        assert_eq!(display.action_message, Some(TestMessage::Retry));
    }

    #[test]
    fn view_renders_without_action() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new().title("Oops");
        assert!(!display.has_action());
        let _element = display.view();
    }
}
