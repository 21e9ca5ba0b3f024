// SPDX-License-Identifier: MPL-2.0
//! Full-window slider shown over the gallery.
//!
//! The slider is created when a photo is selected and dropped when it
//! closes. It owns two scoped resources for its whole lifetime:
//!
//! - a [`ScrollGuard`], which keeps the gallery grid from scrolling
//! - the keyboard listener, which exists only because [`State::subscription`]
//!   is asked for while a `State` is alive
//!
//! Position bookkeeping is delegated to the embedded [`Carousel`]; the host
//! only supplies the initial position and reacts to [`Event::Close`].

pub mod carousel;
pub mod scroll_lock;
mod view;

pub use carousel::Carousel;
pub use scroll_lock::{ScrollGuard, ScrollLock};
pub use view::ViewContext;

use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Element, Subscription};

/// What caused the slider to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The close button in the corner.
    Button,
    /// A press on the backdrop around the slide.
    Backdrop,
    /// The Escape key.
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Next,
    Previous,
    CloseRequested(CloseTrigger),
    /// Press inside the slide area. Swallowed so it never reaches the backdrop.
    ContentPressed,
}

/// Events reported to the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close(CloseTrigger),
    /// The visible slide changed to this position.
    PositionChanged(usize),
}

#[derive(Debug)]
pub struct State {
    carousel: Carousel,
    _scroll: ScrollGuard,
}

impl State {
    /// Opens the slider over `len` photos at `initial`.
    ///
    /// `scroll` is held until the slider is dropped.
    pub fn open(len: usize, initial: usize, scroll: ScrollGuard) -> Self {
        let mut carousel = Carousel::new(len, 0);
        carousel.jump_to(initial);
        Self {
            carousel,
            _scroll: scroll,
        }
    }

    pub fn position(&self) -> usize {
        self.carousel.position()
    }

    pub fn handle(&mut self, message: Message) -> Event {
        let moved = match message {
            Message::Next => self.carousel.next(),
            Message::Previous => self.carousel.previous(),
            Message::CloseRequested(trigger) => return Event::Close(trigger),
            Message::ContentPressed => return Event::None,
        };

        match moved {
            Some(position) => {
                tracing::debug!(
                    slide = position + 1,
                    total = self.carousel.len(),
                    "slide changed"
                );
                Event::PositionChanged(position)
            }
            None => Event::None,
        }
    }

    /// Keyboard listener. Only subscribe while a slider is open.
    pub fn subscription() -> Subscription<Message> {
        event::listen_with(on_native_event)
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::view(ctx, &self.carousel)
    }
}

fn on_native_event(
    event: iced::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => key_message(&key),
        _ => None,
    }
}

/// Slider message bound to `key`, if any.
pub fn key_message(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::CloseRequested(CloseTrigger::Escape)),
        Key::Named(Named::ArrowRight) => Some(Message::Next),
        Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(len: usize, initial: usize) -> (State, ScrollLock) {
        let lock = ScrollLock::new();
        let state = State::open(len, initial, lock.acquire());
        (state, lock)
    }

    #[test]
    fn opening_locks_scrolling_until_dropped() {
        let (state, lock) = open(3, 0);
        assert!(lock.is_locked());
        drop(state);
        assert!(!lock.is_locked());
    }

    #[test]
    fn navigation_reports_new_position() {
        let (mut state, _lock) = open(3, 1);
        assert_eq!(state.handle(Message::Next), Event::PositionChanged(2));
        assert_eq!(state.handle(Message::Next), Event::None);
        assert_eq!(state.handle(Message::Previous), Event::PositionChanged(1));
        assert_eq!(state.position(), 1);
    }

    #[test]
    fn close_requests_are_forwarded() {
        let (mut state, _lock) = open(3, 0);
        for trigger in [
            CloseTrigger::Button,
            CloseTrigger::Backdrop,
            CloseTrigger::Escape,
        ] {
            assert_eq!(
                state.handle(Message::CloseRequested(trigger)),
                Event::Close(trigger)
            );
        }
    }

    #[test]
    fn content_press_does_nothing() {
        let (mut state, _lock) = open(3, 2);
        assert_eq!(state.handle(Message::ContentPressed), Event::None);
        assert_eq!(state.position(), 2);
    }

    #[test]
    fn keys_map_to_messages() {
        assert_eq!(
            key_message(&Key::Named(Named::Escape)),
            Some(Message::CloseRequested(CloseTrigger::Escape))
        );
        assert_eq!(key_message(&Key::Named(Named::ArrowRight)), Some(Message::Next));
        assert_eq!(
            key_message(&Key::Named(Named::ArrowLeft)),
            Some(Message::Previous)
        );
        assert_eq!(key_message(&Key::Named(Named::Enter)), None);
        assert_eq!(key_message(&Key::Character("a".into())), None);
    }
}
