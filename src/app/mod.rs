// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns the gallery, the localization bundle and the photo service,
//! and turns the gallery's effects into tasks (see [`update`]).

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::ApiError;
use crate::i18n::I18n;
use crate::photo::PhotoService;
use crate::ui::gallery;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    service: Result<PhotoService, ApiError>,
    /// Page size override from the command line.
    limit: Option<usize>,
    theme: Theme,
    /// i18n key of a settings problem found at startup.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", self.gallery.phase())
            .field("photos", &self.gallery.photos().len())
            .field("slider_open", &self.gallery.slider().is_some())
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, then mounts the gallery.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, warning) = config::load();
        Self::with_config(config, warning, flags)
    }

    /// Builds the application from an already loaded configuration.
    pub fn with_config(
        mut config: Config,
        warning: Option<String>,
        flags: Flags,
    ) -> (Self, Task<Message>) {
        if let Some(backend) = flags.backend {
            if backend != config.api.backend {
                // A configured endpoint belongs to the configured backend
                config.api.endpoint = None;
            }
            config.api.backend = backend;
        }

        let i18n = I18n::new(flags.lang, &config);
        let theme = config.general.theme_mode.theme();
        let service = PhotoService::new(config.api.clone());
        if let Err(error) = &service {
            tracing::error!(%error, "could not build the HTTP client");
        }

        let (gallery, effect) = gallery::State::mount(&config.gallery);
        let app = App {
            i18n,
            gallery,
            service,
            limit: flags.limit,
            theme,
            warning,
        };
        let task = app.run_effect(effect);
        (app, task)
    }

    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    pub fn title(&self) -> String {
        match self.gallery.selected_photo() {
            Some(photo) => self
                .i18n
                .tr_with_args("window-title-viewing", &[("title", photo.title.as_str())]),
            None => self.i18n.tr("window-title"),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.gallery.subscription().map(Message::Gallery)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                let effect = self.gallery.handle(message);
                self.run_effect(effect)
            }
            Message::DismissWarning => {
                self.warning = None;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            warning: self.warning.as_deref(),
        })
    }

    fn run_effect(&self, effect: gallery::Effect) -> Task<Message> {
        update::run_effect(
            update::EffectContext {
                service: &self.service,
                limit: self.limit,
            },
            effect,
        )
    }
}
