// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an online photo gallery built with the Iced GUI framework.
//!
//! It fetches a photo listing from a public JSON API, lays the thumbnails out
//! in a masonry grid and opens a full-window slider on click. Strings are
//! localized with Fluent and preferences live in a small TOML file.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod photo;
pub mod ui;
