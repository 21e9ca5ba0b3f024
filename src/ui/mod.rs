// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The gallery screen owns its state and hands messages up to the `App`
//! following the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Masonry grid of photos with loading and error states
//! - [`slider`] - Full-window viewer opened over the gallery
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (scroll suspension)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod slider;
pub mod styles;
pub mod theming;
pub mod widgets;
