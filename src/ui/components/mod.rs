// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_display`] - Error card with heading, explanation, details and
//!   an action button

pub mod error_display;
