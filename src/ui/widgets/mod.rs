// SPDX-License-Identifier: MPL-2.0
pub mod scroll_suspend;

pub use scroll_suspend::{scroll_suspend, ScrollSuspend};
