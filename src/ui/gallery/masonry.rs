// SPDX-License-Identifier: MPL-2.0
//! Masonry placement of gallery cards.
//!
//! Card image heights cycle through three sizes by index. Each card goes to
//! the column that is currently shortest, the leftmost one on ties, so the
//! columns stay balanced without row alignment.

use crate::config::{MAX_COLUMNS, MIN_COLUMNS};
use crate::ui::design_tokens::{sizing, spacing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHeight {
    Tall,
    Medium,
    Short,
}

impl CardHeight {
    pub fn for_index(index: usize) -> Self {
        if index % 5 == 0 {
            CardHeight::Tall
        } else if index % 3 == 0 {
            CardHeight::Medium
        } else {
            CardHeight::Short
        }
    }

    /// Height of the image area.
    pub fn pixels(self) -> f32 {
        match self {
            CardHeight::Tall => sizing::CARD_TALL,
            CardHeight::Medium => sizing::CARD_MEDIUM,
            CardHeight::Short => sizing::CARD_SHORT,
        }
    }

    /// Height of the whole card including caption and gap.
    fn footprint(self) -> f32 {
        self.pixels() + sizing::CARD_CAPTION + spacing::LG
    }
}

/// Column count for a content width.
pub fn columns_for_width(width: f32) -> usize {
    if width < sizing::BREAKPOINT_SM {
        1
    } else if width < sizing::BREAKPOINT_LG {
        2
    } else {
        3
    }
}

/// Column count honoring a fixed configured value.
pub fn resolve_columns(fixed: Option<usize>, width: f32) -> usize {
    fixed
        .unwrap_or_else(|| columns_for_width(width))
        .clamp(MIN_COLUMNS, MAX_COLUMNS)
}

/// Distributes `count` cards over `columns` columns.
///
/// Returns, per column, the card indices in top-to-bottom order.
pub fn distribute(count: usize, columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut placed: Vec<Vec<usize>> = vec![Vec::new(); columns];
    let mut heights = vec![0.0_f32; columns];

    for index in 0..count {
        let mut target = 0;
        for (column, height) in heights.iter().enumerate().skip(1) {
            if *height < heights[target] {
                target = column;
            }
        }
        placed[target].push(index);
        heights[target] += CardHeight::for_index(index).footprint();
    }

    placed
}
