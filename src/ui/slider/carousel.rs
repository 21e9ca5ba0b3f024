// SPDX-License-Identifier: MPL-2.0
//! Slide position of the slider.
//!
//! Positions are clamped to `0..len`; there is no wraparound. Every
//! mutating call reports the new position only when it actually changed,
//! which is how the slider learns about slide changes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    position: usize,
}

impl Carousel {
    /// Creates a carousel over `len` slides starting at `initial`
    /// (clamped to the last slide).
    pub fn new(len: usize, initial: usize) -> Self {
        Self {
            len,
            position: initial.min(len.saturating_sub(1)),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    pub fn has_next(&self) -> bool {
        self.position + 1 < self.len
    }

    /// Moves to `position`, clamped to the last slide.
    pub fn jump_to(&mut self, position: usize) -> Option<usize> {
        self.set(position.min(self.len.saturating_sub(1)))
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.has_next() {
            self.set(self.position + 1)
        } else {
            None
        }
    }

    pub fn previous(&mut self) -> Option<usize> {
        if self.has_previous() {
            self.set(self.position - 1)
        } else {
            None
        }
    }

    fn set(&mut self, position: usize) -> Option<usize> {
        if position == self.position {
            return None;
        }
        self.position = position;
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_is_clamped() {
        assert_eq!(Carousel::new(5, 2).position(), 2);
        assert_eq!(Carousel::new(5, 9).position(), 4);
        assert_eq!(Carousel::new(0, 3).position(), 0);
    }

    #[test]
    fn next_stops_at_last_slide() {
        let mut carousel = Carousel::new(3, 1);
        assert_eq!(carousel.next(), Some(2));
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.position(), 2);
        assert!(!carousel.has_next());
    }

    #[test]
    fn previous_stops_at_first_slide() {
        let mut carousel = Carousel::new(3, 1);
        assert_eq!(carousel.previous(), Some(0));
        assert_eq!(carousel.previous(), None);
        assert_eq!(carousel.position(), 0);
        assert!(!carousel.has_previous());
    }

    #[test]
    fn jump_reports_only_real_changes() {
        let mut carousel = Carousel::new(4, 0);
        assert_eq!(carousel.jump_to(0), None);
        assert_eq!(carousel.jump_to(3), Some(3));
        assert_eq!(carousel.jump_to(99), None);
    }

    #[test]
    fn single_slide_cannot_move() {
        let mut carousel = Carousel::new(1, 0);
        assert!(!carousel.has_next());
        assert!(!carousel.has_previous());
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.previous(), None);
    }
}
