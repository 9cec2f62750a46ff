//! Horizontal scroll model for the featured categories strip

use std::time::Duration;

/// Width of one category card
pub const CARD_WIDTH: f32 = 200.0;
/// Gap between cards
pub const CARD_GAP: f32 = 16.0;
/// One arrow press scrolls two cards
pub const SCROLL_STEP: f32 = (CARD_WIDTH + CARD_GAP) * 2.0;
/// Slack at either end before an arrow is considered useful
pub const EDGE_TOLERANCE: f32 = 10.0;
/// How long a scroll is left to settle before another is accepted
pub const SCROLL_LOCK: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Scroll position as last reported by the scrollable
#[derive(Debug, Clone, Default)]
pub struct CategoryStrip {
    offset: f32,
    content_width: f32,
    viewport_width: f32,
    locked: bool,
}

impl CategoryStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest viewport measurements
    pub fn update_viewport(&mut self, offset: f32, content_width: f32, viewport_width: f32) {
        self.offset = offset.max(0.0);
        self.content_width = content_width.max(0.0);
        self.viewport_width = viewport_width.max(0.0);
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn can_scroll_left(&self) -> bool {
        self.offset > EDGE_TOLERANCE
    }

    pub fn can_scroll_right(&self) -> bool {
        self.offset < self.content_width - self.viewport_width - EDGE_TOLERANCE
    }

    pub fn can_scroll(&self, direction: ScrollDirection) -> bool {
        !self.locked
            && match direction {
                ScrollDirection::Left => self.can_scroll_left(),
                ScrollDirection::Right => self.can_scroll_right(),
            }
    }

    /// Start a scroll and lock the strip until [`Self::release`].
    ///
    /// Returns the horizontal delta to apply, or `None` if the request is
    /// ignored because the strip is settling or already at that edge.
    pub fn request_scroll(&mut self, direction: ScrollDirection) -> Option<f32> {
        if !self.can_scroll(direction) {
            return None;
        }

        self.locked = true;
        Some(match direction {
            ScrollDirection::Left => -SCROLL_STEP,
            ScrollDirection::Right => SCROLL_STEP,
        })
    }

    /// Absolute offset after applying `delta`, kept inside the content
    pub fn target_offset(&self, delta: f32) -> f32 {
        let max = (self.content_width - self.viewport_width).max(0.0);
        (self.offset + delta).clamp(0.0, max)
    }

    /// Accept scroll requests again
    pub fn release(&mut self) {
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(offset: f32) -> CategoryStrip {
        let mut strip = CategoryStrip::new();
        // Eight cards in a 900px viewport
        strip.update_viewport(offset, 8.0 * CARD_WIDTH + 7.0 * CARD_GAP, 900.0);
        strip
    }

    #[test]
    fn test_step_is_two_cards() {
        assert_eq!(SCROLL_STEP, 432.0);
    }

    #[test]
    fn test_edges() {
        let start = strip(0.0);
        assert!(!start.can_scroll_left());
        assert!(start.can_scroll_right());

        let near_start = strip(10.0);
        assert!(!near_start.can_scroll_left(), "within tolerance of the edge");

        let end = strip(8.0 * CARD_WIDTH + 7.0 * CARD_GAP - 900.0);
        assert!(end.can_scroll_left());
        assert!(!end.can_scroll_right());
    }

    #[test]
    fn test_unmeasured_strip_cannot_scroll() {
        let strip = CategoryStrip::new();
        assert!(!strip.can_scroll_left());
        assert!(!strip.can_scroll_right());
    }

    #[test]
    fn test_lock_blocks_until_release() {
        let mut strip = strip(0.0);
        assert_eq!(strip.request_scroll(ScrollDirection::Right), Some(432.0));
        assert_eq!(strip.request_scroll(ScrollDirection::Right), None);

        strip.release();
        strip.update_viewport(432.0, 8.0 * CARD_WIDTH + 7.0 * CARD_GAP, 900.0);
        assert_eq!(strip.request_scroll(ScrollDirection::Left), Some(-432.0));
    }

    #[test]
    fn test_target_stops_at_the_end() {
        let strip = strip(1000.0);
        let max = 8.0 * CARD_WIDTH + 7.0 * CARD_GAP - 900.0;
        assert_eq!(strip.target_offset(SCROLL_STEP), max);
        assert_eq!(strip.target_offset(-SCROLL_STEP), 1000.0 - SCROLL_STEP);
        assert_eq!(strip.target_offset(-5000.0), 0.0);
    }

    #[test]
    fn test_blocked_direction_does_not_lock() {
        let mut strip = strip(0.0);
        assert_eq!(strip.request_scroll(ScrollDirection::Left), None);
        assert_eq!(
            strip.request_scroll(ScrollDirection::Right),
            Some(SCROLL_STEP),
            "a refused request must not hold the lock"
        );
    }
}
