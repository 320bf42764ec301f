//! Playback-follow decisions for the track's horizontal scroll position.

use crate::constants::END_PADDING_PX;
use crate::core::time_scale::seconds_to_pixels;

/// Geometry of the scrollable track viewport, sampled each tick from the
/// host container. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_left: f64,
    pub viewport_width: f64,
    pub content_width: f64,
    pub left_margin: f64,
}

impl Viewport {
    /// Whether the given scroll offset already places the right edge of the
    /// visible window at or past the end of the content.
    fn reveals_end(&self, scroll_left: f64) -> bool {
        scroll_left + self.viewport_width - self.left_margin - END_PADDING_PX
            >= self.content_width
    }
}

/// Decide the next scroll offset for the current playback time.
///
/// Returns `None` to leave the scroll untouched: once both the current and
/// the candidate position already reveal the trailing edge of the content,
/// further following would only fight a user who scrolled back to inspect
/// earlier markers. During normal forward playback at least one test fails
/// and the candidate is adopted.
pub fn next_scroll(
    viewport: &Viewport,
    playback_seconds: f64,
    pixels_per_second: u32,
) -> Option<f64> {
    let candidate = seconds_to_pixels(playback_seconds, pixels_per_second);
    let cur_exceeds = viewport.reveals_end(viewport.scroll_left);
    let next_exceeds = viewport.reveals_end(candidate);
    if cur_exceeds && next_exceeds {
        None
    } else {
        Some(candidate)
    }
}

/// Horizontal position of the current-time indicator inside the track,
/// independent of any scroll decision.
pub fn indicator_position(playback_seconds: f64, left_margin: f64, pixels_per_second: u32) -> f64 {
    left_margin + seconds_to_pixels(playback_seconds, pixels_per_second)
}
