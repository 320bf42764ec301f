//! Ruler marker generation for the annotations track.

use crate::core::time_scale::{format_seconds, seconds_to_pixels};
use crate::state::TrackConfig;

/// A labeled tick on the track ruler.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerMarker {
    pub time_seconds: f64,
    pub position_px: f64,
    pub label: String,
}

/// Build the full marker list for a track of the given duration.
///
/// One marker per gap step from zero up to (but excluding) the duration,
/// plus a final marker pinned one pixel inside the content edge so the end
/// of the track stays labeled even when it falls off the gap grid. The list
/// is regenerated as a whole whenever the duration changes.
pub fn ruler_markers(duration_seconds: f64, config: &TrackConfig) -> Vec<RulerMarker> {
    let duration = duration_seconds.max(0.0);
    let pps = config.pixels_per_second();
    let gap = config.gap_seconds() as f64;
    let content_width = seconds_to_pixels(duration, pps);

    let mut markers = Vec::new();
    let mut step = 0u32;
    loop {
        let time = f64::from(step) * gap;
        if time >= duration {
            break;
        }
        markers.push(RulerMarker {
            time_seconds: time,
            position_px: seconds_to_pixels(time, pps),
            label: format_seconds(time),
        });
        step += 1;
    }

    markers.push(RulerMarker {
        time_seconds: duration,
        position_px: (content_width - 1.0).max(0.0),
        label: format_seconds(duration),
    });
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TrackConfig {
        TrackConfig::new(10, 3).unwrap()
    }

    #[test]
    fn test_markers_on_gap_grid_plus_pinned_end() {
        let markers = ruler_markers(10.0, &config());
        let times: Vec<f64> = markers.iter().map(|m| m.time_seconds).collect();
        assert_eq!(times, vec![0.0, 3.0, 6.0, 9.0, 10.0]);

        assert_eq!(markers[1].position_px, 30.0);
        assert_eq!(markers[1].label, "00:03");

        // Final marker is pinned one pixel inside the content edge.
        let last = markers.last().unwrap();
        assert_eq!(last.position_px, 99.0);
        assert_eq!(last.label, "00:10");
    }

    #[test]
    fn test_grid_aligned_duration_keeps_pinned_end() {
        // 9 lands on the grid, so the loop stops before it and the pinned
        // final marker is the only one labeling the end.
        let markers = ruler_markers(9.0, &config());
        let times: Vec<f64> = markers.iter().map(|m| m.time_seconds).collect();
        assert_eq!(times, vec![0.0, 3.0, 6.0, 9.0]);
        assert_eq!(markers.last().unwrap().position_px, 89.0);
    }

    #[test]
    fn test_zero_duration() {
        let markers = ruler_markers(0.0, &config());
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].time_seconds, 0.0);
        assert_eq!(markers[0].position_px, 0.0);
        assert_eq!(markers[0].label, "00:00");
    }

    #[test]
    fn test_fractional_duration_label_is_truncated() {
        let markers = ruler_markers(10.4, &config());
        let last = markers.last().unwrap();
        assert_eq!(last.time_seconds, 10.4);
        assert_eq!(last.label, "00:10");
        assert_eq!(last.position_px, 103.0);
    }
}
