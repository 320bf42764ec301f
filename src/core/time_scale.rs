//! Time/pixel conversion and `MM:SS` display formatting.

use crate::error::TrackError;

/// Convert a time in seconds to a horizontal pixel offset at the given rate.
/// No rounding; callers format for display.
pub fn seconds_to_pixels(seconds: f64, pixels_per_second: u32) -> f64 {
    seconds * pixels_per_second as f64
}

/// Format a time as zero-padded `MM:SS`.
///
/// Fractional seconds are truncated, not rounded. Minutes are unbounded
/// rather than wrapped at 60: `format_seconds(3725.0)` is `"62:05"`.
pub fn format_seconds(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Parse a `MM:SS` string back into whole seconds.
///
/// Fails with [`TrackError::InvalidFormat`] unless the input splits into
/// exactly two numeric parts.
pub fn parse_formatted(input: &str) -> Result<u32, TrackError> {
    let malformed = || TrackError::InvalidFormat {
        input: input.to_string(),
    };

    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() != 2 {
        return Err(malformed());
    }
    let minutes: u32 = parts[0].trim().parse().map_err(|_| malformed())?;
    let seconds: u32 = parts[1].trim().parse().map_err(|_| malformed())?;
    Ok(minutes * 60 + seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_to_pixels() {
        assert_eq!(seconds_to_pixels(2.0, 10), 20.0);
        assert_eq!(seconds_to_pixels(0.0, 10), 0.0);
        assert_eq!(seconds_to_pixels(1.5, 10), 15.0);
    }

    #[test]
    fn test_marker_geometry_scenario() {
        // An annotation spanning 2s..5s at 10 px/s renders at left 20px,
        // width 30px.
        assert_eq!(seconds_to_pixels(2.0, 10), 20.0);
        assert_eq!(seconds_to_pixels(5.0 - 2.0, 10), 30.0);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(125.0), "02:05");
        assert_eq!(format_seconds(0.0), "00:00");
        assert_eq!(format_seconds(59.0), "00:59");
        assert_eq!(format_seconds(60.0), "01:00");
    }

    #[test]
    fn test_format_truncates_fractions() {
        assert_eq!(format_seconds(125.9), "02:05");
        assert_eq!(format_seconds(0.999), "00:00");
    }

    #[test]
    fn test_minutes_are_unbounded() {
        assert_eq!(format_seconds(3725.0), "62:05");
        assert_eq!(format_seconds(6000.0), "100:00");
    }

    #[test]
    fn test_parse_formatted() {
        assert_eq!(parse_formatted("02:05"), Ok(125));
        assert_eq!(parse_formatted("00:00"), Ok(0));
        assert_eq!(parse_formatted("62:05"), Ok(3725));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "5", "1:2:3", "aa:bb", "1:", ":5", "-1:05"] {
            assert_eq!(
                parse_formatted(input),
                Err(TrackError::InvalidFormat {
                    input: input.to_string()
                }),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_round_trip() {
        for n in (0..10_000).step_by(7) {
            assert_eq!(parse_formatted(&format_seconds(n as f64)), Ok(n));
        }
    }
}
