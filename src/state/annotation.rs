//! Annotation data model with assignment-time validation.
//!
//! Every mutation goes through a setter that rejects invalid values before
//! they reach the committed state, so the row-packing engine only ever sees
//! well-formed intervals and the last-known-good value survives a bad edit.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::error::TrackError;

/// Visual style of an annotation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationStyle {
    Text,
    Note,
    Speech,
    Title,
    Highlight,
    Label,
}

impl AnnotationStyle {
    pub const ALL: [AnnotationStyle; 6] = [
        AnnotationStyle::Text,
        AnnotationStyle::Note,
        AnnotationStyle::Speech,
        AnnotationStyle::Title,
        AnnotationStyle::Highlight,
        AnnotationStyle::Label,
    ];

    /// Lowercase wire name used by the style selector.
    pub fn name(&self) -> &'static str {
        match self {
            AnnotationStyle::Text => "text",
            AnnotationStyle::Note => "note",
            AnnotationStyle::Speech => "speech",
            AnnotationStyle::Title => "title",
            AnnotationStyle::Highlight => "highlight",
            AnnotationStyle::Label => "label",
        }
    }

    /// Look up a style by its lowercase wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|style| style.name() == name)
    }
}

impl fmt::Display for AnnotationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A timed annotation overlaid on the video.
///
/// Position, size, and text size are percents of the video frame; colors are
/// 24-bit RGB integers. The interval is half-open `[time_start, time_end)`
/// and always non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    id: Uuid,
    time_start: f64,
    time_end: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    style: AnnotationStyle,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    background_color: u32,
    text_color: u32,
    text_size: f64,
}

impl Annotation {
    /// Create an annotation spanning the given interval, with neutral
    /// defaults for the overlay fields.
    pub fn new(time_start: f64, time_end: f64) -> Result<Self, TrackError> {
        let (time_start, time_end) = validated_interval(time_start, time_end)?;
        Ok(Self {
            id: Uuid::new_v4(),
            time_start,
            time_end,
            text: None,
            style: AnnotationStyle::Note,
            x: 0.0,
            y: 0.0,
            width: 25.0,
            height: 10.0,
            background_color: 0xFF_FFFF,
            text_color: 0x00_0000,
            text_size: 5.0,
        })
    }

    /// Builder-style text, for seeding.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder-style style, for seeding.
    pub fn with_style(mut self, style: AnnotationStyle) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn time_start(&self) -> f64 {
        self.time_start
    }
    pub fn time_end(&self) -> f64 {
        self.time_end
    }
    pub fn duration_seconds(&self) -> f64 {
        self.time_end - self.time_start
    }
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
    pub fn style(&self) -> AnnotationStyle {
        self.style
    }
    pub fn x(&self) -> f64 {
        self.x
    }
    pub fn y(&self) -> f64 {
        self.y
    }
    pub fn width(&self) -> f64 {
        self.width
    }
    pub fn height(&self) -> f64 {
        self.height
    }
    pub fn background_color(&self) -> u32 {
        self.background_color
    }
    pub fn text_color(&self) -> u32 {
        self.text_color
    }
    pub fn text_size(&self) -> f64 {
        self.text_size
    }

    /// Replace both interval endpoints atomically. An empty or inverted
    /// interval is rejected and the previous endpoints stay committed.
    pub fn set_times(&mut self, time_start: f64, time_end: f64) -> Result<(), TrackError> {
        let (time_start, time_end) = validated_interval(time_start, time_end)?;
        self.time_start = time_start;
        self.time_end = time_end;
        Ok(())
    }

    /// Set or clear the text; an empty string clears it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.text = if text.is_empty() { None } else { Some(text) };
    }

    pub fn set_style(&mut self, style: AnnotationStyle) {
        self.style = style;
    }

    pub fn set_x(&mut self, percent: f64) -> Result<(), TrackError> {
        self.x = percent_in_range("x position", percent)?;
        Ok(())
    }

    pub fn set_y(&mut self, percent: f64) -> Result<(), TrackError> {
        self.y = percent_in_range("y position", percent)?;
        Ok(())
    }

    pub fn set_width(&mut self, percent: f64) -> Result<(), TrackError> {
        self.width = percent_in_range("width", percent)?;
        Ok(())
    }

    pub fn set_height(&mut self, percent: f64) -> Result<(), TrackError> {
        self.height = percent_in_range("height", percent)?;
        Ok(())
    }

    pub fn set_text_size(&mut self, percent: f64) -> Result<(), TrackError> {
        self.text_size = percent_in_range("text size", percent)?;
        Ok(())
    }

    pub fn set_background_color(&mut self, color: u32) -> Result<(), TrackError> {
        self.background_color = color_in_range("background color", color)?;
        Ok(())
    }

    pub fn set_text_color(&mut self, color: u32) -> Result<(), TrackError> {
        self.text_color = color_in_range("text color", color)?;
        Ok(())
    }
}

fn validated_interval(time_start: f64, time_end: f64) -> Result<(f64, f64), TrackError> {
    if !time_start.is_finite() || time_start < 0.0 {
        return Err(TrackError::OutOfRangeValue {
            field: "time start",
            expected: "a non-negative number of seconds",
            value: time_start,
        });
    }
    if !time_end.is_finite() || time_end <= time_start {
        return Err(TrackError::InvalidInterval {
            start: time_start,
            end: time_end,
        });
    }
    Ok((time_start, time_end))
}

fn percent_in_range(field: &'static str, value: f64) -> Result<f64, TrackError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(TrackError::OutOfRangeValue {
            field,
            expected: "a percent within 0..=100",
            value,
        })
    }
}

fn color_in_range(field: &'static str, value: u32) -> Result<u32, TrackError> {
    if value <= 0xFF_FFFF {
        Ok(value)
    } else {
        Err(TrackError::OutOfRangeValue {
            field,
            expected: "a 24-bit RGB value",
            value: value as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_inverted_intervals() {
        assert!(matches!(
            Annotation::new(5.0, 5.0),
            Err(TrackError::InvalidInterval { .. })
        ));
        assert!(matches!(
            Annotation::new(5.0, 2.0),
            Err(TrackError::InvalidInterval { .. })
        ));
        assert!(Annotation::new(0.0, 0.1).is_ok());
    }

    #[test]
    fn test_rejects_negative_start() {
        assert!(matches!(
            Annotation::new(-1.0, 5.0),
            Err(TrackError::OutOfRangeValue { .. })
        ));
    }

    #[test]
    fn test_bad_edit_keeps_last_known_good() {
        let mut annotation = Annotation::new(2.0, 5.0).unwrap();
        assert!(annotation.set_times(6.0, 4.0).is_err());
        assert_eq!(annotation.time_start(), 2.0);
        assert_eq!(annotation.time_end(), 5.0);

        annotation.set_x(42.0).unwrap();
        assert!(annotation.set_x(120.0).is_err());
        assert_eq!(annotation.x(), 42.0);
    }

    #[test]
    fn test_percent_bounds() {
        let mut annotation = Annotation::new(0.0, 1.0).unwrap();
        assert!(annotation.set_width(0.0).is_ok());
        assert!(annotation.set_width(100.0).is_ok());
        assert!(annotation.set_width(100.1).is_err());
        assert!(annotation.set_width(-0.1).is_err());
        assert!(annotation.set_width(f64::NAN).is_err());
    }

    #[test]
    fn test_color_bounds() {
        let mut annotation = Annotation::new(0.0, 1.0).unwrap();
        assert!(annotation.set_background_color(0xFF_FFFF).is_ok());
        assert!(annotation.set_background_color(0x100_0000).is_err());
        assert_eq!(annotation.background_color(), 0xFF_FFFF);
    }

    #[test]
    fn test_empty_text_clears() {
        let mut annotation = Annotation::new(0.0, 1.0).unwrap().with_text("hello");
        assert_eq!(annotation.text(), Some("hello"));
        annotation.set_text("");
        assert_eq!(annotation.text(), None);
    }

    #[test]
    fn test_style_names_round_trip() {
        for style in AnnotationStyle::ALL {
            assert_eq!(AnnotationStyle::from_name(style.name()), Some(style));
        }
        assert_eq!(AnnotationStyle::from_name("banner"), None);
    }
}
