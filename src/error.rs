//! Error taxonomy for the annotation track.
//!
//! Validation errors surface at the point of property assignment and must
//! leave the last committed value in place; they are never retried. A packing
//! failure cannot occur for validated input, so no variant exists for it.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrackError {
    /// Zero-duration or inverted annotation interval.
    #[error("annotation interval is empty or inverted ({start}s to {end}s)")]
    InvalidInterval { start: f64, end: f64 },

    /// A time string that does not split into exactly two numeric parts.
    #[error("malformed time string {input:?}, expected MM:SS")]
    InvalidFormat { input: String },

    /// A percent field outside [0, 100] or a color above 24 bits.
    #[error("{field} must be {expected}, got {value}")]
    OutOfRangeValue {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },

    /// Track construction without a usable pixels-per-second or ruler gap.
    /// Fatal to the track instance; surfaced immediately, not on first use.
    #[error("pixels-per-second and ruler gap must be positive")]
    MissingConfiguration,
}
