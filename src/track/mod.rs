//! Annotations track module
//!
//! The horizontal, time-indexed marker track rendered below the player:
//! - AnnotationsTrack: scroll host with ruler, packed rows, time indicator
//! - TimeRuler: labeled tick marks
//! - TrackItem: one positioned annotation marker
//! - PlaybackBtn: transport button shared with the header

mod panel;
mod playback_controls;
mod ruler;
mod track_item;

pub use panel::AnnotationsTrack;
pub use playback_controls::PlaybackBtn;
