//! Core track algorithms, free of UI concerns.
//!
//! - `time_scale`: seconds/pixel conversion and `MM:SS` formatting
//! - `row_pack`: interval partitioning of annotations into rows
//! - `follow`: playback-follow scroll decisions
//! - `ruler`: ruler marker generation

pub mod follow;
pub mod row_pack;
pub mod ruler;
pub mod time_scale;
