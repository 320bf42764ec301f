//! State management module
//!
//! Core data structures for the annotation editor:
//! - Annotation: a timed overlay with assignment-validated fields
//! - TrackConfig: fixed per-track geometry configuration
//! - FocusState: selection/hover shared between track and property editor

mod annotation;
mod config;
mod selection;

pub use annotation::{Annotation, AnnotationStyle};
pub use config::TrackConfig;
pub use selection::{FocusOrigin, FocusState};
