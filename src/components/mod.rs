//! UI components grouped by feature domain.

pub mod common;

mod prop_editor;

pub use prop_editor::{PropEdit, PropEditor};
