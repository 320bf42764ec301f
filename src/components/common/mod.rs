//! Shared form building blocks.

mod fields;

pub use fields::{ColorField, CommittedTextField, PercentField};
