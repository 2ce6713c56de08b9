//! Common utility functions shared across the charforge crates.
//!
//! Pure functions only - no side effects, no I/O.

pub mod string;

pub use string::{humanize_id, some_if_not_empty, StringExt};
