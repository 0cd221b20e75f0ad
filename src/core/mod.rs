// src/core/mod.rs

pub mod html;
pub mod sanitize;

pub use sanitize::{MarkupSanitizer, TextSanitizer};
