//! Presentation layer: terminal formatting and structured payloads.

pub mod json;
pub mod terminal;
