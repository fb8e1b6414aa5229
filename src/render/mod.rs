//! Rendering extraction output.

mod json;

pub use json::{to_json, JsonFormat};
