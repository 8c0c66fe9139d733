//! Format implementations
//!
//! This module contains the format implementations that convert between
//! block documents and their text representations.

pub mod html;
pub mod json;

pub use html::HtmlFormat;
pub use json::JsonFormat;
