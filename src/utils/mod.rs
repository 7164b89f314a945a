//! Utility modules for card-webp
//!
//! - `files`: source traversal and destination management
//! - `images`: resizing and WebP encoding
//! - `http`: HTTP client utilities

pub mod files;
pub mod http;
pub mod images;
