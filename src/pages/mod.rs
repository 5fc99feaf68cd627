//! Top-level pages.

pub mod landing;
