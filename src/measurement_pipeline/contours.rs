//! Contour extraction module
//!
//! Border following over a thresholded preprocessed image, keeping only external
//! outlines in compressed form.

mod extractor;
pub mod types;

#[cfg(test)]
mod tests;

pub use extractor::{ContourExtractor, Foreground};
pub use types::{BoundingBox, Contour};
