//! Photo decoding module
//!
//! Turns encoded upload bytes into an in-memory RGB pixel grid.

mod reader;
mod standard_reader;

#[cfg(test)]
mod tests;

pub use reader::PhotoReader;
pub use standard_reader::StandardPhotoReader;
