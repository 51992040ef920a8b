//! Common utilities module
//!
//! This module contains the error type shared across the measurement pipeline.

pub mod error;

pub use error::{MeasurementError, Result};
