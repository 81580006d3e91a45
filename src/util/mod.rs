//! Utility functions shared across the crate.
//!
//! This module provides common utilities for:
//! - Pixel colors and the entropy gradient
//! - Human-readable formatting

pub mod color;
pub mod format;

pub use color::{Gradient, Rgb};
pub use format::{format_bytes, format_stats};
