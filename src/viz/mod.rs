//! Turning entropy sequences into pictures.
//!
//! - `canvas` - the raster pixel buffer
//! - `gradient_map` - normalization and band layout of samples on the canvas
//! - `export` - PNG encoding

mod canvas;
mod export;
mod gradient_map;

pub use canvas::PixelCanvas;
pub use export::{save_png, write_png};
pub use gradient_map::{
    BandLayout, BandSpan, GradientMapper, Normalization, RowSpan, RowSpans,
};
