//! PNG export of rendered canvases.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::canvas::PixelCanvas;
use crate::error::{EntropyError, Result};

/// Encode `canvas` as an 8-bit RGB PNG.
pub fn write_png<W: Write>(canvas: &PixelCanvas, writer: W) -> Result<()> {
    if canvas.cell_count() == 0 {
        return Err(EntropyError::InvalidInput(format!(
            "cannot encode an empty {}x{} canvas",
            canvas.width(),
            canvas.height()
        )));
    }

    let mut encoder = png::Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(canvas.as_bytes())?;
    png_writer.finish()?;
    Ok(())
}

/// Write `canvas` to a PNG file at `path`, replacing any existing file.
pub fn save_png(canvas: &PixelCanvas, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_png(canvas, &mut writer)?;
    writer.flush()?;
    log::info!("Wrote {}x{} image to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}
