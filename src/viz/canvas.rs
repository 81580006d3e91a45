//! Raster pixel buffer.

use crate::util::color::Rgb;

/// `width × height` grid of colors in raster order (row 0 first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    /// Canvas with every cell set to `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let cells = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![background; cells],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// One row of pixels, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[Rgb]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.pixels[start..start + self.width as usize])
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Paint cells `x_start..x_end` of row `y`. Out-of-range cells are clipped.
    pub fn fill_row_span(&mut self, y: u32, x_start: u32, x_end: u32, color: Rgb) {
        if y >= self.height {
            return;
        }
        let x_end = x_end.min(self.width);
        if x_start >= x_end {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + x_start as usize..row + x_end as usize].fill(color);
    }

    /// Raw `RGBRGB...` bytes, 3 per cell.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of distinct colors on the canvas.
    pub fn distinct_colors(&self) -> usize {
        let mut seen = std::collections::HashSet::new();
        for &pixel in &self.pixels {
            seen.insert(pixel);
        }
        seen.len()
    }
}
