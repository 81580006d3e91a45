//! Mapping an entropy sequence onto a fixed pixel canvas.
//!
//! Every sample gets an equal, real-valued share of the canvas
//! (`width * height / len` cells) consumed in raster order, so samples form
//! horizontal bands that wrap from one row to the next. The share is tracked
//! as a running budget: sample `i` ends at cell `floor((i + 1) * cells / len)`,
//! so fractional remainders carry into the next sample and the bands cover
//! the canvas exactly.

use std::ops::Range;
use std::time::Instant;

use super::canvas::PixelCanvas;
use crate::analysis::EntropySequence;
use crate::util::color::{Gradient, Rgb};

// =============================================================================
// Normalization
// =============================================================================

/// Min-max range of a sequence, used to stretch it over the full gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub min: f64,
    pub max: f64,
}

impl Normalization {
    /// Range of `values`; `0..0` when empty.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self { min: 0.0, max: 0.0 };
        }
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Self { min, max }
    }

    pub fn of(sequence: &EntropySequence) -> Self {
        Self::from_values(sequence.values())
    }

    /// `1 / (max - min)`, or 1 for flat data so it renders as a uniform color.
    pub fn scale_factor(&self) -> f64 {
        let range = self.max - self.min;
        if range != 0.0 {
            1.0 / range
        } else {
            1.0
        }
    }

    /// Map a sample into [0, 1]: `(value - min) * scale_factor`, clamped.
    ///
    /// Divides by the range instead of multiplying by its reciprocal so the
    /// maximum lands exactly on 1.0.
    #[inline]
    pub fn scale(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        let scaled = if range != 0.0 {
            (value - self.min) / range
        } else {
            value - self.min
        };
        scaled.clamp(0.0, 1.0)
    }
}

// =============================================================================
// Band layout
// =============================================================================

/// Which canvas cells each sample owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandLayout {
    width: u32,
    height: u32,
    samples: usize,
}

impl BandLayout {
    pub fn new(width: u32, height: u32, samples: usize) -> Self {
        Self {
            width,
            height,
            samples,
        }
    }

    pub fn total_cells(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Average cells per sample; may be fractional, and below 1 when there
    /// are more samples than cells.
    pub fn pixels_per_window(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.total_cells() as f64 / self.samples as f64
    }

    /// Cell where sample `index` starts, in raster order.
    fn boundary(&self, index: usize) -> u64 {
        if self.samples == 0 {
            return 0;
        }
        let index = index.min(self.samples) as u128;
        (index * u128::from(self.total_cells()) / self.samples as u128) as u64
    }

    /// Raster cell range of sample `index`. Empty for samples that fall
    /// between two cells (more samples than cells) or past the end.
    pub fn band(&self, index: usize) -> Range<u64> {
        self.boundary(index)..self.boundary(index + 1)
    }

    /// The band of sample `index`, split at row boundaries.
    pub fn row_spans(&self, index: usize) -> RowSpans {
        let band = self.band(index);
        RowSpans {
            width: u64::from(self.width),
            cursor: band.start,
            end: band.end,
        }
    }
}

/// Horizontal run of cells within one row, `x_start..x_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub y: u32,
    pub x_start: u32,
    pub x_end: u32,
}

impl RowSpan {
    pub fn len(&self) -> u32 {
        self.x_end - self.x_start
    }

    pub fn is_empty(&self) -> bool {
        self.x_end == self.x_start
    }
}

/// Walks a cell range with an `(x, y)` cursor, wrapping to the next row when
/// the current one is exhausted.
#[derive(Debug, Clone)]
pub struct RowSpans {
    width: u64,
    cursor: u64,
    end: u64,
}

impl Iterator for RowSpans {
    type Item = RowSpan;

    fn next(&mut self) -> Option<RowSpan> {
        if self.width == 0 || self.cursor >= self.end {
            return None;
        }

        let y = self.cursor / self.width;
        let x = self.cursor % self.width;
        let row_start = y * self.width;
        let span_end = self.end.min(row_start + self.width);

        self.cursor = span_end;
        Some(RowSpan {
            y: y as u32,
            x_start: x as u32,
            x_end: (span_end - row_start) as u32,
        })
    }
}

/// A row span painted for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandSpan {
    pub sample: usize,
    pub color_index: usize,
    pub span: RowSpan,
}

// =============================================================================
// Gradient Mapper
// =============================================================================

/// Renders entropy sequences through a discrete [`Gradient`].
#[derive(Debug, Clone, Default)]
pub struct GradientMapper {
    gradient: Gradient,
}

impl GradientMapper {
    pub fn new(gradient: Gradient) -> Self {
        Self { gradient }
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Color of cells no sample reaches, and of the whole canvas for an
    /// empty sequence.
    pub fn background(&self) -> Rgb {
        self.gradient.color(0)
    }

    /// Every painted row span for `sequence` on a `width × height` canvas,
    /// in sample order.
    pub fn spans<'a>(
        &'a self,
        sequence: &'a EntropySequence,
        width: u32,
        height: u32,
    ) -> impl Iterator<Item = BandSpan> + 'a {
        let layout = BandLayout::new(width, height, sequence.len());
        let norm = Normalization::of(sequence);

        sequence.iter().enumerate().flat_map(move |(sample, value)| {
            let color_index = self.gradient.index_for(norm.scale(value));
            layout.row_spans(sample).map(move |span| BandSpan {
                sample,
                color_index,
                span,
            })
        })
    }

    /// Render into a new `width × height` canvas.
    pub fn render(&self, sequence: &EntropySequence, width: u32, height: u32) -> PixelCanvas {
        let mut canvas = PixelCanvas::new(width, height, self.background());
        self.render_into(sequence, &mut canvas);
        canvas
    }

    /// Render into a caller-supplied canvas, overwriting every cell.
    pub fn render_into(&self, sequence: &EntropySequence, canvas: &mut PixelCanvas) {
        let started = Instant::now();
        canvas.fill(self.background());
        if sequence.is_empty() {
            return;
        }

        let layout = BandLayout::new(canvas.width(), canvas.height(), sequence.len());
        let norm = Normalization::of(sequence);
        log::debug!(
            "min={} / max={} / width={} / height={} / pixels={} / factor={}",
            norm.min,
            norm.max,
            canvas.width(),
            canvas.height(),
            layout.pixels_per_window(),
            norm.scale_factor()
        );

        for band in self.spans(sequence, canvas.width(), canvas.height()) {
            let color = self.gradient.color(band.color_index);
            canvas.fill_row_span(band.span.y, band.span.x_start, band.span.x_end, color);
        }

        log::debug!(
            "Painted {} elements in {:.2}ms",
            sequence.len(),
            started.elapsed().as_secs_f64() * 1000.0
        );
    }
}
