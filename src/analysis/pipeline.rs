//! End-to-end windowed entropy computation.

use std::time::Instant;

use super::entropy::metric_entropy_checked;
use super::window::ByteWindow;
use crate::config::WindowParams;
use crate::error::{EntropyError, Result};
use crate::source::ByteSource;

// =============================================================================
// Entropy Sequence
// =============================================================================

/// Metric entropy of every window, in the order the windows were produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntropySequence {
    values: Vec<f64>,
}

impl EntropySequence {
    /// Wrap precomputed values. Rejects NaN and infinities, which no real
    /// window can produce.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(EntropyError::InvalidInput(format!(
                "entropy sample {index} is not finite ({})",
                values[index]
            )));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Count, range and mean of the samples. `None` for an empty sequence.
    pub fn stats(&self) -> Option<SequenceStats> {
        if self.values.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }

        Some(SequenceStats {
            count: self.values.len(),
            min,
            max,
            mean: sum / self.values.len() as f64,
        })
    }
}

/// Summary of an [`EntropySequence`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

// =============================================================================
// Pipeline
// =============================================================================

/// Drives a [`ByteWindow`] over a source, scoring every window.
#[derive(Debug, Clone, Copy)]
pub struct EntropyPipeline {
    params: WindowParams,
}

impl EntropyPipeline {
    pub fn new(size: u32, stride: u32) -> Result<Self> {
        Ok(Self {
            params: WindowParams::new(size, stride)?,
        })
    }

    pub fn with_params(params: WindowParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> WindowParams {
        self.params
    }

    /// Score every window of `source` until end-of-stream.
    ///
    /// An empty source yields an empty sequence. Any read failure (including
    /// cancellation) aborts the run and the partial sequence is dropped.
    pub fn run<S: ByteSource>(&self, source: S) -> Result<EntropySequence> {
        let started = Instant::now();
        log::debug!(
            "Window size: {} bytes, stride: {} bytes",
            self.params.size,
            self.params.stride
        );

        let mut window = ByteWindow::with_params(self.params, source)?;
        if window.is_empty() {
            log::info!("Source is empty, no windows to score");
            return Ok(EntropySequence::default());
        }

        let mut values = Vec::with_capacity(1000);
        loop {
            values.push(metric_entropy_checked(window.bytes())?);

            if window.at_eof() || !window.advance()? {
                break;
            }
        }

        log::info!(
            "Scored {} windows in {:.2}ms",
            values.len(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        Ok(EntropySequence { values })
    }
}

/// Convenience for a one-off run: `EntropyPipeline::new(size, stride)?.run(source)`.
pub fn compute_entropy_sequence<S: ByteSource>(
    source: S,
    size: u32,
    stride: u32,
) -> Result<EntropySequence> {
    EntropyPipeline::new(size, stride)?.run(source)
}
