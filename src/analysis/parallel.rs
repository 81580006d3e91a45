//! Parallel scoring for data that is already in memory.
//!
//! Produces exactly the window sequence the streaming pipeline would produce
//! for the same bytes, but scores the windows independently on the rayon pool.

use rayon::prelude::*;

use super::entropy::metric_entropy;
use super::pipeline::EntropySequence;
use crate::config::WindowParams;
use crate::error::Result;

/// Number of windows the streaming pipeline yields for `data_len` bytes.
///
/// The first window always exists for non-empty input. Each later window
/// exists only while the previous one stopped short of the end of the data.
pub fn window_count(data_len: usize, size: usize, stride: usize) -> usize {
    if data_len == 0 {
        0
    } else if data_len <= size {
        1
    } else {
        (data_len - size).div_ceil(stride) + 1
    }
}

/// Score every window of `data` in parallel.
pub fn score_slice_parallel(data: &[u8], size: u32, stride: u32) -> Result<EntropySequence> {
    let params = WindowParams::new(size, stride)?;
    let size = params.size as usize;
    let stride = params.stride as usize;

    let count = window_count(data.len(), size, stride);
    log::debug!("Scoring {count} windows in parallel");

    let values: Vec<f64> = (0..count)
        .into_par_iter()
        .map(|k| {
            let start = k * stride;
            let end = (start + size).min(data.len());
            metric_entropy(&data[start..end])
        })
        .collect();

    EntropySequence::from_values(values)
}
