//! Zeroth-order entropy estimates over byte windows.
//!
//! Two measures are provided:
//! - [`shannon_entropy`]: bits per byte, 0 (single repeated value) to 8
//! - [`metric_entropy`]: Shannon entropy divided by the window length
//!
//! Metric entropy is what the pipeline records for every window. Note that it
//! divides by the window's byte length rather than by the alphabet maximum of
//! 8 bits, so only windows of 256 bytes or more can reach 1.0.

use std::f64::consts::LOG10_2;

use crate::error::{EntropyError, Result};

/// Below this length the 4-way histogram's setup cost outweighs its benefit.
const FOURWAY_THRESHOLD: usize = 256;

/// Count byte occurrences with a single histogram.
#[inline]
fn count_bytes_simple(data: &[u8], out: &mut [u32; 256]) {
    for &byte in data {
        out[byte as usize] += 1;
    }
}

/// Count byte occurrences using 4 interleaved histograms, so runs of the same
/// byte value don't serialize on one counter.
#[inline]
fn count_bytes_4way(data: &[u8], out: &mut [u32; 256]) {
    let mut h = [[0u32; 256]; 4];

    let chunks = data.chunks_exact(4);
    let remainder = chunks.remainder();
    for chunk in chunks {
        h[0][chunk[0] as usize] += 1;
        h[1][chunk[1] as usize] += 1;
        h[2][chunk[2] as usize] += 1;
        h[3][chunk[3] as usize] += 1;
    }
    for &byte in remainder {
        h[0][byte as usize] += 1;
    }

    for (i, slot) in out.iter_mut().enumerate() {
        *slot += h[0][i] + h[1][i] + h[2][i] + h[3][i];
    }
}

/// Occurrence count of every byte value in `data`.
pub fn byte_histogram(data: &[u8]) -> [u32; 256] {
    let mut counts = [0u32; 256];
    if data.len() >= FOURWAY_THRESHOLD {
        count_bytes_4way(data, &mut counts);
    } else {
        count_bytes_simple(data, &mut counts);
    }
    counts
}

/// `log2(x)` computed as `log10(x) / log10(2)`.
#[inline]
fn log2(x: f64) -> f64 {
    x.log10() / LOG10_2
}

/// Shannon entropy of the byte distribution in `data`, in bits (0.0 to 8.0).
///
/// Returns 0.0 for empty input.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let counts = byte_histogram(data);
    let len = data.len() as f64;

    let mut sum = 0.0f64;
    for &count in &counts {
        if count != 0 {
            let p = f64::from(count) / len;
            sum += p * log2(p);
        }
    }
    -sum
}

/// Metric entropy: Shannon entropy divided by the window length.
///
/// Empty input has no defined value and yields `NaN`; use
/// [`metric_entropy_checked`] where that must be reported as an error.
pub fn metric_entropy(window: &[u8]) -> f64 {
    if window.is_empty() {
        return f64::NAN;
    }
    shannon_entropy(window) / window.len() as f64
}

/// [`metric_entropy`], rejecting windows that produce no finite value.
pub fn metric_entropy_checked(window: &[u8]) -> Result<f64> {
    let value = metric_entropy(window);
    if value.is_nan() {
        return Err(EntropyError::InvalidInput(format!(
            "metric entropy undefined for a window of {} bytes",
            window.len()
        )));
    }
    Ok(value)
}
