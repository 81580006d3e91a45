//! Fixed-capacity sliding window over a byte source.

use crate::config::WindowParams;
use crate::error::{EntropyError, Result};
use crate::source::ByteSource;

/// Overlapping view over a byte stream that advances `stride` bytes per step.
///
/// The buffer is allocated once. [`advance`](Self::advance) is the only
/// mutator: it shifts the retained tail to the front and refills the freed
/// region from the source.
pub struct ByteWindow<S> {
    buffer: Box<[u8]>,
    stride: usize,
    /// Valid bytes at the front of `buffer`. Equals the capacity except for a
    /// final, short window.
    len: usize,
    at_eof: bool,
    /// Stream offset of `buffer[0]`.
    offset: u64,
    source: S,
}

impl<S: ByteSource> ByteWindow<S> {
    /// Validate the geometry and eagerly read the first window.
    ///
    /// A source shorter than `size` yields a single short window that is
    /// already at EOF. A source of exactly `size` bytes is not: end-of-stream
    /// is only observed by the next read.
    pub fn new(size: u32, stride: u32, source: S) -> Result<Self> {
        let params = WindowParams::new(size, stride)?;
        Self::with_params(params, source)
    }

    pub fn with_params(params: WindowParams, mut source: S) -> Result<Self> {
        params.validate()?;

        let mut buffer = vec![0u8; params.size as usize].into_boxed_slice();
        let len = source.read_into(&mut buffer)?;
        let at_eof = len < buffer.len();

        Ok(Self {
            buffer,
            stride: params.stride as usize,
            len,
            at_eof,
            offset: 0,
            source,
        })
    }

    /// Current window contents.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the source has been exhausted. The current window is then final.
    #[inline]
    pub fn at_eof(&self) -> bool {
        self.at_eof
    }

    /// Stream offset of the first byte in the window.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Slide the window forward by `stride` bytes.
    ///
    /// Returns `Ok(false)` when the source ended without supplying a single
    /// new byte: no further window exists and the buffer is left untouched.
    /// Fewer than `stride` new bytes produce a final, short window.
    pub fn advance(&mut self) -> Result<bool> {
        if self.at_eof {
            return Err(EntropyError::IllegalState("window already at EOF"));
        }

        let size = self.buffer.len();
        let refill_start = size - self.stride;

        // Not at EOF, so the buffer is full and `len == size`. Rotating keeps
        // the dropped head in the refill region so it can be put back.
        self.buffer.rotate_left(self.stride);

        let count = self.source.read_into(&mut self.buffer[refill_start..])?;
        if count < self.stride {
            self.at_eof = true;
            if count == 0 {
                self.buffer.rotate_right(self.stride);
                return Ok(false);
            }
        }

        self.len = self.len - self.stride + count;
        self.offset += self.stride as u64;
        Ok(true)
    }

    /// Give back the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }
}
