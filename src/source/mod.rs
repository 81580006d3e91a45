//! Byte sources feeding the sliding window.
//!
//! A [`ByteSource`] hands out one byte at a time, in order, until it signals
//! end-of-stream with `Ok(None)`. Adapters cover the usual inputs:
//! - [`SliceSource`] - bytes already in memory
//! - [`ReaderSource`] - any `std::io::Read` (files, stdin, sockets)
//! - [`MmapSource`] - memory-mapped files
//! - [`FnSource`] - a closure, mostly for tests and fixtures
//! - [`CancellableSource`] - wraps another source and fails with `Cancelled`
//!   once its [`CancelToken`] is triggered

mod cancel;
mod mmap;
mod reader;

pub use cancel::{CancelToken, CancellableSource};
pub use mmap::MmapSource;
pub use reader::ReaderSource;

use crate::error::Result;

/// Sequential, single-pass supplier of bytes.
pub trait ByteSource {
    /// Next byte, or `Ok(None)` once the stream is exhausted.
    fn next_byte(&mut self) -> Result<Option<u8>>;

    /// Fill `buf` from the front. Returns the number of bytes written, which is
    /// less than `buf.len()` only when end-of-stream was reached.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut count = 0;
        while count < buf.len() {
            match self.next_byte()? {
                Some(byte) => {
                    buf[count] = byte;
                    count += 1;
                }
                None => break,
            }
        }
        Ok(count)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        (**self).next_byte()
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read_into(buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        (**self).next_byte()
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read_into(buf)
    }
}

// =============================================================================
// In-memory slice
// =============================================================================

/// Reads from a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let byte = self.data.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(copy_from(self.data, &mut self.pos, buf))
    }
}

/// Copy as much of `data[*pos..]` as fits into `buf`, advancing `pos`.
#[inline]
pub(crate) fn copy_from(data: &[u8], pos: &mut usize, buf: &mut [u8]) -> usize {
    let available = &data[*pos..];
    let count = available.len().min(buf.len());
    buf[..count].copy_from_slice(&available[..count]);
    *pos += count;
    count
}

// =============================================================================
// Closure
// =============================================================================

/// Adapts a closure returning `Result<Option<u8>>` into a byte source.
pub struct FnSource<F>(pub F);

impl<F> ByteSource for FnSource<F>
where
    F: FnMut() -> Result<Option<u8>>,
{
    fn next_byte(&mut self) -> Result<Option<u8>> {
        (self.0)()
    }
}
