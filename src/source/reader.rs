//! `std::io::Read` adapter.

use std::io::{BufRead, BufReader, ErrorKind, Read};

use super::ByteSource;
use crate::error::Result;

/// Buffered byte source over any reader.
pub struct ReaderSource<R: Read> {
    inner: BufReader<R>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
        }
    }

    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            inner: BufReader::with_capacity(capacity, reader),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        loop {
            let next = match self.inner.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if next.is_some() {
                self.inner.consume(1);
            }
            return Ok(next);
        }
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut count = 0;
        while count < buf.len() {
            match self.inner.read(&mut buf[count..]) {
                Ok(0) => break,
                Ok(n) => count += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntropyError;
    use std::io::Cursor;

    /// Yields a few bytes, then fails.
    struct FlakyReader {
        remaining: usize,
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.remaining == 0 {
                return Err(std::io::Error::new(ErrorKind::BrokenPipe, "gone"));
            }
            let n = self.remaining.min(buf.len());
            buf[..n].fill(0xAA);
            self.remaining -= n;
            Ok(n)
        }
    }

    #[test]
    fn test_reader_source_reads_everything() {
        let mut source = ReaderSource::with_capacity(2, Cursor::new(vec![1u8, 2, 3, 4, 5]));
        let mut out = Vec::new();
        while let Some(b) = source.next_byte().unwrap() {
            out.push(b);
        }
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reader_source_read_into_spans_buffer_refills() {
        let mut source = ReaderSource::with_capacity(3, Cursor::new((0u8..10).collect::<Vec<_>>()));
        let mut buf = [0u8; 8];
        assert_eq!(source.read_into(&mut buf).unwrap(), 8);
        assert_eq!(buf, [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(source.read_into(&mut buf).unwrap(), 2);
    }

    #[test]
    fn test_reader_error_surfaces_as_io_failure() {
        let mut source = ReaderSource::new(FlakyReader { remaining: 2 });
        assert_eq!(source.next_byte().unwrap(), Some(0xAA));
        assert_eq!(source.next_byte().unwrap(), Some(0xAA));
        assert!(matches!(source.next_byte(), Err(EntropyError::IoFailure(_))));
    }
}
