//! Cooperative cancellation for long-running reads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::ByteSource;
use crate::error::{EntropyError, Result};

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation (cannot be undone).
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Fails every read with [`EntropyError::Cancelled`] once the token fires.
pub struct CancellableSource<S> {
    inner: S,
    token: CancelToken,
}

impl<S: ByteSource> CancellableSource<S> {
    pub fn new(inner: S, token: CancelToken) -> Self {
        Self { inner, token }
    }

    #[inline]
    fn check(&self) -> Result<()> {
        if self.token.is_cancelled() {
            Err(EntropyError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl<S: ByteSource> ByteSource for CancellableSource<S> {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        self.check()?;
        self.inner.next_byte()
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.check()?;
        self.inner.read_into(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SliceSource;

    #[test]
    fn test_cancelled_source_fails() {
        let token = CancelToken::new();
        let mut source = CancellableSource::new(SliceSource::new(&[1, 2, 3]), token.clone());
        assert_eq!(source.next_byte().unwrap(), Some(1));

        token.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(source.next_byte(), Err(EntropyError::Cancelled)));
        let mut buf = [0u8; 2];
        assert!(matches!(
            source.read_into(&mut buf),
            Err(EntropyError::Cancelled)
        ));
    }
}
