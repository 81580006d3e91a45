//! Memory-mapped file source.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use super::{copy_from, ByteSource};
use crate::error::Result;

/// Reads a file through a read-only memory map.
///
/// Zero-length files are not mapped at all; they behave as an empty stream.
pub struct MmapSource {
    map: Option<Mmap>,
    pos: usize,
}

impl MmapSource {
    /// Open and map `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let map = if file.metadata()?.len() == 0 {
            None
        } else {
            // The file is treated as immutable for the lifetime of the map.
            Some(unsafe { Mmap::map(&file)? })
        };
        Ok(Self { map, pos: 0 })
    }

    /// Whole mapped contents, independent of the read position.
    pub fn as_bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ByteSource for MmapSource {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let byte = self.as_bytes().get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        let data = self.map.as_deref().unwrap_or(&[]);
        Ok(copy_from(data, &mut self.pos, buf))
    }
}
