//! In-memory buffer backend for artifact data.
//!
//! This module provides the [`crate::file::memory::Memory`] backend that implements the
//! [`crate::file::Backend`] trait over an owned byte buffer. It serves artifacts that are
//! already in memory, such as embedded fixtures, fuzzer inputs, or data received over a
//! network rather than read from a documentation tree on disk.

use super::Backend;
use crate::Result;

/// A backend that serves artifact data from an owned in-memory buffer.
///
/// All access operations include bounds checking, matching the behavior of the
/// memory-mapped [`crate::file::physical::Physical`] backend so callers cannot
/// observe which source backs a [`crate::file::File`].
#[derive(Debug)]
pub struct Memory {
    /// Owned artifact bytes
    data: Vec<u8>,
}

impl Memory {
    /// Create a new in-memory backend from an owned buffer.
    ///
    /// # Arguments
    /// * `data` - The raw artifact bytes
    #[must_use]
    pub fn new(data: Vec<u8>) -> Memory {
        Memory { data }
    }
}

impl Backend for Memory {
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        let Some(offset_end) = offset.checked_add(len) else {
            return Err(crate::Error::OutOfBounds);
        };

        if offset_end > self.data.len() {
            return Err(crate::Error::OutOfBounds);
        }

        Ok(&self.data[offset..offset_end])
    }

    fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
