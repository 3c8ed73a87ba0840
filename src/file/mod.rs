//! Artifact file abstraction and data access.
//!
//! This module provides the byte-level access layer for implementor artifacts. It abstracts
//! over different data sources (files on disk, memory buffers) and exposes bounds-checked
//! access to the raw artifact bytes plus a validated UTF-8 text view for the scanner.
//!
//! # Architecture
//!
//! - **File abstraction layer** - Unified interface for artifact access via [`crate::file::File`]
//! - **Backend system** - Pluggable data sources behind the [`crate::file::Backend`] trait
//! - **Text view** - UTF-8 validation of the mapped bytes, since implementors artifacts
//!   are always text emitted by the documentation generator
//!
//! # Key Components
//!
//! ## Core Types
//! - [`crate::file::File`] - Main artifact file abstraction
//! - [`crate::file::Backend`] - Trait for different data sources (disk files, memory buffers)
//!
//! ## Backend Implementations
//! - [`crate::file::physical::Physical`] - Memory-mapped file backend for disk access
//! - [`crate::file::memory::Memory`] - In-memory buffer backend for already-loaded data
//!
//! # Examples
//!
//! ## Loading from File
//!
//! ```rust,no_run
//! use traitdex::File;
//! use std::path::Path;
//!
//! let file = File::from_file(Path::new("doc/implementors/core/ops/trait.Drop.js"))?;
//! println!("Artifact is {} bytes", file.len());
//! println!("Starts with: {}", &file.text()?[..16]);
//! # Ok::<(), traitdex::Error>(())
//! ```
//!
//! ## Loading from Memory
//!
//! ```rust
//! use traitdex::File;
//!
//! let data = b"(function() {var implementors = {};\n})()".to_vec();
//! let file = File::from_mem(data)?;
//! assert!(file.text()?.starts_with("(function"));
//! # Ok::<(), traitdex::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! All components are designed to be thread-safe and can be shared across threads,
//! which the doc-root scanner relies on for parallel parsing.

pub(crate) mod memory;
pub(crate) mod physical;

use std::path::Path;

use crate::Result;
use memory::Memory;
use physical::Physical;

/// Backend trait for artifact data sources.
///
/// This trait abstracts over the source of artifact data, allowing for both in-memory and
/// on-disk representations. All implementations must be thread-safe.
///
/// The trait provides a common interface for accessing artifact bytes regardless of whether
/// they are memory-mapped from a file on disk or held in an owned buffer.
pub trait Backend: Send + Sync {
    /// Returns a slice of the data at the given offset and length.
    ///
    /// This method provides bounds-checked access to the underlying data.
    ///
    /// # Arguments
    ///
    /// * `offset` - The starting offset within the data.
    /// * `len` - The length of the slice in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the requested range is out of bounds.
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]>;

    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];

    /// Returns the total length of the data buffer.
    ///
    /// This is equivalent to `self.data().len()` but may be more efficient
    /// for some backend implementations.
    fn len(&self) -> usize;

    /// Returns true if the data buffer is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Represents a loaded implementor artifact file.
///
/// This struct wraps a data backend and provides bounds-checked byte access as well as
/// a validated UTF-8 text view. It supports loading from both files and memory buffers;
/// file-based loading uses memory-mapped I/O.
///
/// `File` performs no interpretation of the artifact contents. Parsing is done by
/// [`Artifact`](crate::Artifact), which builds on this layer.
///
/// # Examples
///
/// ## Loading from a file
///
/// ```rust,no_run
/// use traitdex::File;
/// use std::path::Path;
///
/// let file = File::from_file(Path::new("doc/implementors/core/convert/trait.From.js"))?;
/// println!("Loaded {} bytes", file.len());
/// # Ok::<(), traitdex::Error>(())
/// ```
///
/// ## Loading from memory
///
/// ```rust
/// use traitdex::File;
///
/// let file = File::from_mem(b"(function() {var implementors = {};\n})()".to_vec())?;
/// assert!(!file.is_empty());
/// # Ok::<(), traitdex::Error>(())
/// ```
pub struct File {
    /// The underlying data source (memory or file).
    data: Box<dyn Backend>,
}

impl File {
    /// Load an artifact file from disk using memory-mapped I/O.
    ///
    /// # Arguments
    /// * `path` - Path to the artifact on disk
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or
    /// [`crate::Error::Error`] if memory mapping fails.
    pub fn from_file(path: &Path) -> Result<File> {
        Ok(File {
            data: Box::new(Physical::new(path)?),
        })
    }

    /// Load an artifact from an in-memory buffer.
    ///
    /// # Arguments
    /// * `data` - The raw artifact bytes
    ///
    /// # Errors
    /// Currently infallible; the signature matches [`File::from_file`] so callers
    /// can treat both sources uniformly.
    pub fn from_mem(data: Vec<u8>) -> Result<File> {
        Ok(File {
            data: Box::new(Memory::new(data)),
        })
    }

    /// Returns a slice of the data at the given offset and length.
    ///
    /// # Arguments
    /// * `offset` - The starting offset within the data
    /// * `len` - The length of the slice in bytes
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the requested range is out of bounds.
    pub fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        self.data.data_slice(offset, len)
    }

    /// Returns the entire artifact data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.data()
    }

    /// Returns the artifact contents as validated UTF-8 text.
    ///
    /// # Errors
    /// Returns [`crate::Error::Utf8`] if the bytes are not valid UTF-8.
    pub fn text(&self) -> Result<&str> {
        Ok(std::str::from_utf8(self.data.data())?)
    }

    /// Returns the total length of the artifact in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the artifact contains no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mem_roundtrip() {
        let file = File::from_mem(b"(function() {var implementors = {};\n})()".to_vec()).unwrap();

        assert_eq!(file.len(), 40);
        assert!(!file.is_empty());
        assert_eq!(file.data_slice(0, 9).unwrap(), b"(function");
        assert!(file.data_slice(0, 42).is_err());
        assert!(file.text().unwrap().ends_with("})()"));
    }

    #[test]
    fn text_rejects_invalid_utf8() {
        let file = File::from_mem(vec![0x28, 0xFF, 0xFE]).unwrap();

        assert!(matches!(file.text(), Err(crate::Error::Utf8(_))));
    }

    #[test]
    fn empty_buffer() {
        let file = File::from_mem(Vec::new()).unwrap();

        assert!(file.is_empty());
        assert_eq!(file.text().unwrap(), "");
    }
}
