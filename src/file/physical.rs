//! Physical file backend for memory-mapped I/O.
//!
//! This module provides the [`crate::file::physical::Physical`] backend that implements the
//! [`crate::file::Backend`] trait for accessing artifacts from disk using memory-mapped I/O.
//! Generated documentation trees can contain thousands of implementors artifacts; mapping
//! them avoids copying each file into an owned buffer just to scan it once.
//!
//! # Key Components
//!
//! - [`crate::file::physical::Physical`] - Main backend struct implementing [`crate::file::Backend`]
//! - [`crate::file::physical::Physical::new`] - Creates backend from file path with memory mapping
//!
//! The physical backend complements the [`crate::file::memory::Memory`] backend, which serves
//! data that is already loaded into memory.

use super::Backend;
use crate::{
    Error::{Error, FileError},
    Result,
};

use memmap2::Mmap;
use std::{fs, path::Path};

/// A file backend that uses memory-mapped I/O for efficient access to artifacts on disk.
///
/// [`crate::file::physical::Physical`] maps the artifact directly into the process's virtual
/// address space. The file is mapped read-only and shared, and all access operations include
/// bounds checking.
///
/// # Examples
///
/// ```rust,ignore
/// use traitdex::file::{Physical, Backend};
/// use std::path::Path;
///
/// let physical = Physical::new(Path::new("doc/implementors/core/ops/trait.Drop.js"))?;
/// let header = physical.data_slice(0, 9)?;
/// assert_eq!(header, b"(function");
/// # Ok::<(), traitdex::Error>(())
/// ```
#[derive(Debug)]
pub struct Physical {
    /// Memory-mapped file data
    data: Mmap,
}

impl Physical {
    /// Create a new physical file backend by memory-mapping the specified file.
    ///
    /// # Arguments
    /// * `path` - Path to the artifact on disk. Accepts `&Path`, `&str`, `String`, or `PathBuf`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or
    /// [`crate::Error::Error`] if memory mapping fails.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(error) => return Err(FileError(error)),
        };

        let mmap = match unsafe { Mmap::map(&file) } {
            Ok(mmap) => mmap,
            Err(error) => return Err(Error(error.to_string())),
        };

        Ok(Physical { data: mmap })
    }
}

impl Backend for Physical {
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
        self.data.as_ref()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
