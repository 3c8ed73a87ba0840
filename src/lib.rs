// Copyright 2026 The traitdex Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'file/physical.rs' uses mmap to map a file into memory

//! # traitdex
//!
//! A toolkit for parsing and indexing the trait-implementor artifacts that rustdoc
//! emits into generated documentation trees. Each `implementors/**/trait.<Name>.js`
//! artifact registers a mapping from crate name to an ordered list of pre-rendered
//! HTML fragments, one per type implementing the documented trait; `traitdex` decodes
//! that data into typed tables and implements the registrar / pending-slot publication
//! protocol the artifacts perform at load time.
//!
//! ## Features
//!
//! - **Pure parsing** - building a table from artifact text has no side effects;
//!   publication is a separate, explicit step
//! - **Faithful semantics** - key order, entry order and last-write-wins overwrite
//!   behavior match what the generated JavaScript actually does
//! - **Concurrent index** - ordered, lock-free trait index with parallel doc-root
//!   scanning for whole documentation trees
//! - **Memory-mapped I/O** - artifacts are read through a memory-mapped backend with
//!   bounds-checked access
//! - **Opaque payloads** - implementor fragments are carried verbatim and never
//!   interpreted
//!
//! ## Quick Start
//!
//! Add `traitdex` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! traitdex = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust,no_run
//! use traitdex::prelude::*;
//! use std::path::Path;
//!
//! // Parse one artifact and inspect its table
//! let artifact = Artifact::from_file(Path::new(
//!     "doc/implementors/core/ops/trait.Drop.js",
//! ))?;
//! for (krate, entries) in artifact.table() {
//!     println!("{krate}: {} implementors", entries.len());
//! }
//! # Ok::<(), traitdex::Error>(())
//! ```
//!
//! ### Indexing a Documentation Tree
//!
//! ```rust,no_run
//! use traitdex::scan_doc_root;
//! use std::path::Path;
//!
//! let index = scan_doc_root(Path::new("target/doc"))?;
//! println!("{} traits, {} implementors", index.len(), index.implementor_count());
//! # Ok::<(), traitdex::Error>(())
//! ```
//!
//! ### Publication
//!
//! The artifacts' load-time behavior - call the UI's registration callback if it is
//! installed, otherwise park the table in a pending slot, last write wins - is
//! available as an explicit object:
//!
//! ```rust
//! use traitdex::{Artifact, ImplementorTable, RegistrySlot};
//!
//! let slot = RegistrySlot::new();
//! let table = Artifact::parse(
//!     "(function() {var implementors = {};\nimplementors[\"libA\"] = [\"entryA1\",];\n})()",
//! )?;
//!
//! // No consumer yet: the table is parked.
//! slot.publish(table)?;
//!
//! // The consumer initializes later and drains the slot.
//! slot.install(|table: ImplementorTable| println!("{} crates", table.len()))?;
//! # Ok::<(), traitdex::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `traitdex` is organized into a small number of modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`artifact`] - Artifact decoding and the table data model
//! - [`registry`] - Publication protocol and the consumer-side trait index
//! - [`Error`] and [`Result`] - Comprehensive error handling
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result) with specific error information:
//!
//! ```rust
//! use traitdex::{Artifact, Error};
//!
//! match Artifact::parse("var searchIndex = {};") {
//!     Ok(table) => println!("parsed {} crates", table.len()),
//!     Err(Error::NotSupported) => println!("not an implementors artifact"),
//!     Err(Error::Malformed { message, .. }) => println!("malformed artifact: {}", message),
//!     Err(e) => println!("other error: {}", e),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! The crate includes fuzzing support for the artifact decoder:
//!
//! ```bash
//! # Install fuzzing tools
//! cargo install cargo-fuzz
//!
//! # Run fuzzer
//! cargo +nightly fuzz run artifact --release
//! ```
//!
//! The test suite runs against real rustdoc output kept under `tests/artifacts/`:
//!
//! ```bash
//! cargo test
//! ```

#[macro_use]
pub(crate) mod error;
pub(crate) mod file;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the traitdex library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust,no_run
/// use traitdex::prelude::*;
///
/// let artifact = Artifact::from_file("doc/implementors/core/ops/trait.Drop.js".as_ref())?;
/// println!("{} crates", artifact.table().len());
/// # Ok::<(), traitdex::Error>(())
/// ```
pub mod prelude;

/// Decoding of implementors artifacts and the table data model.
///
/// This module turns the constrained JavaScript rustdoc emits into typed data:
///
/// - [`artifact::Artifact`] - One parsed artifact (entry point)
/// - [`artifact::ImplementorTable`] / [`artifact::ImplementorEntry`] - The registered
///   mapping of crate name to ordered, opaque implementor fragments
/// - [`artifact::TraitPath`] - Which trait an artifact documents, from its location
/// - [`artifact::Scanner`] - The bounds-checked cursor the decoder runs on
///
/// Parsing is pure; see [`artifact::Artifact::parse`]. Publication lives in
/// [`registry`].
///
/// # Examples
///
/// ```rust
/// use traitdex::Artifact;
///
/// let table = Artifact::parse(
///     "(function() {var implementors = {};\nimplementors[\"libA\"] = [\"entryA1\",];\n})()",
/// )?;
/// assert_eq!(table.get("libA").unwrap().len(), 1);
/// # Ok::<(), traitdex::Error>(())
/// ```
pub mod artifact;

/// Publication protocol and consumer-side registries.
///
/// Implements the artifacts' load-time hand-off as explicit objects:
///
/// - [`registry::RegistrySlot`] - Registrar-or-pending publication machine with
///   last-write-wins semantics
/// - [`registry::Registrar`] - Consumer-side callback contract
/// - [`registry::ImplementorIndex`] - Ordered, concurrent per-trait registry
/// - [`registry::scan_doc_root`] - Batch loading of a whole documentation tree
///
/// # Examples
///
/// ```rust
/// use traitdex::{ImplementorTable, RegistrySlot};
///
/// let slot = RegistrySlot::new();
/// let mut table = ImplementorTable::new();
/// table.insert("libA", vec!["entryA1".into()]);
///
/// slot.publish(table)?;
/// assert!(slot.pending_snapshot()?.is_some());
/// # Ok::<(), traitdex::Error>(())
/// ```
pub mod registry;

/// `traitdex` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible
/// operations.
///
/// # Examples
///
/// ```rust,no_run
/// use traitdex::{Artifact, Result};
///
/// fn load_artifact(path: &str) -> Result<Artifact> {
///     Artifact::from_file(std::path::Path::new(path))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `traitdex` Error type
///
/// The main error type for all operations in this crate. Provides detailed error
/// information for artifact parsing, doc-root scanning, and registry operations.
///
/// # Examples
///
/// ```rust
/// use traitdex::{Artifact, Error};
///
/// match Artifact::parse("") {
///     Ok(_) => unreachable!(),
///     Err(Error::Empty) => println!("empty input"),
///     Err(e) => println!("other error: {}", e),
/// }
/// ```
pub use error::Error;

/// Main entry point for working with implementors artifacts.
///
/// See [`artifact::Artifact`] for loading and parsing.
///
/// # Example
///
/// ```rust,no_run
/// use traitdex::Artifact;
/// let artifact = Artifact::from_file(std::path::Path::new(
///     "doc/implementors/core/convert/trait.From.js",
/// ))?;
/// println!("{} crates", artifact.table().len());
/// # Ok::<(), traitdex::Error>(())
/// ```
pub use artifact::Artifact;

/// The core data types registered by an artifact.
///
/// - [`ImplementorEntry`] - One opaque, pre-rendered implementor fragment
/// - [`ImplementorTable`] - Insertion-ordered mapping of crate name to entries
/// - [`TraitPath`] - The documented trait's fully qualified path
pub use artifact::{ImplementorEntry, ImplementorTable, TraitPath};

/// Publication and indexing types.
///
/// - [`RegistrySlot`] - The explicit registrar-or-pending publication slot
/// - [`Registrar`] - The consumer-side callback contract
/// - [`ImplementorIndex`] - The consumer-owned, ordered per-trait registry
pub use registry::{ImplementorIndex, Registrar, RegistrySlot};

/// Batch loading of every artifact under a documentation root.
///
/// See [`registry::scan_doc_root`].
pub use registry::scan_doc_root;

/// Provides access to low-level artifact file loading.
///
/// The [`File`] type abstracts over memory-mapped and in-memory artifact data.
///
/// # Example
///
/// ```rust
/// use traitdex::File;
/// let file = File::from_mem(b"(function() {var implementors = {};\n})()".to_vec())?;
/// assert!(file.text()?.starts_with("(function"));
/// # Ok::<(), traitdex::Error>(())
/// ```
pub use file::File;
