//! Common imports for working with implementor artifacts.
//!
//! This prelude re-exports the types needed for the typical workflow: parse an artifact
//! (or a whole doc root), then publish or index the resulting tables.
//!
//! # Examples
//!
//! ```rust,no_run
//! use traitdex::prelude::*;
//! use std::path::Path;
//!
//! let artifact = Artifact::from_file(Path::new(
//!     "doc/implementors/core/ops/trait.Drop.js",
//! ))?;
//! let slot = RegistrySlot::new();
//! slot.publish(artifact.into_table())?;
//! # Ok::<(), traitdex::Error>(())
//! ```

pub use crate::{
    artifact::{Artifact, ImplementorEntry, ImplementorTable, TraitPath},
    registry::{scan_doc_root, ImplementorIndex, IndexRegistrar, Registrar, RegistrySlot},
    Error, File, Result,
};
