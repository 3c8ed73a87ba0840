//! Publication and consumer-side registries for implementor tables.
//!
//! The original artifacts publish by side effect at load time: call the UI's callback if
//! it exists, otherwise park the table in a global pending slot. This module carries those
//! exact semantics - exactly one branch per publish, last-write-wins, never a merge - but
//! as explicit owned objects with a pure build step in front, so every transition is
//! directly testable.
//!
//! # Key Components
//!
//! - [`crate::registry::slot::RegistrySlot`] - The two-state publication machine
//!   (registrar installed / table pending)
//! - [`crate::registry::slot::Registrar`] - The consumer-side callback contract
//! - [`crate::registry::index::ImplementorIndex`] - The registry a consumer owns:
//!   one table per trait, ordered iteration, overwrite-on-collision loads
//! - [`crate::registry::loader::scan_doc_root`] - Batch discovery and parallel parsing
//!   of every artifact under a documentation root
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use traitdex::{Artifact, ImplementorIndex, RegistrySlot};
//!
//! // Artifact loads publish into a slot, whenever they happen.
//! let slot = RegistrySlot::new();
//! slot.publish(Artifact::parse(
//!     "(function() {var implementors = {};\nimplementors[\"libA\"] = [\"entryA1\",];\n})()",
//! )?)?;
//!
//! // The UI initializes later, owns its index, and drains the slot.
//! let index = Arc::new(ImplementorIndex::new());
//! slot.install(Arc::clone(&index).registrar_for("core::ops::Drop".parse()?))?;
//! assert_eq!(index.len(), 1);
//! # Ok::<(), traitdex::Error>(())
//! ```

pub mod index;
pub mod loader;
pub mod slot;

pub use index::{ImplementorIndex, IndexRegistrar};
pub use loader::scan_doc_root;
pub use slot::{Registrar, RegistrySlot};
