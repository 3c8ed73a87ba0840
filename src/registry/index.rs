//! Consumer-side trait index.
//!
//! This module provides [`crate::registry::index::ImplementorIndex`], the owned registry a
//! documentation UI keeps instead of relying on an incidental global slot: one implementor
//! table per documented trait, loaded explicitly per artifact with defined
//! overwrite-on-collision semantics. The index is an ordered concurrent map, so listings
//! iterate in stable trait-path order while the doc-root scanner loads from worker threads.

use std::{collections::BTreeSet, sync::Arc};

use crossbeam_skiplist::SkipMap;

use crate::{
    artifact::{ImplementorTable, TraitPath},
    registry::slot::Registrar,
};

/// Registry of implementor tables, one per documented trait.
///
/// The index owns its data: [`ImplementorIndex::load`] transfers a whole table in, and a
/// load for a trait that is already present replaces that trait's table entirely. Nothing
/// is merged; duplicate artifacts for the same trait resolve last-load-wins, matching the
/// slot's consistency model.
///
/// Iteration is ordered by [`TraitPath`], which keeps "who implements what" listings
/// stable across runs.
///
/// # Examples
///
/// ```rust
/// use traitdex::{Artifact, ImplementorIndex, TraitPath};
///
/// let index = ImplementorIndex::new();
/// let table = Artifact::parse(
///     "(function() {var implementors = {};\nimplementors[\"libA\"] = [\"entryA1\",];\n})()",
/// )?;
/// index.load("core::ops::Drop".parse()?, table);
///
/// let drop_path: TraitPath = "core::ops::Drop".parse()?;
/// assert_eq!(index.get(&drop_path).unwrap().value().len(), 1);
/// # Ok::<(), traitdex::Error>(())
/// ```
pub struct ImplementorIndex {
    traits: SkipMap<TraitPath, ImplementorTable>,
}

impl ImplementorIndex {
    /// Create a new empty index.
    #[must_use]
    pub fn new() -> ImplementorIndex {
        ImplementorIndex {
            traits: SkipMap::new(),
        }
    }

    /// Load a table for a trait, replacing any table already present.
    ///
    /// # Arguments
    /// * `trait_path` - The trait the table belongs to
    /// * `table` - The table; ownership transfers to the index
    pub fn load(&self, trait_path: TraitPath, table: ImplementorTable) {
        self.traits.insert(trait_path, table);
    }

    /// Get the table for a trait.
    ///
    /// # Arguments
    /// * `trait_path` - The trait to look up
    pub fn get(
        &self,
        trait_path: &TraitPath,
    ) -> Option<crossbeam_skiplist::map::Entry<'_, TraitPath, ImplementorTable>> {
        self.traits.get(trait_path)
    }

    /// Returns true if the index holds a table for the given trait.
    #[must_use]
    pub fn contains(&self, trait_path: &TraitPath) -> bool {
        self.traits.contains_key(trait_path)
    }

    /// Iterate over `(trait path, table)` entries in trait-path order.
    pub fn iter(&self) -> crossbeam_skiplist::map::Iter<'_, TraitPath, ImplementorTable> {
        self.traits.iter()
    }

    /// All crate names that appear in any loaded table, deduplicated and sorted.
    #[must_use]
    pub fn crates(&self) -> BTreeSet<String> {
        let mut crates = BTreeSet::new();
        for entry in self.traits.iter() {
            for (krate, _) in entry.value() {
                crates.insert(krate.to_string());
            }
        }

        crates
    }

    /// Number of traits in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    /// Returns true if no tables are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Total number of implementor entries across all traits and crates.
    #[must_use]
    pub fn implementor_count(&self) -> usize {
        self.traits
            .iter()
            .map(|entry| entry.value().entry_count())
            .sum()
    }

    /// Adapt one trait's index slot to the [`Registrar`] trait.
    ///
    /// The returned registrar loads every table it receives under `trait_path`, so a
    /// [`crate::registry::slot::RegistrySlot`] can feed the index directly:
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use traitdex::{Artifact, ImplementorIndex, RegistrySlot, TraitPath};
    ///
    /// let index = Arc::new(ImplementorIndex::new());
    /// let slot = RegistrySlot::new();
    /// slot.install(Arc::clone(&index).registrar_for("core::ops::Drop".parse()?))?;
    ///
    /// slot.publish(Artifact::parse(
    ///     "(function() {var implementors = {};\nimplementors[\"libA\"] = [\"entryA1\",];\n})()",
    /// )?)?;
    ///
    /// let drop_path: TraitPath = "core::ops::Drop".parse()?;
    /// assert!(index.contains(&drop_path));
    /// # Ok::<(), traitdex::Error>(())
    /// ```
    ///
    /// # Arguments
    /// * `trait_path` - The trait whose slot the registrar feeds
    #[must_use]
    pub fn registrar_for(self: Arc<Self>, trait_path: TraitPath) -> IndexRegistrar {
        IndexRegistrar {
            index: self,
            trait_path,
        }
    }
}

impl Default for ImplementorIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ImplementorIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImplementorIndex")
            .field("traits", &self.len())
            .field("implementors", &self.implementor_count())
            .finish()
    }
}

/// A [`Registrar`] that loads published tables into one trait's index slot.
///
/// Created by [`ImplementorIndex::registrar_for`].
pub struct IndexRegistrar {
    index: Arc<ImplementorIndex>,
    trait_path: TraitPath,
}

impl Registrar for IndexRegistrar {
    fn register(&self, table: ImplementorTable) {
        self.index.load(self.trait_path.clone(), table);
    }
}
