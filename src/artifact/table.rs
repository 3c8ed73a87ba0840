//! Implementor tables: the data registered by one artifact.
//!
//! This module provides the types an implementors artifact registers: opaque pre-rendered
//! HTML fragments ([`crate::artifact::table::ImplementorEntry`]) grouped per crate in an
//! insertion-ordered table ([`crate::artifact::table::ImplementorTable`]). Entry content is
//! never interpreted by this crate; fragments are carried verbatim for a documentation UI
//! to render.

use std::{collections::HashMap, fmt, sync::Arc};

/// One pre-rendered implementor fragment.
///
/// An entry is an opaque HTML string describing a single type's implementation of the
/// documented trait, exactly as the documentation generator rendered it. Entries are
/// immutable once constructed and cheap to clone: the underlying storage is shared, so
/// a table that crosses the publication boundary hands the consumer the same strings
/// it was built with rather than copies.
///
/// # Examples
///
/// ```rust
/// use traitdex::ImplementorEntry;
///
/// let entry = ImplementorEntry::new("impl Drop for Buffer");
/// let alias = entry.clone();
/// assert!(entry.shares_storage(&alias));
/// assert_eq!(entry.as_str(), "impl Drop for Buffer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImplementorEntry(Arc<str>);

impl ImplementorEntry {
    /// Create an entry from the rendered fragment text.
    ///
    /// # Arguments
    /// * `fragment` - The pre-rendered HTML describing one implementation
    pub fn new(fragment: impl Into<Arc<str>>) -> ImplementorEntry {
        ImplementorEntry(fragment.into())
    }

    /// The fragment text, verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if both entries share the same underlying allocation.
    ///
    /// Cloning an entry, a list of entries or a whole table preserves storage
    /// identity; this is how tests pin down that publication transfers tables
    /// rather than rebuilding them.
    #[must_use]
    pub fn shares_storage(&self, other: &ImplementorEntry) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for ImplementorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImplementorEntry {
    fn from(fragment: &str) -> ImplementorEntry {
        ImplementorEntry::new(fragment)
    }
}

impl From<String> for ImplementorEntry {
    fn from(fragment: String) -> ImplementorEntry {
        ImplementorEntry::new(fragment)
    }
}

impl AsRef<str> for ImplementorEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Insertion-ordered mapping from crate name to implementor entries.
///
/// This is the value an implementors artifact registers: for each crate the documentation
/// covers, an ordered list of fragments describing that crate's implementations of the
/// documented trait. The table preserves two orders verbatim, both of which matter for
/// stable display:
///
/// - the order in which crate keys first appear in the artifact, and
/// - the order of entries within each crate's list (documentation-generation order).
///
/// Keys are unique. Re-inserting an existing key replaces its entry list while keeping
/// the key's original position, which is exactly what repeated assignment to the same
/// property does in the generated JavaScript.
///
/// # Examples
///
/// ```rust
/// use traitdex::ImplementorTable;
///
/// let mut table = ImplementorTable::new();
/// table.insert("luminance", vec!["impl Drop for Buffer".into()]);
/// table.insert("gl", vec!["impl Drop for Vec".into()]);
///
/// assert_eq!(table.len(), 2);
/// let keys: Vec<_> = table.keys().collect();
/// assert_eq!(keys, ["luminance", "gl"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImplementorTable {
    /// Per-crate entry lists in key first-insertion order
    slots: Vec<(String, Vec<ImplementorEntry>)>,
    /// Crate name to slot position
    index: HashMap<String, usize>,
}

impl ImplementorTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> ImplementorTable {
        ImplementorTable {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an entry list for a crate.
    ///
    /// If the crate is already present its list is replaced in place and the previous
    /// list is returned; the key keeps its original position. No merging is performed.
    ///
    /// # Arguments
    /// * `crate_name` - The crate the entries belong to
    /// * `entries` - The ordered implementor fragments for that crate
    pub fn insert(
        &mut self,
        crate_name: impl Into<String>,
        entries: Vec<ImplementorEntry>,
    ) -> Option<Vec<ImplementorEntry>> {
        let crate_name = crate_name.into();
        if let Some(&slot) = self.index.get(&crate_name) {
            return Some(std::mem::replace(&mut self.slots[slot].1, entries));
        }

        self.index.insert(crate_name.clone(), self.slots.len());
        self.slots.push((crate_name, entries));
        None
    }

    /// Get the entry list for a crate.
    ///
    /// # Arguments
    /// * `crate_name` - The crate to look up
    #[must_use]
    pub fn get(&self, crate_name: &str) -> Option<&[ImplementorEntry]> {
        self.index
            .get(crate_name)
            .map(|&slot| self.slots[slot].1.as_slice())
    }

    /// Returns true if the table has an entry list for the given crate.
    #[must_use]
    pub fn contains_key(&self, crate_name: &str) -> bool {
        self.index.contains_key(crate_name)
    }

    /// Iterate over crate names in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(crate name, entries)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ImplementorEntry])> {
        self.slots
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Number of crates in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the table has no crates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total number of implementor entries across all crates.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.slots.iter().map(|(_, entries)| entries.len()).sum()
    }
}

impl<'a> IntoIterator for &'a ImplementorTable {
    type Item = (&'a str, &'a [ImplementorEntry]);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, Vec<ImplementorEntry>)>,
        fn(&'a (String, Vec<ImplementorEntry>)) -> (&'a str, &'a [ImplementorEntry]),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn pair<'a>(
            slot: &'a (String, Vec<ImplementorEntry>),
        ) -> (&'a str, &'a [ImplementorEntry]) {
            (slot.0.as_str(), slot.1.as_slice())
        }

        self.slots.iter().map(pair)
    }
}

impl<K, V> FromIterator<(K, V)> for ImplementorTable
where
    K: Into<String>,
    V: IntoIterator,
    V::Item: Into<ImplementorEntry>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> ImplementorTable {
        let mut table = ImplementorTable::new();
        for (crate_name, entries) in iter {
            table.insert(
                crate_name,
                entries.into_iter().map(Into::into).collect::<Vec<_>>(),
            );
        }

        table
    }
}
