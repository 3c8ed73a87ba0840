//! Doc-root discovery and batch loading.
//!
//! A generated documentation tree keeps its implementors artifacts under
//! `<doc root>/implementors/<module path>/trait.<Name>.js`. This module walks that tree,
//! parses every artifact in parallel, and loads the results into an
//! [`crate::registry::index::ImplementorIndex`].
//!
//! Candidates are sorted before loading, so when a tree contains duplicate artifacts for
//! the same trait path the later one wins deterministically - the in-process equivalent
//! of sequential artifact loads overwriting each other.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{
    artifact::{Artifact, ImplementorTable, TraitPath},
    registry::index::ImplementorIndex,
    Result,
};

/// Scan a documentation root and index every implementors artifact beneath it.
///
/// The directory handed in must be a doc root, i.e. contain an `implementors/`
/// subdirectory. Artifacts are discovered recursively (only `trait.<Name>.js` leaves
/// count; rustdoc places nothing else in that tree, but stray files are ignored),
/// parsed on the rayon thread pool, and loaded into a fresh index in sorted path
/// order.
///
/// The scan is strict: one unparseable artifact fails the whole scan with that
/// artifact's error. A generated tree is all-or-nothing, and skipping a corrupt
/// artifact would silently drop a trait from every listing.
///
/// # Arguments
/// * `root` - The documentation root (the directory containing `implementors/`)
///
/// # Errors
/// Returns [`crate::Error::NotSupported`] if `root` has no `implementors/` directory,
/// [`crate::Error::FileError`] for filesystem failures during the walk, or any parse
/// error from [`Artifact::from_file`].
///
/// # Examples
///
/// ```rust,no_run
/// use traitdex::scan_doc_root;
/// use std::path::Path;
///
/// let index = scan_doc_root(Path::new("target/doc"))?;
/// for entry in index.iter() {
///     println!("{}: {} entries", entry.key(), entry.value().entry_count());
/// }
/// # Ok::<(), traitdex::Error>(())
/// ```
pub fn scan_doc_root(root: &Path) -> Result<ImplementorIndex> {
    let implementors_dir = root.join("implementors");
    if !implementors_dir.is_dir() {
        return Err(crate::Error::NotSupported);
    }

    let mut candidates = Vec::new();
    collect_artifacts(&implementors_dir, &mut candidates)?;
    candidates.sort();

    let parsed: Vec<(TraitPath, ImplementorTable)> = candidates
        .par_iter()
        .map(|path| {
            let table = Artifact::from_file(path)?.into_table();
            let trait_path = TraitPath::from_artifact_path(path)?;

            Ok((trait_path, table))
        })
        .collect::<Result<_>>()?;

    // Sequential load in sorted order keeps duplicate resolution deterministic.
    let index = ImplementorIndex::new();
    for (trait_path, table) in parsed {
        index.load(trait_path, table);
    }

    Ok(index)
}

impl ImplementorIndex {
    /// Parse a single artifact from disk and load it into the index.
    ///
    /// The trait path must be derivable from the artifact's location; use this for
    /// incremental updates after [`scan_doc_root`] built the initial index.
    ///
    /// # Arguments
    /// * `path` - Path to the artifact on disk
    ///
    /// # Errors
    /// Returns any error from [`Artifact::from_file`], or from
    /// [`TraitPath::from_artifact_path`] when the location does not identify a trait.
    pub fn load_artifact(&self, path: &Path) -> Result<TraitPath> {
        let trait_path = TraitPath::from_artifact_path(path)?;
        let table = Artifact::from_file(path)?.into_table();
        self.load(trait_path.clone(), table);

        Ok(trait_path)
    }
}

/// Recursively gather `trait.<Name>.js` leaves under `dir`.
fn collect_artifacts(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_artifacts(&path, out)?;
        } else if is_artifact_name(&path) {
            out.push(path);
        }
    }

    Ok(())
}

fn is_artifact_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_prefix("trait."))
        .and_then(|rest| rest.strip_suffix(".js"))
        .is_some_and(|name| {
            !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_name_filter() {
        assert!(is_artifact_name(Path::new("core/ops/trait.Drop.js")));
        assert!(is_artifact_name(Path::new("trait.From.js")));

        assert!(!is_artifact_name(Path::new("trait..js")));
        assert!(!is_artifact_name(Path::new("sidebar-items.js")));
        assert!(!is_artifact_name(Path::new("trait.Drop.html")));
        assert!(!is_artifact_name(Path::new("struct.Buffer.js")));
        // A dotted name cannot be a trait identifier
        assert!(!is_artifact_name(Path::new("trait.x.y.js")));
        assert!(!is_artifact_name(Path::new("trait.A-B.js")));
    }

    #[test]
    fn scan_rejects_non_doc_root() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("src")).unwrap();

        let result = scan_doc_root(temp.path());
        assert!(matches!(result, Err(crate::Error::NotSupported)));
    }
}
