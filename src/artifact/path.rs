//! Trait paths: which trait an artifact documents.
//!
//! An implementors artifact does not name its trait in the data it registers; the trait is
//! encoded in the artifact's location beneath the `implementors/` directory of a generated
//! documentation tree: `implementors/core/convert/trait.From.js` documents
//! `core::convert::From`. This module provides [`crate::artifact::path::TraitPath`], the
//! parsed form of that location, used as the key of the consumer-side index.

use std::{
    fmt,
    path::{Component, Path, PathBuf},
    str::FromStr,
};

use crate::Result;

/// The fully qualified path of a documented trait.
///
/// A `TraitPath` is the identity an implementors artifact carries through its filesystem
/// location: the module segments between `implementors/` and the artifact file, plus the
/// trait name from the `trait.<Name>.js` leaf. Paths order lexicographically by segments,
/// which gives the index a stable, human-friendly iteration order.
///
/// # Examples
///
/// ```rust
/// use traitdex::TraitPath;
/// use std::path::Path;
///
/// let path = TraitPath::from_artifact_path(
///     Path::new("doc/implementors/core/convert/trait.From.js"),
/// )?;
/// assert_eq!(path.modules(), ["core", "convert"]);
/// assert_eq!(path.name(), "From");
/// assert_eq!(path.to_string(), "core::convert::From");
/// # Ok::<(), traitdex::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TraitPath {
    /// Module segments leading to the trait
    modules: Vec<String>,
    /// The trait's own name
    name: String,
}

impl TraitPath {
    /// Create a trait path from its module segments and trait name.
    ///
    /// # Arguments
    /// * `modules` - Module segments, outermost first
    /// * `name` - The trait name
    pub fn new(
        modules: impl IntoIterator<Item = impl Into<String>>,
        name: impl Into<String>,
    ) -> TraitPath {
        TraitPath {
            modules: modules.into_iter().map(Into::into).collect(),
            name: name.into(),
        }
    }

    /// Derive the trait path from an artifact's filesystem location.
    ///
    /// The leaf must be shaped `trait.<Name>.js` where `<Name>` is an ASCII identifier,
    /// so every derived path survives a `Display`-then-parse round trip. Module segments
    /// are the path components
    /// between the last `implementors` component and the leaf; if no `implementors`
    /// component is present, all parent components of a relative path are used, so paths
    /// relative to the `implementors/` directory itself also work.
    ///
    /// # Arguments
    /// * `path` - Artifact location, absolute or relative
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the leaf is not `trait.<Name>.js`, or
    /// [`crate::Error::NotSupported`] for an absolute path without an `implementors`
    /// component, where the module segments would be meaningless.
    pub fn from_artifact_path(path: &Path) -> Result<TraitPath> {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return Err(malformed_error!(
                "artifact path '{}' has no file name",
                path.display()
            ));
        };

        let name = file_name
            .strip_prefix("trait.")
            .and_then(|rest| rest.strip_suffix(".js"))
            .filter(|name| {
                !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
            })
            .ok_or_else(|| {
                malformed_error!(
                    "artifact file name '{}' is not shaped 'trait.<Name>.js'",
                    file_name
                )
            })?;

        let components: Vec<&str> = path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => segment.to_str(),
                _ => None,
            })
            .collect();

        let modules = match components.iter().rposition(|&c| c == "implementors") {
            Some(anchor) => &components[anchor + 1..],
            None if path.is_absolute() => return Err(crate::Error::NotSupported),
            None => &components[..],
        };

        Ok(TraitPath::new(modules.iter().copied(), name))
    }

    /// Module segments, outermost first.
    #[must_use]
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// The trait's own name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The artifact file name this path maps to (`trait.<Name>.js`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("trait.{}.js", self.name)
    }

    /// The artifact location relative to an `implementors/` directory.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.modules.iter().collect();
        path.push(self.file_name());
        path
    }
}

impl fmt::Display for TraitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for module in &self.modules {
            write!(f, "{module}::")?;
        }
        f.write_str(&self.name)
    }
}

impl FromStr for TraitPath {
    type Err = crate::Error;

    /// Parse a `::`-separated path such as `core::convert::From`.
    fn from_str(value: &str) -> Result<TraitPath> {
        let mut segments: Vec<&str> = value.split("::").collect();
        let name = segments.pop().filter(|name| !name.is_empty());

        let valid = |s: &str| {
            !s.is_empty()
                && s.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
        };

        match name {
            Some(name) if valid(name) && segments.iter().all(|s| valid(s)) => {
                Ok(TraitPath::new(segments, name))
            }
            _ => Err(malformed_error!("invalid trait path '{}'", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_artifact_path_with_anchor() {
        let path = TraitPath::from_artifact_path(Path::new(
            "/docs/build/doc/implementors/core/ops/trait.Drop.js",
        ))
        .unwrap();

        assert_eq!(path.modules(), ["core", "ops"]);
        assert_eq!(path.name(), "Drop");
        assert_eq!(path.to_string(), "core::ops::Drop");
    }

    #[test]
    fn from_artifact_path_relative_without_anchor() {
        let path =
            TraitPath::from_artifact_path(Path::new("core/convert/trait.From.js")).unwrap();

        assert_eq!(path.modules(), ["core", "convert"]);
        assert_eq!(path.name(), "From");
    }

    #[test]
    fn from_artifact_path_top_level_trait() {
        let path = TraitPath::from_artifact_path(Path::new("trait.Send.js")).unwrap();

        assert!(path.modules().is_empty());
        assert_eq!(path.to_string(), "Send");
    }

    #[test]
    fn from_artifact_path_rejects_other_leaves() {
        for bad in [
            "core/convert/From.js",
            "trait..js",
            "trait.From.json",
            "trait.From",
            "trait.x.y.js",
            "trait.A-B.js",
        ] {
            assert!(
                TraitPath::from_artifact_path(Path::new(bad)).is_err(),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn from_artifact_path_rejects_unanchored_absolute() {
        let result = TraitPath::from_artifact_path(Path::new("/tmp/trait.Drop.js"));
        assert!(matches!(result, Err(crate::Error::NotSupported)));
    }

    #[test]
    fn roundtrip_relative_path() {
        let path = TraitPath::new(["core", "convert"], "From");
        assert_eq!(path.file_name(), "trait.From.js");
        assert_eq!(
            path.relative_path(),
            PathBuf::from("core/convert/trait.From.js")
        );

        let reparsed = TraitPath::from_artifact_path(&path.relative_path()).unwrap();
        assert_eq!(reparsed, path);
    }

    #[test]
    fn derived_paths_reparse_from_display() {
        // Anything from_artifact_path accepts must survive Display-then-parse
        let path = TraitPath::from_artifact_path(Path::new("core/ops/trait.Drop.js")).unwrap();
        let reparsed: TraitPath = path.to_string().parse().unwrap();
        assert_eq!(reparsed, path);
    }

    #[test]
    fn ordering_is_lexicographic_by_segments() {
        let mut paths = vec![
            TraitPath::from_str("core::ops::Drop").unwrap(),
            TraitPath::from_str("core::convert::From").unwrap(),
            TraitPath::from_str("core::convert::AsRef").unwrap(),
        ];
        paths.sort();

        let display: Vec<_> = paths.iter().map(ToString::to_string).collect();
        assert_eq!(
            display,
            ["core::convert::AsRef", "core::convert::From", "core::ops::Drop"]
        );
    }

    #[test]
    fn from_str_rejects_garbage() {
        for bad in ["", "::", "core::", "::From", "core..From", "a::b c"] {
            assert!(TraitPath::from_str(bad).is_err(), "accepted {bad}");
        }
    }
}
