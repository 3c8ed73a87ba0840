//! Parsing and representation of implementors artifacts.
//!
//! An implementors artifact is the JavaScript file rustdoc emits next to a trait's
//! documentation page (`implementors/<modules...>/trait.<Name>.js`). Wrapped in an
//! immediately-invoked function expression, it declares an empty `implementors` object,
//! assigns one ordered array of pre-rendered HTML fragments per crate, and finally hands
//! the object to the documentation UI:
//!
//! ```text
//! (function() {var implementors = {};
//! implementors["luminance"] = ["impl&lt;C, T&gt; Drop for Buffer&lt;C, T&gt; ...",];
//! implementors["gl"] = ["...","...",];
//!
//!             if (window.register_implementors) {
//!                 window.register_implementors(implementors);
//!             } else {
//!                 window.pending_implementors = implementors;
//!             }
//! })()
//! ```
//!
//! This module decodes that shape into typed data. Parsing is pure: it builds an
//! [`crate::artifact::table::ImplementorTable`] and performs no publication. The
//! registration tail is recognized and skipped, never interpreted; its behavior is what
//! [`crate::registry`] implements natively.
//!
//! # Key Components
//!
//! - [`crate::artifact::Artifact`] - One parsed artifact: its table, plus the trait path
//!   when the source location reveals it
//! - [`crate::artifact::table::ImplementorTable`] / [`crate::artifact::table::ImplementorEntry`] -
//!   The registered data
//! - [`crate::artifact::path::TraitPath`] - Which trait the artifact documents
//! - [`crate::artifact::scanner::Scanner`] - The bounds-checked cursor the decoder runs on
//!
//! # Examples
//!
//! ```rust
//! use traitdex::Artifact;
//!
//! let text = r#"(function() {var implementors = {};
//! implementors["libA"] = ["entryA1",];
//! implementors["libB"] = ["entryB1","entryB2",];
//! })()"#;
//!
//! let table = Artifact::parse(text)?;
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("libB").unwrap().len(), 2);
//! # Ok::<(), traitdex::Error>(())
//! ```

pub mod path;
pub mod scanner;
pub mod table;

use std::path::Path;

use crate::{file::File, Result};
pub use path::TraitPath;
pub use scanner::Scanner;
pub use table::{ImplementorEntry, ImplementorTable};

/// One parsed implementors artifact.
///
/// Holds the [`ImplementorTable`] an artifact registers plus, when the artifact was
/// loaded from a location shaped like an implementors tree, the [`TraitPath`] it
/// documents. Construction parses eagerly; an `Artifact` is always fully decoded.
///
/// The artifact itself never publishes anything. Handing the table to a consumer is a
/// separate, explicit step through [`crate::registry::RegistrySlot::publish`] or
/// [`crate::registry::ImplementorIndex::load`].
///
/// # Examples
///
/// ```rust,no_run
/// use traitdex::Artifact;
/// use std::path::Path;
///
/// let artifact = Artifact::from_file(Path::new(
///     "doc/implementors/core/ops/trait.Drop.js",
/// ))?;
///
/// println!("documents {}", artifact.trait_path().unwrap());
/// for (krate, entries) in artifact.table() {
///     println!("  {krate}: {} implementors", entries.len());
/// }
/// # Ok::<(), traitdex::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// The trait this artifact documents, when derivable from its location
    trait_path: Option<TraitPath>,
    /// The registered implementor data
    table: ImplementorTable,
}

impl Artifact {
    /// Load and parse an artifact from disk.
    ///
    /// The trait path is derived from the file's location when it is shaped like an
    /// implementors path (see [`TraitPath::from_artifact_path`]); otherwise the
    /// artifact carries no trait identity and [`Artifact::trait_path`] returns `None`.
    ///
    /// # Arguments
    /// * `path` - Path to the artifact on disk
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be read, or any parse
    /// error from [`Artifact::parse`].
    pub fn from_file(path: &Path) -> Result<Artifact> {
        let file = File::from_file(path)?;
        let table = Self::parse(file.text()?)?;

        Ok(Artifact {
            trait_path: TraitPath::from_artifact_path(path).ok(),
            table,
        })
    }

    /// Parse an artifact from an in-memory buffer.
    ///
    /// A buffer carries no location, so the resulting artifact has no trait path.
    ///
    /// # Arguments
    /// * `data` - The raw artifact bytes
    ///
    /// # Errors
    /// Returns [`crate::Error::Utf8`] for non-UTF-8 input, or any parse error from
    /// [`Artifact::parse`].
    pub fn from_mem(data: Vec<u8>) -> Result<Artifact> {
        let file = File::from_mem(data)?;
        let table = Self::parse(file.text()?)?;

        Ok(Artifact {
            trait_path: None,
            table,
        })
    }

    /// Build an [`ImplementorTable`] from artifact text.
    ///
    /// This is the pure core of the crate: no global state is touched and nothing is
    /// published. Assignments to the same crate within one artifact overwrite the
    /// earlier list (JavaScript object-assignment semantics); the registration tail
    /// after the assignments is skipped without interpretation.
    ///
    /// # Arguments
    /// * `text` - The artifact source text
    ///
    /// # Errors
    /// - [`crate::Error::Empty`] for empty or whitespace-only input
    /// - [`crate::Error::NotSupported`] if the input does not open with the expected
    ///   function expression
    /// - [`crate::Error::Malformed`] for grammar violations inside the artifact
    /// - [`crate::Error::OutOfBounds`] for truncated input
    pub fn parse(text: &str) -> Result<ImplementorTable> {
        let mut scanner = Scanner::new(text);
        scanner.skip_whitespace();

        if scanner.is_eof() {
            return Err(crate::Error::Empty);
        }

        if !scanner.starts_with("(function") {
            return Err(crate::Error::NotSupported);
        }

        // IIFE prelude: `(function() {`
        scanner.expect_literal("(function")?;
        scanner.skip_whitespace();
        scanner.expect_byte(b'(')?;
        scanner.skip_whitespace();
        scanner.expect_byte(b')')?;
        scanner.skip_whitespace();
        scanner.expect_byte(b'{')?;

        // `var implementors = {};`
        scanner.skip_whitespace();
        scanner.expect_literal("var")?;
        scanner.skip_whitespace();
        scanner.expect_literal("implementors")?;
        scanner.skip_whitespace();
        scanner.expect_byte(b'=')?;
        scanner.skip_whitespace();
        scanner.expect_byte(b'{')?;
        scanner.skip_whitespace();
        scanner.expect_byte(b'}')?;
        scanner.skip_whitespace();
        scanner.expect_byte(b';')?;

        let mut table = ImplementorTable::new();
        loop {
            scanner.skip_whitespace();
            if !scanner.starts_with("implementors") {
                break;
            }

            // `implementors["crate"] = [ "entry", ... ];`
            scanner.expect_literal("implementors")?;
            scanner.skip_whitespace();
            scanner.expect_byte(b'[')?;
            scanner.skip_whitespace();
            let crate_name = scanner.read_string()?;
            scanner.skip_whitespace();
            scanner.expect_byte(b']')?;
            scanner.skip_whitespace();
            scanner.expect_byte(b'=')?;
            scanner.skip_whitespace();
            scanner.expect_byte(b'[')?;

            let mut entries = Vec::new();
            loop {
                scanner.skip_whitespace();
                if scanner.eat_byte(b']') {
                    break;
                }

                entries.push(ImplementorEntry::new(scanner.read_string()?));

                scanner.skip_whitespace();
                if !scanner.eat_byte(b',') {
                    scanner.expect_byte(b']')?;
                    break;
                }
            }

            scanner.skip_whitespace();
            scanner.expect_byte(b';')?;

            table.insert(crate_name, entries);
        }

        // Registration tail: skipped without interpretation, but the function body
        // must still close. Input ending before the closing brace was truncated.
        let mut depth = 1u32;
        while depth > 0 {
            match scanner.read_byte()? {
                b'{' => depth += 1,
                b'}' => depth -= 1,
                _ => {}
            }
        }

        // Closing `)()` that invokes the function expression
        scanner.skip_whitespace();
        scanner.expect_byte(b')')?;
        scanner.skip_whitespace();
        scanner.expect_byte(b'(')?;
        scanner.skip_whitespace();
        scanner.expect_byte(b')')?;

        Ok(table)
    }

    /// The trait this artifact documents, when known.
    #[must_use]
    pub fn trait_path(&self) -> Option<&TraitPath> {
        self.trait_path.as_ref()
    }

    /// The registered implementor data.
    #[must_use]
    pub fn table(&self) -> &ImplementorTable {
        &self.table
    }

    /// Consume the artifact, transferring ownership of its table.
    #[must_use]
    pub fn into_table(self) -> ImplementorTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::sample_artifact_text;

    #[test]
    fn parse_minimal_artifact() {
        let table = Artifact::parse("(function() {var implementors = {};\n})()").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn parse_sample_artifact() {
        let table = Artifact::parse(&sample_artifact_text()).unwrap();

        let keys: Vec<_> = table.keys().collect();
        assert_eq!(keys, ["luminance", "gl", "luminance_gl"]);
        assert_eq!(table.get("luminance").unwrap().len(), 2);
        assert_eq!(table.get("gl").unwrap().len(), 1);
        assert_eq!(
            table.get("luminance").unwrap()[0].as_str(),
            "impl Drop for Buffer"
        );
    }

    #[test]
    fn parse_preserves_escapes() {
        let text = r#"(function() {var implementors = {};
implementors["libA"] = ["impl&lt;'a&gt; From&lt;&amp;'a <a class=\"struct\">Uniform</a>&gt;",];
})()"#;

        let table = Artifact::parse(text).unwrap();
        let entry = &table.get("libA").unwrap()[0];
        assert_eq!(
            entry.as_str(),
            "impl&lt;'a&gt; From&lt;&amp;'a <a class=\"struct\">Uniform</a>&gt;"
        );
    }

    #[test]
    fn parse_duplicate_key_overwrites() {
        let text = r#"(function() {var implementors = {};
implementors["libA"] = ["first",];
implementors["libB"] = ["other",];
implementors["libA"] = ["second",];
})()"#;

        let table = Artifact::parse(text).unwrap();

        // Replaced, not merged; key order is first-assignment order
        assert_eq!(table.get("libA").unwrap().len(), 1);
        assert_eq!(table.get("libA").unwrap()[0].as_str(), "second");
        let keys: Vec<_> = table.keys().collect();
        assert_eq!(keys, ["libA", "libB"]);
    }

    #[test]
    fn parse_without_trailing_comma() {
        let text = r#"(function() {var implementors = {};
implementors["libA"] = ["one", "two"];
})()"#;

        let table = Artifact::parse(text).unwrap();
        assert_eq!(table.get("libA").unwrap().len(), 2);
    }

    #[test]
    fn parse_empty_entry_list() {
        let text = "(function() {var implementors = {};\nimplementors[\"libA\"] = [];\n})()";

        let table = Artifact::parse(text).unwrap();
        assert_eq!(table.get("libA").unwrap().len(), 0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn parse_registration_tail_is_ignored() {
        let text = r#"(function() {var implementors = {};
implementors["libA"] = ["entryA1",];

            if (window.register_implementors) {
                window.register_implementors(implementors);
            } else {
                window.pending_implementors = implementors;
            }

})()"#;

        let table = Artifact::parse(text).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("libA").unwrap()[0].as_str(), "entryA1");
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(Artifact::parse(""), Err(crate::Error::Empty)));
        assert!(matches!(
            Artifact::parse("  \n\t  "),
            Err(crate::Error::Empty)
        ));
    }

    #[test]
    fn parse_rejects_foreign_input() {
        assert!(matches!(
            Artifact::parse("var searchIndex = {};"),
            Err(crate::Error::NotSupported)
        ));
        assert!(matches!(
            Artifact::parse("<html></html>"),
            Err(crate::Error::NotSupported)
        ));
    }

    #[test]
    fn parse_rejects_malformed_assignment() {
        // Missing semicolon after the entry list
        let text = "(function() {var implementors = {};\nimplementors[\"libA\"] = [\"x\",]\n})()";
        assert!(matches!(
            Artifact::parse(text),
            Err(crate::Error::Malformed { .. })
        ));

        // Key is not a string literal
        let text = "(function() {var implementors = {};\nimplementors[libA] = [\"x\",];\n})()";
        assert!(matches!(
            Artifact::parse(text),
            Err(crate::Error::Malformed { .. })
        ));
    }

    #[test]
    fn parse_rejects_truncation() {
        // Cut in the middle of an entry string literal
        let full = sample_artifact_text();
        let cut = full.find("for Vec").unwrap();
        assert!(matches!(
            Artifact::parse(&full[..cut]),
            Err(crate::Error::OutOfBounds)
        ));
    }

    #[test]
    fn parse_rejects_truncation_between_assignments() {
        // Cut at an assignment boundary: the assignments parsed so far are complete,
        // but the remaining crates, the tail and the closing are gone
        let full = sample_artifact_text();
        let cut = full.find("implementors[\"gl\"]").unwrap();
        assert!(matches!(
            Artifact::parse(&full[..cut]),
            Err(crate::Error::OutOfBounds)
        ));
    }

    #[test]
    fn parse_rejects_missing_closing() {
        // Body never closes
        let text = "(function() {var implementors = {};\nimplementors[\"libA\"] = [\"x\",];\n";
        assert!(matches!(
            Artifact::parse(text),
            Err(crate::Error::OutOfBounds)
        ));

        // Body closes but the invocation is cut off
        let text = "(function() {var implementors = {};\n})";
        assert!(matches!(
            Artifact::parse(text),
            Err(crate::Error::OutOfBounds)
        ));
    }

    #[test]
    fn from_mem_has_no_trait_path() {
        let artifact = Artifact::from_mem(sample_artifact_text().into_bytes()).unwrap();
        assert!(artifact.trait_path().is_none());
        assert_eq!(artifact.table().len(), 3);
    }
}
