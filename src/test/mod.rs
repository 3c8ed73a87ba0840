//! Shared factories used by unit tests across the crate.

use crate::artifact::ImplementorTable;

/// A small three-crate table in a fixed order: `luminance` (2 entries),
/// `gl` (1 entry), `luminance_gl` (1 entry).
pub(crate) fn sample_table() -> ImplementorTable {
    let mut table = ImplementorTable::new();
    table.insert(
        "luminance",
        vec![
            "impl Drop for Buffer".into(),
            "impl Drop for Framebuffer".into(),
        ],
    );
    table.insert("gl", vec!["impl Drop for Vec".into()]);
    table.insert("luminance_gl", vec!["impl Drop for Buffer".into()]);

    table
}

/// Artifact source text registering the same data as [`sample_table`],
/// shaped exactly like rustdoc output including the registration tail.
pub(crate) fn sample_artifact_text() -> String {
    r#"(function() {var implementors = {};
implementors["luminance"] = ["impl Drop for Buffer","impl Drop for Framebuffer",];
implementors["gl"] = ["impl Drop for Vec",];
implementors["luminance_gl"] = ["impl Drop for Buffer",];

            if (window.register_implementors) {
                window.register_implementors(implementors);
            } else {
                window.pending_implementors = implementors;
            }

})()"#
        .to_string()
}
