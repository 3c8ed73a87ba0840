//! End-to-end publication flow: artifacts parsed from disk, published through
//! [`RegistrySlot`]s, and accumulated in an [`ImplementorIndex`].

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use traitdex::{Artifact, ImplementorIndex, ImplementorTable, Registrar, RegistrySlot, TraitPath};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/artifacts")
        .join(name)
}

/// A registrar that records every table it receives.
#[derive(Default)]
struct Recorder {
    tables: Mutex<Vec<ImplementorTable>>,
}

impl Registrar for Recorder {
    fn register(&self, table: ImplementorTable) {
        self.tables.lock().unwrap().push(table);
    }
}

#[test]
fn publish_then_install_delivers_parsed_table() {
    let artifact = Artifact::from_file(&fixture("trait.Drop.js")).unwrap();
    let slot = RegistrySlot::new();
    slot.publish(artifact.table().clone()).unwrap();

    let recorder = Arc::new(Recorder::default());
    slot.install(Arc::clone(&recorder)).unwrap();

    let tables = recorder.tables.lock().unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].get("gl").unwrap().len(), 22);
}

#[test]
fn later_publication_wins_before_install() {
    let from = Artifact::from_file(&fixture("trait.From.js")).unwrap();
    let drop = Artifact::from_file(&fixture("trait.Drop.js")).unwrap();

    let slot = RegistrySlot::new();
    slot.publish(from.table().clone()).unwrap();
    slot.publish(drop.table().clone()).unwrap();

    let recorder = Arc::new(Recorder::default());
    slot.install(Arc::clone(&recorder)).unwrap();

    // Only the most recent table survives; the earlier one was discarded, not merged
    let tables = recorder.tables.lock().unwrap();
    assert_eq!(tables.len(), 1);
    assert!(tables[0].contains_key("luminance"));
    assert_eq!(tables[0].get("luminance_gl").unwrap().len(), 6);
}

#[test]
fn installed_registrar_sees_every_subsequent_publication() {
    let from = Artifact::from_file(&fixture("trait.From.js")).unwrap();
    let drop = Artifact::from_file(&fixture("trait.Drop.js")).unwrap();

    let slot = RegistrySlot::new();
    let recorder = Arc::new(Recorder::default());
    slot.install(Arc::clone(&recorder)).unwrap();

    slot.publish(from.table().clone()).unwrap();
    slot.publish(drop.table().clone()).unwrap();

    let tables = recorder.tables.lock().unwrap();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].entry_count(), 1);
    assert_eq!(tables[1].entry_count(), 34);
}

#[test]
fn slot_feeds_index_through_registrar_adapter() {
    let index = Arc::new(ImplementorIndex::new());
    let path = TraitPath::from_str("core::ops::Drop").unwrap();

    let slot = RegistrySlot::new();
    let artifact = Artifact::from_file(&fixture("trait.Drop.js")).unwrap();
    slot.publish(artifact.table().clone()).unwrap();
    slot.install(Arc::clone(&index).registrar_for(path.clone()))
        .unwrap();

    let entry = index.get(&path).unwrap();
    assert_eq!(entry.value().get("gl").unwrap().len(), 22);
    assert_eq!(index.len(), 1);
}

#[test]
fn index_reload_replaces_whole_table() {
    let index = ImplementorIndex::new();
    let path = TraitPath::from_str("core::convert::From").unwrap();

    let drop = Artifact::from_file(&fixture("trait.Drop.js")).unwrap();
    let from = Artifact::from_file(&fixture("trait.From.js")).unwrap();

    index.load(path.clone(), drop.table().clone());
    index.load(path.clone(), from.table().clone());

    // The second load is a full replacement, so the Drop crates are gone
    let entry = index.get(&path).unwrap();
    assert!(!entry.value().contains_key("gl"));
    assert_eq!(entry.value().get("luminance_gl").unwrap().len(), 1);
}

#[test]
fn index_collects_crate_names_across_traits() {
    let index = ImplementorIndex::new();

    let drop = Artifact::from_file(&fixture("trait.Drop.js")).unwrap();
    let from = Artifact::from_file(&fixture("trait.From.js")).unwrap();
    index.load(
        TraitPath::from_str("core::ops::Drop").unwrap(),
        drop.table().clone(),
    );
    index.load(
        TraitPath::from_str("core::convert::From").unwrap(),
        from.table().clone(),
    );

    let crates: Vec<_> = index.crates().into_iter().collect();
    assert_eq!(crates, ["gl", "luminance", "luminance_gl"]);
    assert_eq!(index.implementor_count(), 35);
}
