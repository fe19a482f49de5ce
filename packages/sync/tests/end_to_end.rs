use std::fs;
use std::path::{Path, PathBuf};

use avusync_catalog::{Avu, Call, InMemoryCatalog, ObjectRef};
use avusync_sidecar::ExtractError;
use avusync_sync::{FileOutcome, SkipReason, SyncConfig, Syncer};

struct Tree {
    // Keeps the directory alive until the test is done.
    _dir: tempfile::TempDir,
    root: PathBuf,
}

impl Tree {
    fn new() -> Tree {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("data");
        fs::create_dir(&root).unwrap();
        Tree { _dir: dir, root }
    }

    fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    fn config(&self) -> SyncConfig {
        SyncConfig::new(self.root.to_str().unwrap(), "/zone/data")
    }
}

fn adds(catalog: &InMemoryCatalog) -> Vec<(ObjectRef, Avu)> {
    catalog
        .calls()
        .iter()
        .filter_map(|call| match call {
            Call::AddAttribute(object, avu) => Some((object.clone(), avu.clone())),
            _ => None,
        })
        .collect()
}

fn outcome_for<'a>(outcomes: &'a [FileOutcome], path: &Path) -> &'a FileOutcome {
    outcomes
        .iter()
        .find(|o| o.path() == path)
        .unwrap_or_else(|| panic!("no outcome for {}", path.display()))
}

#[test]
fn statepoint_lands_on_matching_collection() {
    let tree = Tree::new();
    tree.write("exp1/signac_statepoint.json", r#"{"a": 1, "b": "x"}"#);

    let mut catalog = InMemoryCatalog::new();
    let object = catalog.insert_collection("/zone/data/exp1");

    let mut syncer = Syncer::new(tree.config(), catalog);
    let report = syncer.run();
    assert!(report.is_clean());
    assert_eq!(report.objects_updated(), 1);

    let catalog = syncer.into_catalog();
    assert_eq!(
        adds(&catalog),
        vec![
            (object.clone(), Avu::new("a", "1")),
            (object.clone(), Avu::new("b", "x")),
        ]
    );
    // Data object probe first, then collection, then the two adds.
    assert_eq!(
        &catalog.calls()[..2],
        &[
            Call::LookupDataObject("/zone/data/exp1".to_string()),
            Call::LookupCollection("/zone/data/exp1".to_string()),
        ]
    );
}

#[test]
fn missing_remote_object_adds_nothing() {
    let tree = Tree::new();
    let path = tree.write("exp1/signac_statepoint.json", r#"{"a": 1, "b": "x"}"#);

    let mut syncer = Syncer::new(tree.config(), InMemoryCatalog::new());
    let report = syncer.run();

    match outcome_for(&report.outcomes, &path) {
        FileOutcome::Skipped {
            reason: SkipReason::NotFound { remote_path },
            ..
        } => assert_eq!(remote_path, "/zone/data/exp1"),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(adds(&syncer.into_catalog()).is_empty());
}

#[test]
fn invalid_json_is_skipped_and_run_continues() {
    let tree = Tree::new();
    let broken = tree.write("bad/signac_statepoint.json", r#"{"a": "#);
    let good = tree.write("good/signac_statepoint.json", r#"{"seed": 42}"#);

    let mut catalog = InMemoryCatalog::new();
    let bad_object = catalog.insert_collection("/zone/data/bad");
    let good_object = catalog.insert_collection("/zone/data/good");

    let mut syncer = Syncer::new(tree.config(), catalog);
    let report = syncer.run();
    assert_eq!(report.files_seen(), 2);

    assert!(matches!(
        outcome_for(&report.outcomes, &broken),
        FileOutcome::Skipped {
            reason: SkipReason::Extract(ExtractError::Parse { .. }),
            ..
        }
    ));
    assert!(matches!(
        outcome_for(&report.outcomes, &good),
        FileOutcome::Applied { attributes: 1, .. }
    ));

    let catalog = syncer.into_catalog();
    assert!(catalog.attributes(&bad_object).is_empty());
    assert_eq!(catalog.attributes(&good_object), vec![Avu::new("seed", "42")]);
}

#[test]
fn data_object_is_preferred_over_collection() {
    let tree = Tree::new();
    tree.write("exp1/signac_statepoint.json", r#"{"a": 1}"#);

    let mut catalog = InMemoryCatalog::new();
    let data_object = catalog.insert_data_object("/zone/data/exp1");
    let collection = catalog.insert_collection("/zone/data/exp1");

    let mut syncer = Syncer::new(tree.config(), catalog);
    syncer.run();

    let catalog = syncer.into_catalog();
    assert_eq!(catalog.attributes(&data_object), vec![Avu::new("a", "1")]);
    assert!(catalog.attributes(&collection).is_empty());
}

#[test]
fn nested_trees_and_other_files() {
    let tree = Tree::new();
    tree.write("a/signac_statepoint.json", r#"{"x": 1}"#);
    tree.write("a/b/c/signac_statepoint.json", r#"{"y": [1, 2], "z": null}"#);
    tree.write("a/b/signac_statepoint.json.orig", r#"{"ignored": true}"#);
    tree.write("a/b/notes.json", r#"{"ignored": true}"#);

    let mut catalog = InMemoryCatalog::new();
    let a = catalog.insert_collection("/zone/data/a");
    let abc = catalog.insert_collection("/zone/data/a/b/c");
    let ab = catalog.insert_collection("/zone/data/a/b");

    let mut syncer = Syncer::new(tree.config(), catalog);
    let report = syncer.run();
    assert_eq!(report.files_seen(), 2);
    assert_eq!(report.attributes_added(), 3);

    let catalog = syncer.into_catalog();
    assert_eq!(catalog.attributes(&a), vec![Avu::new("x", "1")]);
    assert_eq!(
        catalog.attributes(&abc),
        vec![Avu::new("y", "[1,2]"), Avu::new("z", "null")]
    );
    assert!(catalog.attributes(&ab).is_empty());
}

#[test]
fn rerun_duplicates_attributes() {
    let tree = Tree::new();
    tree.write("exp1/signac_statepoint.json", r#"{"a": 1}"#);

    let mut catalog = InMemoryCatalog::new();
    let object = catalog.insert_collection("/zone/data/exp1");

    let mut syncer = Syncer::new(tree.config(), catalog);
    syncer.run();
    syncer.run();

    assert_eq!(
        syncer.into_catalog().attributes(&object),
        vec![Avu::new("a", "1"), Avu::new("a", "1")]
    );
}

#[test]
fn custom_metadata_file_name() {
    let tree = Tree::new();
    tree.write("exp1/signac_statepoint.json", r#"{"a": 1}"#);
    tree.write("exp1/meta.json", r#"{"b": 2}"#);

    let mut catalog = InMemoryCatalog::new();
    let object = catalog.insert_collection("/zone/data/exp1");

    let config = tree.config().with_metadata_file_name("meta.json");
    let mut syncer = Syncer::new(config, catalog);
    syncer.run();

    assert_eq!(
        syncer.into_catalog().attributes(&object),
        vec![Avu::new("b", "2")]
    );
}
