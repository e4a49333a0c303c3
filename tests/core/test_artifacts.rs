// Written artifacts: JSON shape and layout

use std::fs;

use crate::common::{index_tree, TestTree};
use specindex::core::config::OutputConfig;
use specindex::core::output::write_artifacts;
use specindex::{Group, SearchRecord};

#[test]
fn test_artifacts_round_trip_through_json() {
    let tree = TestTree::small_release();
    let output = index_tree(tree.path());

    let written = write_artifacts(
        tree.path(),
        &OutputConfig::default(),
        &output.manifest,
        &output.records,
    )
    .unwrap();

    let manifest: Vec<Group> =
        serde_json::from_str(&fs::read_to_string(&written.manifest).unwrap()).unwrap();
    let records: Vec<SearchRecord> =
        serde_json::from_str(&fs::read_to_string(&written.search_data).unwrap()).unwrap();

    assert_eq!(manifest, output.manifest);
    assert_eq!(records, output.records);
}

#[test]
fn test_manifest_json_shape() {
    let tree = TestTree::small_release();
    let output = index_tree(tree.path());

    let written = write_artifacts(
        tree.path(),
        &OutputConfig::default(),
        &output.manifest,
        &output.records,
    )
    .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written.manifest).unwrap()).unwrap();
    let first = &json[0];
    assert_eq!(first["id"], "23501");
    assert_eq!(first["title"], "23501");
    assert_eq!(first["files"][0]["path"], "23501/23501.html");
    assert_eq!(first["files"][0]["title"], "Main");
}

#[test]
fn test_rerun_regenerates_identically() {
    let tree = TestTree::small_release();

    let first = index_tree(tree.path());
    write_artifacts(
        tree.path(),
        &OutputConfig::default(),
        &first.manifest,
        &first.records,
    )
    .unwrap();
    let manifest_before = fs::read_to_string(tree.path().join("manifest.json")).unwrap();

    // Artifacts in the root are not documents, so a rerun sees the same tree
    let second = index_tree(tree.path());
    write_artifacts(
        tree.path(),
        &OutputConfig::default(),
        &second.manifest,
        &second.records,
    )
    .unwrap();
    let manifest_after = fs::read_to_string(tree.path().join("manifest.json")).unwrap();

    assert_eq!(manifest_before, manifest_after);
    assert_eq!(first.records, second.records);
}
