// Directory walking and grouping through the pipeline

use crate::common::{index_tree, TestTree};
use specindex::Diagnostic;

#[test]
fn test_groups_named_after_directories() {
    let tree = TestTree::small_release();

    let output = index_tree(tree.path());

    let ids: Vec<_> = output.manifest.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["23501", "38331"]);
    assert!(output.manifest.iter().all(|g| g.title == g.id));
}

#[test]
fn test_split_files_titled_without_group_id() {
    let tree = TestTree::small_release();

    let output = index_tree(tree.path());

    let titles: Vec<_> = output.manifest[0]
        .files
        .iter()
        .map(|f| f.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Main", "annex a"]);
}

#[test]
fn test_media_and_hidden_directories_skipped() {
    let tree = TestTree::small_release();

    let output = index_tree(tree.path());

    assert!(output
        .manifest
        .iter()
        .all(|g| g.id != "media" && g.id != ".git" && g.id != "refs"));
    assert!(output.records.iter().all(|r| !r.doc_path.contains("media/")));
}

#[test]
fn test_nested_same_name_directories_merge_explicitly() {
    let tree = TestTree::with_files(&[
        ("Rel16/annex/a.html", "<p>sixteen</p>"),
        ("Rel17/annex/b.html", "<p>seventeen</p>"),
    ]);

    let output = index_tree(tree.path());

    let ids: Vec<_> = output.manifest.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["Rel16", "Rel17", "annex"]);

    let annex = &output.manifest[2];
    let paths: Vec<_> = annex.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["Rel16/annex/a.html", "Rel17/annex/b.html"]);

    assert!(output.diagnostics.contains(&Diagnostic::GroupMerged {
        group: "annex".to_string(),
        directory: "Rel17/annex".to_string(),
    }));
}

#[cfg(unix)]
#[test]
fn test_unreadable_document_keeps_manifest_entry() {
    let tree = TestTree::with_files(&[("S/ok.html", "<p>fine</p>")]);
    std::os::unix::fs::symlink(
        tree.path().join("S/does-not-exist"),
        tree.path().join("S/broken.html"),
    )
    .unwrap();

    let output = index_tree(tree.path());

    let paths: Vec<_> = output.manifest[0]
        .files
        .iter()
        .map(|f| f.path.as_str())
        .collect();
    assert_eq!(paths, vec!["S/broken.html", "S/ok.html"]);

    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].id, "S/ok.html");
    assert_eq!(output.stats.documents_skipped, 1);
    assert!(matches!(
        output.diagnostics.as_slice(),
        [Diagnostic::ReadFailed { path, .. }] if path == "S/broken.html"
    ));
}
