// End-to-end segmentation scenarios
//
// Small documents run through the whole pipeline, checking the
// manifest entry and the exact records produced.

use crate::common::{html_document, index_tree, record_by_id, records_for, TestTree};
use specindex::Diagnostic;

#[test]
fn test_single_section_document() {
    let doc = html_document(
        "Example",
        &[("s1", "Overview")],
        r#"<h2 id="s1">Overview</h2><p>text</p>"#,
    );
    let tree = TestTree::with_files(&[("Spec1/Spec1.html", doc.as_str())]);

    let output = index_tree(tree.path());

    assert_eq!(output.manifest.len(), 1);
    assert_eq!(output.manifest[0].id, "Spec1");
    assert_eq!(output.manifest[0].files.len(), 1);
    assert_eq!(output.manifest[0].files[0].title, "Main");
    assert_eq!(output.manifest[0].files[0].path, "Spec1/Spec1.html");

    assert_eq!(output.records.len(), 2);
    let toc = record_by_id(&output, "Spec1/Spec1.html#TOC_entire");
    assert_eq!(toc.body, "Overview");
    assert_eq!(toc.title, "TOC for Example");

    let section = record_by_id(&output, "Spec1/Spec1.html#s1");
    assert_eq!(section.title, "Overview");
    assert_eq!(section.body, "Overview text");
    assert_eq!(section.path, "Spec1/Spec1.html#s1");
    assert_eq!(section.doc_title, "Example");
}

#[test]
fn test_second_section_bounds_the_first() {
    let doc = html_document(
        "Example",
        &[("s1", "Overview"), ("s2", "Details")],
        r#"<h2 id="s1">Overview</h2><p>text</p><h2 id="s2">Details</h2><p>more</p>"#,
    );
    let tree = TestTree::with_files(&[("Spec1/Spec1.html", doc.as_str())]);

    let output = index_tree(tree.path());

    assert_eq!(output.records.len(), 3);
    assert_eq!(
        record_by_id(&output, "Spec1/Spec1.html#s1").body,
        "Overview text"
    );
    assert_eq!(
        record_by_id(&output, "Spec1/Spec1.html#s2").body,
        "Details more"
    );
}

#[test]
fn test_dangling_anchor_produces_no_record() {
    let doc = html_document(
        "Example",
        &[("s1", "Overview"), ("missing", "Nowhere"), ("s2", "Details")],
        r#"<h2 id="s1">Overview</h2><p>text</p><h2 id="s2">Details</h2><p>more</p>"#,
    );
    let tree = TestTree::with_files(&[("Spec1/Spec1.html", doc.as_str())]);

    let output = index_tree(tree.path());

    // Two valid anchors plus the TOC record
    assert_eq!(output.records.len(), 3);
    assert!(output.records.iter().all(|r| !r.id.ends_with("#missing")));
    assert_eq!(
        record_by_id(&output, "Spec1/Spec1.html#s1").body,
        "Overview text"
    );
    assert!(output.diagnostics.contains(&Diagnostic::DanglingAnchor {
        path: "Spec1/Spec1.html".to_string(),
        anchor: "missing".to_string(),
    }));
}

#[test]
fn test_only_dangling_anchors_leaves_toc_record() {
    let doc = html_document("Example", &[("x", "X"), ("y", "Y")], "<p>body</p>");
    let tree = TestTree::with_files(&[("G/g.html", doc.as_str())]);

    let output = index_tree(tree.path());

    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].id, "G/g.html#TOC_entire");
    assert_eq!(output.records[0].body, "X Y");
}

#[test]
fn test_document_without_toc_is_one_record() {
    let tree = TestTree::with_files(&[(
        "G/plain.html",
        "<html><head><title>Plain</title></head><body><h1>Head</h1><p>All of it</p></body></html>",
    )]);

    let output = index_tree(tree.path());

    let records = records_for(&output, "G/plain.html");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "G/plain.html");
    assert_eq!(records[0].body, "Head All of it");
    assert_eq!(records[0].title, "Plain");
}

#[test]
fn test_section_text_includes_nested_content() {
    let doc = html_document(
        "Nested",
        &[("c1", "1 Clause")],
        r#"<h2 id="c1">1 Clause</h2>
           <table><tr><td>cell a</td><td>cell b</td></tr></table>
           <div><p>para <em>emph</em></p></div>"#,
    );
    let tree = TestTree::with_files(&[("N/n.html", doc.as_str())]);

    let output = index_tree(tree.path());

    assert_eq!(
        record_by_id(&output, "N/n.html#c1").body,
        "1 Clause cell a cell b para emph"
    );
}

#[test]
fn test_empty_toc_titles_are_dropped() {
    let tree = TestTree::with_files(&[(
        "E/e.html",
        r##"<html><body><nav id="TOC"><a href="#a">A</a><a href="#b"> </a></nav>
            <h2 id="a">A</h2><p>x</p><h2 id="b">B</h2><p>y</p></body></html>"##,
    )]);

    let output = index_tree(tree.path());

    // The empty-titled link still bounds section "a"
    assert_eq!(record_by_id(&output, "E/e.html#a").body, "A x");
    assert!(output.records.iter().all(|r| r.id != "E/e.html#b"));
    assert!(output.diagnostics.contains(&Diagnostic::EmptyAnchorTitle {
        path: "E/e.html".to_string(),
        anchor: "b".to_string(),
    }));
}
