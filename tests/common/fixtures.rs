// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Synthetic document tree in a temporary directory
#[allow(dead_code)] // Used in integration tests
pub struct TestTree {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestTree {
    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// A small release tree: two specs, one split, one without TOC
    #[allow(dead_code)] // Used in integration tests
    pub fn small_release() -> Self {
        let spec_a = html_document(
            "TS 23.501",
            &[("clause1", "1 Scope"), ("clause2", "2 References")],
            r#"<h1 id="clause1">1 Scope</h1><p>The present document defines.</p>
               <h1 id="clause2">2 References</h1><p>[1] TR 21.905</p>"#,
        );
        let spec_a_annex = html_document(
            "TS 23.501 Annex",
            &[("annexA", "Annex A")],
            r#"<h1 id="annexA">Annex A</h1><p>Informative.</p>"#,
        );
        let spec_b = "<html><head><title>TS 38.331</title></head>\
                      <body><p>RRC protocol</p></body></html>";

        Self::with_files(&[
            ("23501/23501.html", spec_a.as_str()),
            ("23501/23501_annex-a.html", spec_a_annex.as_str()),
            ("23501/media/image1.html", "<p>not a document</p>"),
            ("38331/38331.html", spec_b),
            (".git/refs/HEAD.html", "<p>hidden</p>"),
        ])
    }

    /// Get path to the tree root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Build an HTML document with a `nav#TOC` linking `(anchor, title)`
/// pairs, followed by `body`
#[allow(dead_code)] // Used in integration tests
pub fn html_document(title: &str, toc: &[(&str, &str)], body: &str) -> String {
    let links: String = toc
        .iter()
        .map(|(anchor, text)| format!(r##"<li><a href="#{anchor}">{text}</a></li>"##))
        .collect();

    format!(
        "<!DOCTYPE html><html><head><title>{title}</title></head>\
         <body><nav id=\"TOC\"><ul>{links}</ul></nav>{body}</body></html>"
    )
}
