//! Table-of-contents driven section segmentation.
//!
//! Every link in the TOC `<nav>` names a section start. A section is
//! the start element plus its following element siblings, up to (not
//! including) the next heading whose id is itself a section start.
//!
//! Boundaries come only from ids listed in the TOC. Heading levels
//! are ignored, so documents with inconsistent levels still segment
//! correctly, and headings missing from the TOC never split a
//! section.

use std::collections::HashSet;

use crate::core::document::{DocumentTree, NodeId};

/// One TOC link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocAnchor {
    /// Target id without the `#`
    pub anchor_id: String,

    /// Link text
    pub title: String,

    /// Position within the TOC, starting at 0
    pub position: usize,
}

/// Text of one TOC-listed section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub anchor_id: String,
    pub title: String,
    pub text: String,
}

/// Why a TOC anchor produced no section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyTitle,
    /// No element in the body carries the anchor id
    Dangling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAnchor {
    pub anchor: TocAnchor,
    pub reason: SkipReason,
}

/// Segmentation of a document that has a TOC
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// All text of the TOC region
    pub toc_text: String,

    /// Sections in TOC order
    pub sections: Vec<Section>,

    /// Anchors that produced no section
    pub skipped: Vec<SkippedAnchor>,
}

/// Target id of a TOC link: leading `#`s stripped, then the fragment
/// after any remaining `#`
pub fn anchor_target(href: &str) -> &str {
    let stripped = href.trim_start_matches('#');
    match stripped.rfind('#') {
        Some(pos) => &stripped[pos + 1..],
        None => stripped,
    }
}

/// `h1` through `h6`
pub fn is_heading(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    bytes.len() == 2 && bytes[0] == b'h' && (b'1'..=b'6').contains(&bytes[1])
}

/// TOC links in document order
pub fn toc_anchors(tree: &DocumentTree, toc: NodeId) -> Vec<TocAnchor> {
    tree.links(toc)
        .enumerate()
        .map(|(position, (link, href))| TocAnchor {
            anchor_id: anchor_target(href).to_string(),
            title: tree.text(link),
            position,
        })
        .collect()
}

/// Split `body` into TOC sections
///
/// Returns `None` when there is no TOC region; the caller then indexes
/// the whole body instead.
pub fn segment(tree: &DocumentTree, body: NodeId, toc: Option<NodeId>) -> Option<Segmentation> {
    let toc = toc?;

    let anchors = toc_anchors(tree, toc);
    let section_starts: HashSet<&str> = anchors.iter().map(|a| a.anchor_id.as_str()).collect();

    let mut segmentation = Segmentation {
        toc_text: tree.text(toc),
        ..Default::default()
    };

    for anchor in &anchors {
        if anchor.title.trim().is_empty() {
            segmentation.skipped.push(SkippedAnchor {
                anchor: anchor.clone(),
                reason: SkipReason::EmptyTitle,
            });
            continue;
        }

        let Some(start) = tree.find_by_id(body, &anchor.anchor_id) else {
            segmentation.skipped.push(SkippedAnchor {
                anchor: anchor.clone(),
                reason: SkipReason::Dangling,
            });
            continue;
        };

        segmentation.sections.push(Section {
            anchor_id: anchor.anchor_id.clone(),
            title: anchor.title.clone(),
            text: section_text(tree, start, &section_starts),
        });
    }

    Some(segmentation)
}

/// Text of the section starting at `start`
fn section_text(tree: &DocumentTree, start: NodeId, section_starts: &HashSet<&str>) -> String {
    let mut fragments = vec![tree.text(start)];

    for sibling in tree.following_element_siblings(start) {
        if starts_section(tree, sibling, section_starts) {
            break;
        }
        fragments.push(tree.text(sibling));
    }

    fragments.retain(|f| !f.is_empty());
    fragments.join(" ")
}

fn starts_section(tree: &DocumentTree, node: NodeId, section_starts: &HashSet<&str>) -> bool {
    let is_heading_tag = tree.tag(node).is_some_and(is_heading);
    is_heading_tag
        && tree
            .element_id(node)
            .is_some_and(|id| section_starts.contains(id))
}
