//! Parsed HTML documents.
//!
//! `scraper` (html5ever) does the tolerant tokenizing and tree
//! building. Its output is flattened once into a [`DocumentTree`]: an
//! arena of nodes in document (pre)order with an `id` index, which is
//! all the segmenter needs: id lookup, text extraction and sibling
//! traversal.
//!
//! Because nodes are stored in preorder, the descendants of a node
//! are exactly the contiguous range `node + 1 .. subtree_end`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use scraper::{Html, Node as HtmlNode};

use crate::core::error::Result;

/// Index of a node inside its [`DocumentTree`]
pub type NodeId = usize;

/// Elements whose contents are never treated as text
const NON_TEXT_TAGS: &[&str] = &["script", "style", "template"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element {
        tag: String,
        id: Option<String>,
        href: Option<String>,
    },
    Text(String),
    /// Comments, doctypes, processing instructions
    Other,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    subtree_end: NodeId,
}

/// Queryable, immutable node tree of one document
#[derive(Debug, Clone)]
pub struct DocumentTree {
    nodes: Vec<Node>,
    ids: HashMap<String, Vec<NodeId>>,
}

impl DocumentTree {
    /// Parse markup into a tree. Never fails: html5ever recovers from
    /// any malformed input.
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);

        let mut nodes: Vec<Node> = Vec::new();
        let mut ids: HashMap<String, Vec<NodeId>> = HashMap::new();
        let mut stack = vec![(html.tree.root(), None)];

        while let Some((html_node, parent)) = stack.pop() {
            let index = nodes.len();
            let kind = match html_node.value() {
                HtmlNode::Document | HtmlNode::Fragment => NodeKind::Document,
                HtmlNode::Element(element) => {
                    let id = element.attr("id").map(str::to_string);
                    if let Some(id) = &id {
                        ids.entry(id.clone()).or_default().push(index);
                    }
                    NodeKind::Element {
                        tag: element.name().to_ascii_lowercase(),
                        id,
                        href: element.attr("href").map(str::to_string),
                    }
                }
                HtmlNode::Text(text) => NodeKind::Text(text.to_string()),
                _ => NodeKind::Other,
            };

            nodes.push(Node {
                kind,
                parent,
                children: Vec::new(),
                subtree_end: index + 1,
            });
            if let Some(parent) = parent {
                nodes[parent].children.push(index);
            }

            // Reversed so the first child is popped (and numbered) first
            let children: Vec<_> = html_node.children().collect();
            for child in children.into_iter().rev() {
                stack.push((child, Some(index)));
            }
        }

        // Children always have larger indices than their parent
        for index in (0..nodes.len()).rev() {
            if let Some(&last) = nodes[index].children.last() {
                nodes[index].subtree_end = nodes[last].subtree_end;
            }
        }

        Self { nodes, ids }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        0
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Lowercase tag name, `None` for non-elements
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node].kind {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Value of the `id` attribute
    pub fn element_id(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node].kind {
            NodeKind::Element { id, .. } => id.as_deref(),
            _ => None,
        }
    }

    /// Value of the `href` attribute
    pub fn href(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node].kind {
            NodeKind::Element { href, .. } => href.as_deref(),
            _ => None,
        }
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(self.nodes[node].kind, NodeKind::Element { .. })
    }

    /// True when `node` lies strictly inside `ancestor`
    pub fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        node > ancestor && node < self.nodes[ancestor].subtree_end
    }

    /// Descendants of `scope` in document order (excluding `scope`)
    pub fn descendants(&self, scope: NodeId) -> impl Iterator<Item = NodeId> {
        scope + 1..self.nodes[scope].subtree_end
    }

    /// First element with the given tag inside `scope`
    pub fn find_element(&self, scope: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(scope).find(|&n| self.tag(n) == Some(tag))
    }

    /// First element inside `scope` whose `id` equals `id`
    pub fn find_by_id(&self, scope: NodeId, id: &str) -> Option<NodeId> {
        self.ids
            .get(id)?
            .iter()
            .copied()
            .find(|&n| self.is_descendant(n, scope))
    }

    /// First element anywhere with both the given tag and `id`
    pub fn find_tagged_id(&self, tag: &str, id: &str) -> Option<NodeId> {
        self.ids
            .get(id)?
            .iter()
            .copied()
            .find(|&n| self.tag(n) == Some(tag))
    }

    /// `<a href=..>` elements inside `scope`, in document order
    pub fn links(&self, scope: NodeId) -> impl Iterator<Item = (NodeId, &str)> {
        self.descendants(scope).filter_map(move |n| {
            if self.tag(n) == Some("a") {
                self.href(n).map(|href| (n, href))
            } else {
                None
            }
        })
    }

    /// Element siblings after `node`, in document order. Text between
    /// siblings is not part of the walk.
    pub fn following_element_siblings(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let siblings: &[NodeId] = match self.nodes[node].parent {
            Some(parent) => &self.nodes[parent].children,
            None => &[],
        };
        let start = siblings
            .iter()
            .position(|&n| n == node)
            .map_or(siblings.len(), |p| p + 1);

        siblings[start..]
            .iter()
            .copied()
            .filter(move |&n| self.is_element(n))
    }

    /// All text under `node`: each fragment trimmed, empty fragments
    /// dropped, joined with single spaces.
    pub fn text(&self, node: NodeId) -> String {
        let mut fragments: Vec<&str> = Vec::new();
        let end = self.nodes[node].subtree_end;
        let mut cursor = node;

        while cursor < end {
            match &self.nodes[cursor].kind {
                NodeKind::Element { tag, .. } if NON_TEXT_TAGS.contains(&tag.as_str()) => {
                    cursor = self.nodes[cursor].subtree_end;
                    continue;
                }
                NodeKind::Text(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        fragments.push(trimmed);
                    }
                }
                _ => {}
            }
            cursor += 1;
        }

        fragments.join(" ")
    }
}

/// A document ready for segmentation
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub tree: DocumentTree,

    /// `<title>` text, or the fallback when absent/empty
    pub title: String,

    /// The `<body>` element
    pub body: NodeId,

    /// The table-of-contents `<nav>`, if any
    pub toc: Option<NodeId>,
}

impl ParsedDocument {
    /// Parse a document. Returns `None` when the markup has no body.
    ///
    /// # Arguments
    ///
    /// * `source` - Decoded markup
    /// * `fallback_title` - Title used when there is no `<title>`
    /// * `toc_id` - `id` of the table-of-contents `<nav>`
    pub fn parse(source: &str, fallback_title: &str, toc_id: &str) -> Option<Self> {
        let tree = DocumentTree::parse(source);

        let title = tree
            .find_element(tree.root(), "title")
            .map(|n| tree.text(n))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| fallback_title.to_string());

        let body = tree.find_element(tree.root(), "body")?;
        let toc = tree.find_tagged_id("nav", toc_id);

        Some(Self {
            tree,
            title,
            body,
            toc,
        })
    }
}

/// Decode bytes as UTF-8, dropping invalid sequences
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Read a document's full contents as text
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_lossy(&bytes))
}
