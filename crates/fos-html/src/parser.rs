//! HTML5 Parser implementation
//!
//! Uses html5ever's built-in RcDom and converts to our DOM format.

use fos_dom::{DomTree, ElementQuery, NodeId, NodeOperations};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::ParseError;

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse an HTML document. Missing `html`/`head`/`body` are synthesized
    /// the way browsers do.
    pub fn parse(&self, html: &str) -> Result<DomTree, ParseError> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut tree = DomTree::new();
        let root = tree.root();
        self.convert_node(&dom.document, &mut tree, root)?;

        tracing::debug!("Parsed {} nodes", tree.len());
        Ok(tree)
    }

    /// Parse body content and return its top-level elements.
    ///
    /// Table parts (`<tr>`, `<td>`) are not valid directly in `<body>` and
    /// are dropped by the HTML5 algorithm; wrap them in their table.
    pub fn parse_fragment(&self, html: &str) -> Result<(DomTree, Vec<NodeId>), ParseError> {
        let tree = self.parse(html)?;
        let roots = match tree.query_selector(tree.root(), "body") {
            Some(body) => tree.element_children(body).collect(),
            None => Vec::new(),
        };
        Ok((tree, roots))
    }

    /// Convert an RcDom tree to our DOM format.
    ///
    /// Every text node is kept, whitespace-only runs included, so serializing
    /// a converted fragment gives back its source spacing. Walks with an
    /// explicit stack of (source, parent) pairs.
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), ParseError> {
        let mut stack: Vec<(Handle, NodeId)> = vec![(handle.clone(), parent)];
        while let Some((handle, parent)) = stack.pop() {
            let children_parent = match &handle.data {
                RcNodeData::Document => parent,
                RcNodeData::Text { contents } => {
                    let id = tree.create_text(&contents.borrow());
                    tree.append_child(parent, id)?;
                    continue;
                }
                RcNodeData::Comment { contents } => {
                    let id = tree.create_comment(contents);
                    tree.append_child(parent, id)?;
                    continue;
                }
                RcNodeData::Element { name, attrs, .. } => {
                    let id = tree.create_element(&name.local);
                    for attr in attrs.borrow().iter() {
                        tree.set_attribute(id, &attr.name.local, &attr.value)?;
                    }
                    tree.append_child(parent, id)?;
                    id
                }
                // Doctype and processing instructions carry nothing a fragment needs
                RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => continue,
            };

            // Reversed so children are appended in document order
            for child in handle.children.borrow().iter().rev() {
                stack.push((child.clone(), children_parent));
            }
        }
        Ok(())
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let tree = HtmlParser::new().parse(html).unwrap();

        let title = tree.query_selector(tree.root(), "title").unwrap();
        assert_eq!(tree.text_content(title), "Test");
    }

    #[test]
    fn test_parse_fragment_roots() {
        let html = r#"<div id="a"><span>Text</span></div> <p class="x">b</p>"#;
        let (tree, roots) = HtmlParser::new().parse_fragment(html).unwrap();

        assert_eq!(roots.len(), 2);
        assert_eq!(tree.get_attribute(roots[0], "id"), Some("a"));
        assert_eq!(tree.element(roots[1]).unwrap().name, "p");
    }

    #[test]
    fn test_whitespace_text_kept() {
        let (tree, roots) = HtmlParser::new()
            .parse_fragment("<p><b>one</b> <i>two</i></p><textarea>   </textarea>")
            .unwrap();
        assert_eq!(tree.children(roots[0]).count(), 3);
        assert_eq!(tree.text_content(roots[0]), "one two");
        assert_eq!(tree.text_content(roots[1]), "   ");
    }

    #[test]
    fn test_parse_deeply_nested() {
        let depth = 10_000;
        let html = format!("{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let (tree, roots) = HtmlParser::new().parse_fragment(&html).unwrap();

        assert_eq!(roots.len(), 1);
        assert_eq!(tree.descendants(roots[0]).count(), depth + 1);
        assert_eq!(tree.text_content(roots[0]), "x");
    }

    #[test]
    fn test_attributes_keep_source_order() {
        let (tree, roots) = HtmlParser::new()
            .parse_fragment(r##"<a href="#x" id="l" data-target="#y">go</a>"##)
            .unwrap();
        let elem = tree.element(roots[0]).unwrap();
        assert_eq!(elem.attrs.names(), vec!["href", "id", "data-target"]);
    }
}
