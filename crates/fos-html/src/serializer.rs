//! HTML Serialization (innerHTML/outerHTML)
//!
//! Text and attribute values are escaped with the template escaper; void
//! elements get no end tag and `script`/`style` content is written raw.
//!
//! Pretty printing only indents elements whose children are all elements or
//! comments. Anything holding text, whitespace included, is written exactly
//! as stored, so mixed content never gains spacing it did not have.

use fos_dom::{DomTree, NodeData, NodeId};
use fos_template::escape_html_into;

/// HTML serializer
pub struct HtmlSerializer {
    /// Whether to format output with indentation
    pub pretty_print: bool,
    /// Indentation string
    pub indent: String,
}

/// Void elements (no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Raw text elements (no escaping for content)
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self {
            pretty_print: false,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self {
            pretty_print: true,
            ..Self::default()
        }
    }

    /// Serialize innerHTML of a node (children only)
    pub fn serialize_inner(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        let indent = self.indents_children(tree, node_id);
        self.serialize_children(tree, node_id, &mut output, 0, indent);
        output
    }

    /// Serialize outerHTML of a node (including the node itself)
    pub fn serialize_outer(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_node(tree, node_id, &mut output, 0, false);
        output
    }

    /// True when pretty printing may put the children of `node_id` on their
    /// own lines, i.e. none of them is text
    fn indents_children(&self, tree: &DomTree, node_id: NodeId) -> bool {
        self.pretty_print && tree.children(node_id).all(|(_, child)| child.as_text().is_none())
    }

    fn newline(&self, output: &mut String, depth: usize) {
        output.push('\n');
        for _ in 0..depth {
            output.push_str(&self.indent);
        }
    }

    fn serialize_node(&self, tree: &DomTree, node_id: NodeId, output: &mut String, depth: usize, indent: bool) {
        let Some(node) = tree.get(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Document => {
                let indent = self.indents_children(tree, node_id);
                self.serialize_children(tree, node_id, output, depth, indent);
            }
            NodeData::Element(elem) => {
                let tag = elem.name.as_str();

                if indent && depth > 0 {
                    self.newline(output, depth);
                }

                output.push('<');
                output.push_str(tag);
                for attr in elem.attrs.iter() {
                    output.push(' ');
                    output.push_str(&attr.name);
                    if !attr.value.is_empty() {
                        output.push_str("=\"");
                        escape_html_into(&attr.value, output);
                        output.push('"');
                    }
                }
                output.push('>');

                if VOID_ELEMENTS.contains(&tag) {
                    return;
                }

                if RAW_TEXT_ELEMENTS.contains(&tag) {
                    for (_, child) in tree.children(node_id) {
                        if let Some(text) = child.as_text() {
                            output.push_str(text);
                        }
                    }
                } else {
                    let indent_children = self.indents_children(tree, node_id);
                    self.serialize_children(tree, node_id, output, depth + 1, indent_children);
                    if indent_children && tree.element_children(node_id).next().is_some() {
                        self.newline(output, depth);
                    }
                }

                output.push_str("</");
                output.push_str(tag);
                output.push('>');
            }
            NodeData::Text(text) => {
                escape_html_into(&text.content, output);
            }
            NodeData::Comment(text) => {
                output.push_str("<!--");
                output.push_str(text);
                output.push_str("-->");
            }
        }
    }

    fn serialize_children(&self, tree: &DomTree, parent_id: NodeId, output: &mut String, depth: usize, indent: bool) {
        for (child_id, _) in tree.children(parent_id) {
            self.serialize_node(tree, child_id, output, depth, indent);
        }
    }
}

/// Get innerHTML of an element
pub fn get_inner_html(tree: &DomTree, node_id: NodeId) -> String {
    HtmlSerializer::new().serialize_inner(tree, node_id)
}

/// Get outerHTML of an element
pub fn get_outer_html(tree: &DomTree, node_id: NodeId) -> String {
    HtmlSerializer::new().serialize_outer(tree, node_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_dom::NodeOperations;

    #[test]
    fn test_outer_html_escapes() {
        let mut tree = DomTree::new();
        let p = tree.create_element_with("p", &[("title", "a \"b\" <c>"), ("hidden", "")]);
        let text = tree.create_text("x < y & 'z'");
        tree.append_child(p, text).unwrap();

        assert_eq!(
            get_outer_html(&tree, p),
            "<p title=\"a &quot;b&quot; &lt;c&gt;\" hidden>x &lt; y &amp; &#39;z&#39;</p>"
        );
        assert_eq!(get_inner_html(&tree, p), "x &lt; y &amp; &#39;z&#39;");
    }

    #[test]
    fn test_void_and_raw_elements() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let input = tree.create_element_with("input", &[("type", "radio")]);
        let script = tree.create_element("script");
        let code = tree.create_text("if (a < b) {}");
        tree.append_child(div, input).unwrap();
        tree.append_child(div, script).unwrap();
        tree.append_child(script, code).unwrap();

        assert_eq!(
            get_outer_html(&tree, div),
            "<div><input type=\"radio\"><script>if (a < b) {}</script></div>"
        );
    }

    #[test]
    fn test_pretty_print() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let li = tree.create_element("li");
        let text = tree.create_text("one");
        tree.append_child(ul, li).unwrap();
        tree.append_child(li, text).unwrap();

        assert_eq!(
            HtmlSerializer::pretty().serialize_outer(&tree, ul),
            "<ul>\n  <li>one</li>\n</ul>"
        );
    }

    #[test]
    fn test_pretty_print_leaves_mixed_content() {
        // <div><p>a <b>b</b> c</p><hr></div>
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let p = tree.create_element("p");
        let hr = tree.create_element("hr");
        let b = tree.create_element("b");
        let a = tree.create_text("a ");
        let inner = tree.create_text("b");
        let c = tree.create_text(" c");
        tree.append_child(div, p).unwrap();
        tree.append_child(div, hr).unwrap();
        tree.append_child(p, a).unwrap();
        tree.append_child(p, b).unwrap();
        tree.append_child(b, inner).unwrap();
        tree.append_child(p, c).unwrap();

        assert_eq!(
            HtmlSerializer::pretty().serialize_outer(&tree, div),
            "<div>\n  <p>a <b>b</b> c</p>\n  <hr>\n</div>"
        );
    }
}
