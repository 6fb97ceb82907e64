//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed: removing or cloning only relinks or appends, so a
//! `NodeId` stays valid for the lifetime of its tree.

use crate::{DomError, DomResult, ElementData, Node, NodeData, NodeId, NodeOperations};

/// Arena-based DOM tree for memory efficiency
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the document node exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached element with the given attributes, in order
    pub fn create_element_with(&mut self, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut elem = ElementData::new(tag);
        for (name, value) in attrs {
            elem.set_attr(name, value);
        }
        self.push(Node::new(NodeData::Element(elem)))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::new(NodeData::Comment(content.to_string())))
    }

    /// Element data of `id`, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    fn element_or_err(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        let node = self.get_mut(id).ok_or(DomError::NotFound(id))?;
        node.as_element_mut()
            .ok_or(DomError::InvalidNodeType { expected: "element" })
    }

    /// Attribute value of an element; `None` for absent attributes and non-elements
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.get_attr(name))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_or_err(id)?.set_attr(name, value);
        Ok(())
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        Ok(self.element_or_err(id)?.attrs.remove(name).map(|a| a.value))
    }

    /// Iterate direct children
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Direct children that are elements
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .filter(|(_, node)| node.is_element())
            .map(|(child, _)| child)
    }

    /// Pre-order walk of `id` and everything below it
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let next = if self.get(id).is_some() { id } else { NodeId::NONE };
        Descendants {
            tree: self,
            start: id,
            next,
        }
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|n| self.get(n).and_then(Node::as_text))
            .collect()
    }

    /// True if `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.get(current).map_or(NodeId::NONE, |n| n.parent);
        }
        false
    }

    /// First element at or below `start` whose `id` attribute equals `id`
    pub fn get_element_by_id(&self, start: NodeId, id: &str) -> Option<NodeId> {
        self.descendants(start)
            .find(|&n| self.element(n).and_then(ElementData::id) == Some(id))
    }

    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }
        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Link a detached node as the last child of `parent`
    fn link_child(&mut self, parent: NodeId, child: NodeId) {
        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
    }

    /// Copy `src` (and with `deep` everything below it) as a detached node.
    /// Walks with an explicit stack of (source, copy parent) pairs, so depth
    /// is bounded by memory rather than the call stack.
    fn copy_subtree(&mut self, src: NodeId, deep: bool) -> DomResult<NodeId> {
        let data = self.get(src).ok_or(DomError::NotFound(src))?.data.clone();
        let copy = self.push(Node::new(data));
        if !deep {
            return Ok(copy);
        }

        let mut stack: Vec<(NodeId, NodeId)> = Vec::new();
        self.push_children_reversed(src, copy, &mut stack);
        while let Some((source, parent)) = stack.pop() {
            let data = self.nodes[source.index()].data.clone();
            let node = self.push(Node::new(data));
            self.link_child(parent, node);
            self.push_children_reversed(source, node, &mut stack);
        }
        Ok(copy)
    }

    // Reversed so the first child is popped, and linked, first
    fn push_children_reversed(&self, source: NodeId, parent: NodeId, stack: &mut Vec<(NodeId, NodeId)>) {
        let start = stack.len();
        stack.extend(self.children(source).map(|(child, _)| (child, parent)));
        stack[start..].reverse();
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeOperations for DomTree {
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let parent_node = self.get(parent).ok_or(DomError::NotFound(parent))?;
        if !matches!(parent_node.data, NodeData::Document | NodeData::Element(_)) {
            return Err(DomError::HierarchyRequest);
        }
        let child_node = self.get(child).ok_or(DomError::NotFound(child))?;
        // A node without children can only be an ancestor of itself
        let cycle = if child_node.first_child.is_valid() {
            self.is_inclusive_ancestor(child, parent)
        } else {
            child == parent
        };
        if matches!(child_node.data, NodeData::Document) || cycle {
            return Err(DomError::HierarchyRequest);
        }
        self.detach(child);
        self.link_child(parent, child);
        Ok(child)
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let node = self.get(child).ok_or(DomError::NotFound(child))?;
        if node.parent != parent {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(child)
    }

    fn clone_node(&mut self, node: NodeId, deep: bool) -> DomResult<NodeId> {
        match self.get(node).map(|n| &n.data) {
            None => Err(DomError::NotFound(node)),
            Some(NodeData::Document) => Err(DomError::InvalidNodeType {
                expected: "element, text or comment",
            }),
            Some(_) => self.copy_subtree(node, deep),
        }
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Pre-order iterator over a subtree, starting node included
pub struct Descendants<'a> {
    tree: &'a DomTree,
    start: NodeId,
    next: NodeId,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next;
        let node = self.tree.get(current)?;

        self.next = if node.first_child.is_valid() {
            node.first_child
        } else {
            // Climb until a next sibling exists, never past the start node
            let mut cursor = current;
            loop {
                if cursor == self.start {
                    break NodeId::NONE;
                }
                let Some(n) = self.tree.get(cursor) else {
                    break NodeId::NONE;
                };
                if n.next_sibling.is_valid() {
                    break n.next_sibling;
                }
                cursor = n.parent;
            }
        };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (DomTree, NodeId, NodeId, NodeId, NodeId) {
        // <div><p>a</p><span/></div>
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let p = tree.create_element("p");
        let text = tree.create_text("a");
        let span = tree.create_element("span");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, p).unwrap();
        tree.append_child(p, text).unwrap();
        tree.append_child(div, span).unwrap();
        (tree, div, p, text, span)
    }

    #[test]
    fn test_append_and_children() {
        let (tree, div, p, _, span) = sample();
        let kids: Vec<NodeId> = tree.children(div).map(|(id, _)| id).collect();
        assert_eq!(kids, vec![p, span]);
        assert_eq!(tree.get(p).unwrap().parent, div);
        assert_eq!(tree.get(span).unwrap().prev_sibling, p);
    }

    #[test]
    fn test_descendants_preorder_stays_in_subtree() {
        let (mut tree, div, p, text, span) = sample();
        let sibling = tree.create_element("aside");
        tree.append_child(tree.root(), sibling).unwrap();

        let order: Vec<NodeId> = tree.descendants(div).collect();
        assert_eq!(order, vec![div, p, text, span]);

        let leaf: Vec<NodeId> = tree.descendants(p).collect();
        assert_eq!(leaf, vec![p, text]);
    }

    #[test]
    fn test_remove_child() {
        let (mut tree, div, p, _, span) = sample();
        tree.remove_child(div, p).unwrap();
        let kids: Vec<NodeId> = tree.children(div).map(|(id, _)| id).collect();
        assert_eq!(kids, vec![span]);
        assert!(!tree.get(p).unwrap().parent.is_valid());

        assert_eq!(
            tree.remove_child(div, p),
            Err(DomError::NotAChild { parent: div, child: p })
        );
    }

    #[test]
    fn test_append_rejects_cycles() {
        let (mut tree, div, p, text, _) = sample();
        assert_eq!(tree.append_child(p, div), Err(DomError::HierarchyRequest));
        assert_eq!(tree.append_child(text, div), Err(DomError::HierarchyRequest));
        assert_eq!(tree.append_child(text, text), Err(DomError::HierarchyRequest));
        let lone = tree.create_element("b");
        assert_eq!(tree.append_child(lone, lone), Err(DomError::HierarchyRequest));
    }

    #[test]
    fn test_append_moves_node() {
        let (mut tree, div, p, _, span) = sample();
        tree.append_child(span, p).unwrap();
        let kids: Vec<NodeId> = tree.children(div).map(|(id, _)| id).collect();
        assert_eq!(kids, vec![span]);
        assert_eq!(tree.get(p).unwrap().parent, span);
    }

    #[test]
    fn test_deep_clone_is_detached_copy() {
        let (mut tree, div, p, _, _) = sample();
        tree.set_attribute(p, "id", "para").unwrap();

        let copy = tree.clone_node(div, true).unwrap();
        assert_ne!(copy, div);
        assert!(!tree.get(copy).unwrap().parent.is_valid());
        assert_eq!(tree.text_content(copy), "a");

        let copied_p = tree.element_children(copy).next().unwrap();
        tree.set_attribute(copied_p, "id", "changed").unwrap();
        assert_eq!(tree.get_attribute(p, "id"), Some("para"));
    }

    #[test]
    fn test_deep_clone_keeps_child_order() {
        let (mut tree, div, _, _, _) = sample();
        let copy = tree.clone_node(div, true).unwrap();

        let names: Vec<&str> = tree
            .descendants(copy)
            .filter_map(|n| tree.element(n).map(|e| e.name.as_str()))
            .collect();
        assert_eq!(names, vec!["div", "p", "span"]);
        let copied_p = tree.element_children(copy).next().unwrap();
        assert_eq!(tree.text_content(copied_p), "a");
    }

    #[test]
    fn test_shallow_clone() {
        let (mut tree, div, _, _, _) = sample();
        let copy = tree.clone_node(div, false).unwrap();
        assert_eq!(tree.children(copy).count(), 0);
    }

    #[test]
    fn test_clone_document_rejected() {
        let mut tree = DomTree::new();
        let root = tree.root();
        assert!(matches!(
            tree.clone_node(root, true),
            Err(DomError::InvalidNodeType { .. })
        ));
    }

    #[test]
    fn test_attribute_on_text_node() {
        let (mut tree, _, _, text, _) = sample();
        assert_eq!(tree.get_attribute(text, "id"), None);
        assert!(tree.set_attribute(text, "id", "x").is_err());
    }

    #[test]
    fn test_get_element_by_id() {
        let (mut tree, div, _, _, span) = sample();
        tree.set_attribute(span, "id", "target").unwrap();
        assert_eq!(tree.get_element_by_id(div, "target"), Some(span));
        assert_eq!(tree.get_element_by_id(div, "missing"), None);
    }
}
