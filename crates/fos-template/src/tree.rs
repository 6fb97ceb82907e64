//! Tree capability needed by the cloner.

use fos_dom::{DomError, DomTree, NodeId, NodeOperations};

/// A mutable element tree: elements with attributes and element children,
/// plus a deep-copy primitive.
pub trait ElementTree {
    /// Cheap reference to an element
    type Handle: Copy;
    type Error: std::error::Error;

    /// Copy `element` and its whole subtree. The copy must share no node with
    /// the source, so later mutation of either side is invisible to the other.
    fn deep_clone(&mut self, element: Self::Handle) -> Result<Self::Handle, Self::Error>;

    fn attribute(&self, element: Self::Handle, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, element: Self::Handle, name: &str, value: &str) -> Result<(), Self::Error>;

    /// Removing an absent attribute is a no-op
    fn remove_attribute(&mut self, element: Self::Handle, name: &str) -> Result<(), Self::Error>;

    /// Element children in document order; text and comments are skipped
    fn element_children(&self, element: Self::Handle) -> Vec<Self::Handle>;
}

impl ElementTree for DomTree {
    type Handle = NodeId;
    type Error = DomError;

    fn deep_clone(&mut self, element: NodeId) -> Result<NodeId, DomError> {
        match self.get(element) {
            None => Err(DomError::NotFound(element)),
            Some(node) if !node.is_element() => Err(DomError::InvalidNodeType { expected: "element" }),
            Some(_) => self.clone_node(element, true),
        }
    }

    fn attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.get_attribute(element, name)
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        DomTree::set_attribute(self, element, name, value)
    }

    fn remove_attribute(&mut self, element: NodeId, name: &str) -> Result<(), DomError> {
        DomTree::remove_attribute(self, element, name).map(|_| ())
    }

    fn element_children(&self, element: NodeId) -> Vec<NodeId> {
        DomTree::element_children(self, element).collect()
    }
}
