//! DOM Node Operations
//!
//! Core node manipulation: appendChild, removeChild, cloneNode.

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("node {0:?} not found")]
    NotFound(NodeId),
    /// Hierarchy error (e.g., inserting an ancestor into its descendant)
    #[error("hierarchy request error")]
    HierarchyRequest,
    /// Invalid node type for the operation
    #[error("invalid node type: expected {expected}")]
    InvalidNodeType { expected: &'static str },
    /// Node is not a child of the given parent
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },
}

/// Node operations trait
pub trait NodeOperations {
    /// Append a child node, detaching it from its current parent first
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId>;

    /// Remove a child node; the node stays in the arena, detached
    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId>;

    /// Clone a node. The copy is detached; with `deep` it carries copies of
    /// all descendants.
    fn clone_node(&mut self, node: NodeId, deep: bool) -> DomResult<NodeId>;
}
