//! fOS DOM - Document Object Model
//!
//! Arena-allocated DOM tree used by the template utilities.

mod attributes;
mod element;
mod node;
mod operations;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use element::{ElementQuery, SimpleSelector, Selector};
pub use node::{ElementData, Node, NodeData, TextData};
pub use operations::{DomError, DomResult, NodeOperations};
pub use tree::{Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node of every tree
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
