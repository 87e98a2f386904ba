//! zen DOM - minimal element tree
//!
//! Arena-backed node storage shared by the shorthand builder. Only the
//! node kinds the builder can produce exist here: elements and text.

mod node;
mod serializer;
mod tree;

pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use serializer::HtmlSerializer;
pub use tree::{ChildIter, DomTree, Fragment};

/// Node identifier (index into the arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node" (unset parent/sibling links)
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this id refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}
