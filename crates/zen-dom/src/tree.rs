//! DOM Tree (arena-based allocation)

use crate::{Node, NodeData, NodeId};

/// Arena-based DOM tree
#[derive(Debug, Clone, Default)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new empty DOM tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a detached element node, returning its id
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node, returning its id
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.push(Node::text(content))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent`
    ///
    /// Both ids must belong to this tree; out-of-range ids are ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }

        let prev_last = self.nodes[parent.0 as usize].last_child;

        {
            let child_node = &mut self.nodes[child.0 as usize];
            child_node.parent = parent;
            child_node.prev_sibling = prev_last;
            child_node.next_sibling = NodeId::NONE;
        }

        if prev_last.is_valid() {
            self.nodes[prev_last.0 as usize].next_sibling = child;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        self.nodes[parent.0 as usize].last_child = child;
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        ChildIter { tree: self, next: first }
    }

    /// Direct element children only
    pub fn element_children(&self, parent: NodeId) -> Vec<NodeId> {
        self.children(parent)
            .filter(|(_, n)| n.is_element())
            .map(|(id, _)| id)
            .collect()
    }

    /// Concatenated content of the direct text children of a node
    ///
    /// This is the observable the shorthand builder writes inline content
    /// into, so it reflects whatever escaping was applied at build time.
    pub fn text_content(&self, parent: NodeId) -> String {
        let mut out = String::new();
        for (_, node) in self.children(parent) {
            if let Some(text) = node.as_text() {
                out.push_str(text);
            }
        }
        out
    }

    /// Graft a fragment's nodes into this arena and append its root as the
    /// last child of `parent`. Returns the root's id in this tree.
    pub fn adopt(&mut self, parent: NodeId, fragment: Fragment) -> NodeId {
        let offset = self.nodes.len() as u32;
        let remap = |id: NodeId| {
            if id.is_valid() { NodeId(id.0 + offset) } else { NodeId::NONE }
        };

        for mut node in fragment.tree.nodes {
            node.parent = remap(node.parent);
            node.first_child = remap(node.first_child);
            node.last_child = remap(node.last_child);
            node.prev_sibling = remap(node.prev_sibling);
            node.next_sibling = remap(node.next_sibling);
            self.nodes.push(node);
        }

        let root = remap(fragment.root);
        tracing::trace!(nodes = self.nodes.len(), "adopted fragment");
        self.append_child(parent, root);
        root
    }
}

/// Iterator over direct children
pub struct ChildIter<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// An owned tree plus the node it was built around
///
/// The shorthand builder hands these out; attaching one under another
/// tree goes through [`DomTree::adopt`].
#[derive(Debug, Clone)]
pub struct Fragment {
    pub tree: DomTree,
    pub root: NodeId,
}

impl Fragment {
    pub fn new(tree: DomTree, root: NodeId) -> Self {
        Self { tree, root }
    }

    /// The root node
    pub fn root_node(&self) -> &Node {
        &self.tree.nodes[self.root.0 as usize]
    }

    /// Root element data; the builder only ever roots fragments at elements
    pub fn root_element(&self) -> Option<&crate::ElementData> {
        self.root_node().as_element()
    }

    /// Root tag name
    pub fn tag(&self) -> &str {
        match &self.root_node().data {
            NodeData::Element(e) => &e.tag,
            NodeData::Text(_) => "",
        }
    }

    /// Ids of the root's direct element children
    pub fn child_elements(&self) -> Vec<NodeId> {
        self.tree.element_children(self.root)
    }

    /// Inline content of the root (direct text children, concatenated)
    pub fn content(&self) -> String {
        self.tree.text_content(self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_child_links() {
        let mut tree = DomTree::new();
        let parent = tree.create_element("ul");
        let a = tree.create_element("li");
        let b = tree.create_element("li");

        tree.append_child(parent, a);
        tree.append_child(parent, b);

        let ids: Vec<NodeId> = tree.children(parent).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(tree.get(parent).unwrap().first_child, a);
        assert_eq!(tree.get(parent).unwrap().last_child, b);
        assert_eq!(tree.get(a).unwrap().next_sibling, b);
        assert_eq!(tree.get(b).unwrap().prev_sibling, a);
        assert_eq!(tree.get(b).unwrap().parent, parent);
    }

    #[test]
    fn test_text_content_concatenates_direct_text() {
        let mut tree = DomTree::new();
        let parent = tree.create_element("p");
        let t1 = tree.create_text("foo");
        let child = tree.create_element("span");
        let t2 = tree.create_text("bar");

        tree.append_child(parent, t1);
        tree.append_child(parent, child);
        tree.append_child(parent, t2);

        assert_eq!(tree.text_content(parent), "foobar");
    }

    #[test]
    fn test_adopt_remaps_ids() {
        let mut inner = DomTree::new();
        let inner_root = inner.create_element("span");
        let inner_text = inner.create_text("hi");
        inner.append_child(inner_root, inner_text);

        let mut outer = DomTree::new();
        let outer_root = outer.create_element("div");
        let grafted = outer.adopt(outer_root, Fragment::new(inner, inner_root));

        assert_eq!(outer.len(), 3);
        assert_eq!(outer.get(grafted).unwrap().parent, outer_root);
        assert_eq!(outer.text_content(grafted), "hi");

        let children: Vec<NodeId> = outer.children(outer_root).map(|(id, _)| id).collect();
        assert_eq!(children, vec![grafted]);
    }

    #[test]
    fn test_adopt_keeps_sibling_order() {
        let mut outer = DomTree::new();
        let root = outer.create_element("div");

        for tag in ["a", "b"] {
            let mut inner = DomTree::new();
            let inner_root = inner.create_element(tag);
            outer.adopt(root, Fragment::new(inner, inner_root));
        }

        let tags: Vec<String> = outer
            .children(root)
            .filter_map(|(_, n)| n.as_element().map(|e| e.tag.clone()))
            .collect();
        assert_eq!(tags, vec!["a", "b"]);
    }
}
