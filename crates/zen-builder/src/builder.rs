//! Spec-to-node construction
//!
//! One-shot pipeline: match the grammar, fill in the element fields,
//! inject content, attach the nested `>` chain, then attach any
//! externally supplied children.

use zen_dom::{DomTree, Fragment, NodeId};

use crate::grammar::{self, NodeSpec};
use crate::{BuildOptions, Child, Children, SpecError};

/// Shorthand spec builder
///
/// Stateless apart from its options; every call parses, validates and
/// constructs in one pass.
#[derive(Debug, Clone, Default)]
pub struct SpecBuilder {
    options: BuildOptions,
}

impl SpecBuilder {
    /// Builder with the process-wide default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with explicit options
    pub fn with_options(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// Build a fragment from a spec, attaching `children` under its root
    ///
    /// Fails with [`SpecError::InvalidSpec`] when the spec matches
    /// neither the single-node grammar nor a valid child-combinator
    /// chain. A malformed *nested* chain segment does not fail the call;
    /// it is discarded and truncates the chain there.
    pub fn build(&self, spec: &str, children: Children) -> Result<Fragment, SpecError> {
        let mut tree = DomTree::new();
        let Some(root) = self.build_node(&mut tree, spec) else {
            tracing::debug!(spec, "spec rejected");
            return Err(SpecError::InvalidSpec {
                spec: spec.to_string(),
            });
        };

        self.attach_children(&mut tree, root, children);
        tracing::trace!(spec, nodes = tree.len(), "built fragment");
        Ok(Fragment::new(tree, root))
    }

    /// Build the node described by `spec`, including any nested chain
    fn build_node(&self, tree: &mut DomTree, spec: &str) -> Option<NodeId> {
        if let Some(node_spec) = grammar::match_node(spec) {
            return Some(self.construct(tree, node_spec));
        }

        // Not a single node; only a child-combinator chain can save it,
        // and then the first segment must parse on its own.
        let segments = grammar::split_chain(spec)?;
        let (head, rest) = segments.split_first()?;
        let head_spec = grammar::match_node(head)?;

        let node = self.construct(tree, head_spec);
        self.attach_chain(tree, node, rest);
        Some(node)
    }

    /// Attach chain segments as a linear single-child descendant chain
    fn attach_chain(&self, tree: &mut DomTree, parent: NodeId, rest: &[&str]) {
        let Some((head, tail)) = rest.split_first() else {
            return;
        };
        match grammar::match_node(head) {
            Some(node_spec) => {
                let child = self.construct(tree, node_spec);
                tree.append_child(parent, child);
                self.attach_chain(tree, child, tail);
            }
            None => {
                // Malformed nested segment: the parent keeps building,
                // the chain just ends here.
                tracing::debug!(segment = *head, "discarding malformed chain segment");
            }
        }
    }

    /// Create the element and apply the captured fields
    fn construct(&self, tree: &mut DomTree, spec: NodeSpec<'_>) -> NodeId {
        let node = tree.create_element(spec.tag);

        if let Some(elem) = tree.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.id = spec.id.map(str::to_string);
            elem.classes = spec.classes.iter().map(|c| c.to_string()).collect();
            for (key, value) in spec.attrs {
                // later duplicate keys overwrite earlier ones
                elem.set_attr(key, value);
            }
        }

        if let Some(content) = spec.content {
            let content = if self.options.sanitize {
                sanitize_content(content)
            } else {
                content.to_string()
            };
            let text = tree.create_text(content);
            tree.append_child(node, text);
        }

        node
    }

    /// Attach externally supplied children, in argument order
    fn attach_children(&self, tree: &mut DomTree, parent: NodeId, children: Children) {
        match children {
            Children::None => {}
            Children::One(child) => self.attach_child(tree, parent, child),
            Children::Many(list) => {
                for child in list {
                    self.attach_child(tree, parent, child);
                }
            }
        }
    }

    fn attach_child(&self, tree: &mut DomTree, parent: NodeId, child: Child) {
        match child {
            Child::Node(fragment) => {
                tree.adopt(parent, fragment);
            }
            Child::Text(text) => {
                let id = tree.create_text(text);
                tree.append_child(parent, id);
            }
        }
    }
}

/// Escape `<` and `>` in inline content
///
/// This is the system's only injection control; it deliberately leaves
/// every other character alone.
fn sanitize_content(content: &str) -> String {
    content.replace('<', "&lt;").replace('>', "&gt;")
}
