//! HTML serialization
//!
//! Turns a built tree back into markup. Text content is emitted as
//! stored: escaping is an injection-time policy owned by the builder's
//! sanitize control, so re-escaping here would double-encode it.
//! Attribute values are always escaped.

use crate::{DomTree, NodeData, NodeId};

/// HTML serializer
#[derive(Debug, Default)]
pub struct HtmlSerializer;

/// Void elements (self-closing, no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the children of a node (innerHTML)
    pub fn serialize_inner(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_children(tree, node_id, &mut output);
        output
    }

    /// Serialize a node and its descendants (outerHTML)
    pub fn serialize_outer(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_node(tree, node_id, &mut output);
        output
    }

    fn serialize_node(&self, tree: &DomTree, node_id: NodeId, output: &mut String) {
        let Some(node) = tree.get(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Element(elem) => {
                let is_void = VOID_ELEMENTS.contains(&elem.tag.as_str());

                output.push('<');
                output.push_str(&elem.tag);

                if let Some(id) = &elem.id {
                    output.push_str(" id=\"");
                    escape_attribute(id, output);
                    output.push('"');
                }
                if !elem.classes.is_empty() {
                    output.push_str(" class=\"");
                    escape_attribute(&elem.class_name(), output);
                    output.push('"');
                }
                for attr in &elem.attrs {
                    output.push(' ');
                    output.push_str(&attr.name);
                    output.push_str("=\"");
                    escape_attribute(&attr.value, output);
                    output.push('"');
                }

                if is_void {
                    output.push_str(" />");
                } else {
                    output.push('>');
                    self.serialize_children(tree, node_id, output);
                    output.push_str("</");
                    output.push_str(&elem.tag);
                    output.push('>');
                }
            }
            NodeData::Text(text) => {
                output.push_str(&text.content);
            }
        }
    }

    fn serialize_children(&self, tree: &DomTree, parent_id: NodeId, output: &mut String) {
        for (child_id, _) in tree.children(parent_id) {
            self.serialize_node(tree, child_id, output);
        }
    }
}

/// Escape an attribute value
fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}
