//! DOM Node
//!
//! Nodes carry their tree links inline (parent, first/last child,
//! prev/next sibling) so the arena never chases pointers.

use crate::NodeId;

/// DOM Node - core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    /// Create a detached element node
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data: NodeData::Element(ElementData::new(tag)),
        }
    }

    /// Create a detached text node
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data: NodeData::Text(TextData {
                content: content.into(),
            }),
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name (lowercase)
    pub tag: String,
    /// Attributes, in set order
    pub attrs: Vec<Attribute>,
    /// Cached id attribute
    pub id: Option<String>,
    /// Cached class list, in spec order
    pub classes: Vec<String>,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            id: None,
            classes: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute; replaces in place, so a duplicate key keeps the
    /// original position but takes the new value
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        for attr in self.attrs.iter_mut() {
            if attr.name == name {
                attr.value = value;
                return;
            }
        }
        self.attrs.push(Attribute { name, value });
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Space-joined class list, as the `class` attribute would read
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}

/// Text node data
#[derive(Debug, Clone)]
pub struct TextData {
    pub content: String,
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_node() {
        let node = Node::element("div");
        assert!(node.is_element());
        assert!(!node.is_text());
        assert_eq!(node.as_element().map(|e| e.tag.as_str()), Some("div"));
    }

    #[test]
    fn test_text_node() {
        let node = Node::text("hello");
        assert!(node.is_text());
        assert_eq!(node.as_text(), Some("hello"));
        assert!(node.as_element().is_none());
    }

    #[test]
    fn test_set_attr_later_wins() {
        let mut elem = ElementData::new("a");
        elem.set_attr("href", "/first");
        elem.set_attr("title", "t");
        elem.set_attr("href", "/second");

        assert_eq!(elem.get_attr("href"), Some("/second"));
        assert_eq!(elem.attrs.len(), 2);
        // replaced in place, original position kept
        assert_eq!(elem.attrs[0].name, "href");
    }

    #[test]
    fn test_has_attr() {
        let mut elem = ElementData::new("input");
        elem.set_attr("type", "text");

        assert!(elem.has_attr("type"));
        assert!(!elem.has_attr("name"));
    }

    #[test]
    fn test_class_name_joins_with_spaces() {
        let mut elem = ElementData::new("div");
        elem.classes.push("a".to_string());
        elem.classes.push("b".to_string());
        assert_eq!(elem.class_name(), "a b");
    }
}
