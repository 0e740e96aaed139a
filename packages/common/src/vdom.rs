//! Virtual DOM nodes emitted by block views and page composition.
//!
//! Attribute and style maps are `BTreeMap` so that serialization and HTML
//! output are deterministic regardless of insertion order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        attributes: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        styles: BTreeMap<String, String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<VNode>,
    },

    /// Text node
    Text { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    /// Append to the `class` attribute, space-separated.
    pub fn with_class(mut self, class: impl AsRef<str>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            let entry = attributes.entry("class".to_string()).or_default();
            if entry.is_empty() {
                entry.push_str(class.as_ref());
            } else {
                entry.push(' ');
                entry.push_str(class.as_ref());
            }
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    /// Merge a whole style map in.
    pub fn with_styles(mut self, map: BTreeMap<String, String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.extend(map);
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            VNode::Text { .. } => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            VNode::Text { .. } => None,
        }
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles.get(key).map(String::as_str),
            VNode::Text { .. } => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            VNode::Text { .. } => &[],
        }
    }

    /// Depth-first walk over this node and all descendants.
    pub fn walk(&self, visit: &mut impl FnMut(&VNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Concatenated text content of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |node| {
            if let VNode::Text { content } = node {
                out.push_str(content);
            }
        });
        out
    }

    /// First descendant (or self) carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&VNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_class(class))
    }
}

/// Virtual document: the ordered root nodes of one composed page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VDocument {
    pub nodes: Vec<VNode>,
}

impl VDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: VNode) {
        self.nodes.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_compose() {
        let node = VNode::element("section")
            .with_class("bs-block")
            .with_class("bs-block--hero")
            .with_attr("data-instance", "blk-1")
            .with_style("margin-top", "24px")
            .with_child(VNode::text("hello"));

        assert!(node.has_class("bs-block"));
        assert!(node.has_class("bs-block--hero"));
        assert_eq!(node.attr("data-instance"), Some("blk-1"));
        assert_eq!(node.style("margin-top"), Some("24px"));
        assert_eq!(node.text_content(), "hello");
    }

    #[test]
    fn test_find_by_class_searches_descendants() {
        let tree = VNode::element("div").with_child(
            VNode::element("div")
                .with_class("inner")
                .with_child(VNode::text("x")),
        );
        assert!(tree.find_by_class("inner").is_some());
        assert!(tree.find_by_class("missing").is_none());
    }

    #[test]
    fn test_serialization_is_tagged() {
        let node = VNode::text("hi");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "Text");
        assert_eq!(json["content"], "hi");
    }
}
