use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered style map; iteration order is stable so renders are reproducible
pub type StyleMap = BTreeMap<String, String>;

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: StyleMap,
        children: Vec<VNode>,
        /// Stable identity of the slide or content item this node renders
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },

    /// Text node
    Text { content: String },

    /// Comment node
    Comment { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: StyleMap::new(),
            children: Vec::new(),
            key: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        VNode::Comment {
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

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_styles(mut self, new_styles: StyleMap) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.extend(new_styles);
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

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        if let VNode::Element {
            key: ref mut node_key,
            ..
        } = self
        {
            *node_key = Some(key.into());
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            VNode::Element { key, .. } => key.as_deref(),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Depth-first search, self included
    pub fn find(&self, predicate: &dyn Fn(&VNode) -> bool) -> Option<&VNode> {
        if predicate(self) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find(predicate))
    }

    /// Depth-first collection of every matching node, self included
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&VNode) -> bool, out: &mut Vec<&'a VNode>) {
        if predicate(self) {
            out.push(self);
        }
        for child in self.children() {
            child.find_all(predicate, out);
        }
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text { content } => content.clone(),
            VNode::Comment { .. } => String::new(),
            VNode::Element { children, .. } => {
                children.iter().map(VNode::text_content).collect()
            }
        }
    }
}

/// Projection output: the rendered slide plus the stylesheets it needs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VirtualCanvas {
    pub title: String,
    /// Slide being shown, `None` for the placeholder
    pub slide_id: Option<String>,
    pub nodes: Vec<VNode>,
    /// External stylesheet URLs (font loads)
    pub stylesheets: Vec<String>,
}

impl VirtualCanvas {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn add_node(&mut self, node: VNode) {
        self.nodes.push(node);
    }

    pub fn add_stylesheet(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !self.stylesheets.contains(&url) {
            self.stylesheets.push(url);
        }
    }

    /// First node with the given key anywhere in the canvas
    pub fn find_by_key(&self, key: &str) -> Option<&VNode> {
        self.nodes
            .iter()
            .find_map(|node| node.find(&|n| n.key() == Some(key)))
    }

    /// Nodes carrying `attr="value"`, in document order
    pub fn find_by_attr(&self, attr: &str, value: &str) -> Vec<&VNode> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.find_all(&|n| n.attr(attr) == Some(value), &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_queries() {
        let node = VNode::element("div")
            .with_key("slide")
            .with_class("frame")
            .with_style("color", "red")
            .with_child(VNode::element("span").with_key("inner").with_child(VNode::text("Hi")))
            .with_child(VNode::comment("note"));

        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.attr("class"), Some("frame"));
        assert_eq!(node.style("color"), Some("red"));
        assert_eq!(node.text_content(), "Hi");
        assert!(node.find(&|n| n.key() == Some("inner")).is_some());
    }

    #[test]
    fn test_text_nodes_ignore_builders() {
        let node = VNode::text("plain").with_attr("id", "x").with_child(VNode::text("y"));
        assert_eq!(node, VNode::text("plain"));
    }

    #[test]
    fn test_stylesheets_are_deduplicated() {
        let mut canvas = VirtualCanvas::new("Form");
        canvas.add_stylesheet("a.css");
        canvas.add_stylesheet("a.css");
        assert_eq!(canvas.stylesheets, vec!["a.css".to_string()]);
    }
}
