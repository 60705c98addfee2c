//! Minimal markup tree for rendered fragments.
//!
//! Attribute values and text are stored unescaped; escaping happens once,
//! in [`Node::write_html`].

use crate::utils::html::{escape, escape_attr, is_void_element};

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First descendant (or self) with the given tag, depth-first.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(elem) => elem.find(tag),
            Node::Text(_) => None,
        })
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Self::Element(elem)
    }
}

impl Element {
    /// Serialize as HTML into `out`.
    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }

        if is_void_element(self.tag) {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }

    /// Concatenated text of all descendants, unescaped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_text(&mut out);
        }
        out
    }
}

impl Node {
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape(text)),
            Self::Element(elem) => elem.write_html(out),
        }
    }

    pub fn write_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(elem) => {
                for child in &elem.children {
                    child.write_text(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(node: impl Into<Node>) -> String {
        let mut out = String::new();
        node.into().write_html(&mut out);
        out
    }

    #[test]
    fn test_nested_elements() {
        let tree = Element::new("p")
            .attr("class", "lead")
            .text("a ")
            .child(Element::new("em").text("b"));
        assert_eq!(html(tree), r#"<p class="lead">a <em>b</em></p>"#);
    }

    #[test]
    fn test_escaping_on_write_only() {
        let tree = Element::new("a")
            .attr("title", "x\"y")
            .text("<b> & co");
        assert_eq!(tree.get_attr("title"), Some("x\"y"));
        assert_eq!(html(tree), r#"<a title="x&quot;y">&lt;b&gt; &amp; co</a>"#);
    }

    #[test]
    fn test_void_element() {
        let tree = Element::new("img").attr("src", "a.png");
        assert_eq!(html(tree), r#"<img src="a.png"/>"#);
    }

    #[test]
    fn test_find_and_text() {
        let tree = Element::new("div").child(
            Element::new("span")
                .text("Written by ")
                .child(Element::new("strong").text("Ada.")),
        );
        assert_eq!(tree.find("strong").map(|e| e.tag), Some("strong"));
        assert!(tree.find("a").is_none());

        assert_eq!(tree.text_content(), "Written by Ada.");
    }
}
