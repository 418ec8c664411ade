//! A small owned tree of presentation nodes and its HTML serialization.

use crate::highlight::escape_html;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Literal text, escaped on output.
    Text(String),
    /// Markup that is already escaped, emitted verbatim.
    Markup(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
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

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Markup(markup) => out.push_str(markup),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_html(value));
                    out.push('"');
                }
                out.push('>');
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(element.tag);
                out.push('>');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped() {
        assert_eq!(Node::text("<a> & b").to_html(), "&lt;a&gt; &amp; b");
    }

    #[test]
    fn markup_is_verbatim() {
        assert_eq!(Node::Markup("<b>x</b>".into()).to_html(), "<b>x</b>");
    }

    #[test]
    fn element_with_attrs_and_children() {
        let node: Node = Element::new("p")
            .attr("title", "say \"hi\"")
            .child(Node::text("a"))
            .child(Element::new("em").child(Node::text("b")))
            .into();
        assert_eq!(
            node.to_html(),
            "<p title=\"say &quot;hi&quot;\">a<em>b</em></p>"
        );
    }

    #[test]
    fn get_attr_finds_first_match() {
        let element = Element::new("div").attr("data-x", "1");
        assert_eq!(element.get_attr("data-x"), Some("1"));
        assert_eq!(element.get_attr("data-y"), None);
    }
}
