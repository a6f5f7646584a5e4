use crate::{RenderError, TextSpan};

/// Insertion-ordered HTML attributes.
///
/// Behaves like a map keyed by attribute name: inserting a name twice replaces the
/// value but keeps the position of the first insertion, so rendering order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Render as ` name="value"` pairs. Values are substituted literally.
    pub fn to_html(&self) -> String {
        self.0.iter().map(|(n, v)| format!(" {n}=\"{v}\"")).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// Renderable HTML tree.
///
/// A `Leaf` holds text (optionally wrapped in a tag), a `Parent` holds child nodes.
/// The optional fields model nodes that were assembled incorrectly; [`HtmlNode::to_html`]
/// rejects them instead of guessing. The constructors on this type never produce such nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HtmlNode {
    Leaf { tag: Option<String>, value: Option<String>, attrs: Attributes },
    Parent { tag: Option<String>, children: Option<Vec<HtmlNode>>, attrs: Attributes },
}

impl HtmlNode {
    /// Untagged leaf, rendered as its bare value.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf { tag: None, value: Some(value.into()), attrs: Attributes::new() }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf { tag: Some(tag.into()), value: Some(value.into()), attrs: Attributes::new() }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent { tag: Some(tag.into()), children: Some(children), attrs: Attributes::new() }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs.insert(name, value),
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => value.as_deref(),
            HtmlNode::Parent { .. } => None,
        }
    }

    /// Child nodes; always empty for a leaf.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Parent { children: Some(children), .. } => children.as_slice(),
            _ => &[],
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs,
        }
    }

    /// Serialize the tree to HTML.
    ///
    /// Fails on the first structurally invalid node; no partial output is returned.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => {
                let value = value.as_deref().ok_or_else(|| RenderError::MissingValue { tag: tag.clone() })?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        out.push_str(&format!("<{tag}{}>", attrs.to_html()));
                        out.push_str(value);
                        out.push_str(&format!("</{tag}>"));
                    }
                }
            }
            HtmlNode::Parent { tag, children, attrs } => {
                let tag = tag.as_deref().ok_or(RenderError::MissingTag)?;
                let children =
                    children.as_deref().ok_or_else(|| RenderError::MissingChildren { tag: tag.to_string() })?;
                out.push_str(&format!("<{tag}{}>", attrs.to_html()));
                for child in children {
                    child.write_html(out)?;
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
        Ok(())
    }
}

impl From<TextSpan> for HtmlNode {
    fn from(span: TextSpan) -> Self {
        match span {
            TextSpan::Plain(text) => HtmlNode::text(text),
            TextSpan::Bold(text) => HtmlNode::leaf("b", text),
            TextSpan::Italic(text) => HtmlNode::leaf("i", text),
            TextSpan::Code(text) => HtmlNode::leaf("code", text),
            TextSpan::Link { text, url } => HtmlNode::leaf("a", text).with_attr("href", url),
            TextSpan::Image { alt, url } => HtmlNode::leaf("img", "").with_attr("src", url).with_attr("alt", alt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_render_in_insertion_order() {
        let attrs: Attributes = [("href", "https://example.com"), ("class", "btn")].into_iter().collect();
        assert_eq!(attrs.to_html(), " href=\"https://example.com\" class=\"btn\"");
    }

    #[test]
    fn attributes_empty_render_nothing() {
        assert_eq!(Attributes::new().to_html(), "");
    }

    #[test]
    fn attributes_reinsert_keeps_position() {
        let mut attrs = Attributes::new();
        attrs.insert("src", "a.png");
        attrs.insert("alt", "a");
        attrs.insert("src", "b.png");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("src"), Some("b.png"));
        assert_eq!(attrs.to_html(), " src=\"b.png\" alt=\"a\"");
    }

    #[test]
    fn untagged_leaf_renders_bare_value() {
        assert_eq!(HtmlNode::text("Just text").to_html().unwrap(), "Just text");
    }

    #[test]
    fn tagged_leaf_renders_with_attributes() {
        let node = HtmlNode::leaf("a", "Click me!").with_attr("href", "https://www.google.com");
        assert_eq!(node.to_html().unwrap(), "<a href=\"https://www.google.com\">Click me!</a>");
    }

    #[test]
    fn leaf_without_value_fails() {
        let node = HtmlNode::Leaf { tag: Some("p".into()), value: None, attrs: Attributes::new() };
        assert_eq!(node.to_html(), Err(RenderError::MissingValue { tag: Some("p".into()) }));
    }

    #[test]
    fn parent_renders_children_in_order() {
        let node = HtmlNode::parent(
            "p",
            vec![
                HtmlNode::leaf("b", "Bold text"),
                HtmlNode::text("Normal text"),
                HtmlNode::leaf("i", "italic text"),
                HtmlNode::text("Normal text"),
            ],
        );
        assert_eq!(node.to_html().unwrap(), "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>");
    }

    #[test]
    fn nested_parents_render() {
        let grandchild = HtmlNode::leaf("b", "grandchild");
        let child = HtmlNode::parent("span", vec![grandchild]);
        let node = HtmlNode::parent("div", vec![child]).with_attr("class", "wrap");
        assert_eq!(node.to_html().unwrap(), "<div class=\"wrap\"><span><b>grandchild</b></span></div>");
    }

    #[test]
    fn parent_with_empty_children_is_valid() {
        assert_eq!(HtmlNode::parent("div", vec![]).to_html().unwrap(), "<div></div>");
    }

    #[test]
    fn parent_without_tag_fails() {
        let node = HtmlNode::Parent { tag: None, children: Some(vec![]), attrs: Attributes::new() };
        assert_eq!(node.to_html(), Err(RenderError::MissingTag));
    }

    #[test]
    fn parent_without_children_fails() {
        let node = HtmlNode::Parent { tag: Some("ul".into()), children: None, attrs: Attributes::new() };
        assert_eq!(node.to_html(), Err(RenderError::MissingChildren { tag: "ul".into() }));
    }

    #[test]
    fn invalid_descendant_fails_whole_tree() {
        let bad = HtmlNode::Leaf { tag: None, value: None, attrs: Attributes::new() };
        let node = HtmlNode::parent("div", vec![HtmlNode::text("ok"), bad]);
        assert!(matches!(node.to_html(), Err(RenderError::MissingValue { tag: None })));
    }

    #[test]
    fn plain_span_becomes_untagged_leaf() {
        let node = HtmlNode::from(TextSpan::plain("This is a text node"));
        assert_eq!(node.tag(), None);
        assert_eq!(node.value(), Some("This is a text node"));
    }

    #[test]
    fn styled_spans_become_tagged_leaves() {
        let bold = HtmlNode::from(TextSpan::Bold("Bold text".into()));
        assert_eq!((bold.tag(), bold.value()), (Some("b"), Some("Bold text")));

        let italic = HtmlNode::from(TextSpan::Italic("Italic text".into()));
        assert_eq!((italic.tag(), italic.value()), (Some("i"), Some("Italic text")));

        let code = HtmlNode::from(TextSpan::Code("print('Hello')".into()));
        assert_eq!((code.tag(), code.value()), (Some("code"), Some("print('Hello')")));
    }

    #[test]
    fn link_span_becomes_anchor() {
        let node = HtmlNode::from(TextSpan::link("Click here", "https://example.com"));
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(node.value(), Some("Click here"));
        assert_eq!(node.attrs().iter().collect::<Vec<_>>(), vec![("href", "https://example.com")]);
    }

    #[test]
    fn image_span_becomes_img_with_empty_value() {
        let node = HtmlNode::from(TextSpan::image("An image", "https://example.com/image.png"));
        assert_eq!(node.tag(), Some("img"));
        assert_eq!(node.value(), Some(""));
        assert_eq!(
            node.attrs().iter().collect::<Vec<_>>(),
            vec![("src", "https://example.com/image.png"), ("alt", "An image")]
        );
        assert_eq!(node.to_html().unwrap(), "<img src=\"https://example.com/image.png\" alt=\"An image\"></img>");
    }
}
