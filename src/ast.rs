mod inlines;
mod lists;
mod node;
mod ser;

pub use inlines::{extract_images, extract_links, parse_inlines, split_delimiter, split_images, split_links};
pub(crate) use lists::{is_ordered_list, is_unordered_list, strip_bullet, strip_ordered_bullet};
pub use node::{Attributes, HtmlNode};

/// Inline-level spans produced by the inline parser.
///
/// Spans are flat: a [`TextSpan::Bold`] never contains an italic run, it only
/// carries the text found between its delimiters. Each span converts into a
/// single [`HtmlNode`] leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        TextSpan::Plain(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        TextSpan::Link { text: text.into(), url: url.into() }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        TextSpan::Image { alt: alt.into(), url: url.into() }
    }

    /// The visible text of the span (alt text for images).
    pub fn text(&self) -> &str {
        match self {
            TextSpan::Plain(t) | TextSpan::Bold(t) | TextSpan::Italic(t) | TextSpan::Code(t) => t,
            TextSpan::Link { text, .. } => text,
            TextSpan::Image { alt, .. } => alt,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            TextSpan::Link { url, .. } | TextSpan::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// Delimiter-based inline styles understood by [`split_delimiter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    pub fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "_",
            Delimiter::Code => "`",
        }
    }

    pub fn wrap(self, text: impl Into<String>) -> TextSpan {
        let text = text.into();
        match self {
            Delimiter::Bold => TextSpan::Bold(text),
            Delimiter::Italic => TextSpan::Italic(text),
            Delimiter::Code => TextSpan::Code(text),
        }
    }
}

/// Block flavors recognized by [`crate::block_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockType {
    Paragraph,
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockType {
    /// HTML tag of the element that wraps a block of this type.
    ///
    /// Heading levels outside 1-6 are clamped to `h6`; the block assembler rejects such
    /// headings before asking for their tag.
    pub fn tag(self) -> &'static str {
        match self {
            BlockType::Paragraph => "p",
            BlockType::Heading(1) => "h1",
            BlockType::Heading(2) => "h2",
            BlockType::Heading(3) => "h3",
            BlockType::Heading(4) => "h4",
            BlockType::Heading(5) => "h5",
            BlockType::Heading(_) => "h6",
            BlockType::Code => "pre",
            BlockType::Quote => "blockquote",
            BlockType::UnorderedList => "ul",
            BlockType::OrderedList => "ol",
        }
    }
}
