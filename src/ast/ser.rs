//! Serialization support for the document types.
//!
//! When the `serde` feature is enabled, [`TextSpan`], [`Delimiter`], [`HtmlNode`],
//! [`Attributes`], [`BlockType`] and [`crate::PageOptions`] implement
//! [`serde::Serialize`] and [`serde::Deserialize`] via derive macros.
//!
//! This lets a host cache parsed trees or read page options from JSON, YAML, or any
//! other format supported by serde.
//!
//! ## Example
//!
//! ```ignore
//! use mdhtml::{parse_document, HtmlNode};
//!
//! let root = parse_document("# Heading\n\nParagraph text.").unwrap();
//!
//! let json = serde_json::to_string_pretty(&root).unwrap();
//! let parsed: HtmlNode = serde_json::from_str(&json).unwrap();
//! assert_eq!(root, parsed);
//! ```
//!
//! [`TextSpan`]: crate::TextSpan
//! [`Delimiter`]: crate::Delimiter
//! [`HtmlNode`]: crate::HtmlNode
//! [`Attributes`]: crate::Attributes
//! [`BlockType`]: crate::BlockType
