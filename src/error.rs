use thiserror::Error;

/// Raised when the block assembler cannot honour the classification it made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid block {block}: {msg}")]
    Invalid { block: usize, msg: String },
}

/// Structural problems found while serializing an [`crate::HtmlNode`] tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("leaf node <{}> has no value", .tag.as_deref().unwrap_or("text"))]
    MissingValue { tag: Option<String> },
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("no h1 heading found in markdown")]
    MissingTitle,
}
