//! Block-and-span Markdown to HTML converter.
//!
//! A document is split into blocks on blank lines ([`split_blocks`]), each block is
//! classified ([`block_type`]) and turned into an [`HtmlNode`] subtree whose inline
//! content comes from [`parse_inlines`]. [`parse_document`] gathers the blocks under a
//! single `<div>` and [`html_of`] serializes the result.
//!
//! [`render_page`] fills an HTML template with a rendered document and its title.
//!
//! The dialect is deliberately small: headings, fenced code, quotes, flat lists and
//! paragraphs, with bold, italic, code, link and image spans that do not nest.
//! Malformed inline markup is kept as literal text rather than reported.

mod ast;
pub mod error;
mod page;
pub use ast::{
    Attributes, BlockType, Delimiter, HtmlNode, TextSpan, extract_images, extract_links, parse_inlines,
    split_delimiter, split_images, split_links,
};
pub use error::{Error, ParseError, RenderError};
pub use page::{
    BASE_PATH_PLACEHOLDER, CONTENT_PLACEHOLDER, Page, PageOptions, TITLE_PLACEHOLDER, extract_title, render_page,
};

const FENCE: &str = "```";

/// Tag of the element that holds all blocks of a document.
pub const ROOT_TAG: &str = "div";

#[derive(Debug)]
struct Lines<'a> {
    all: Vec<&'a str>,
    i: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Self { all: input.lines().collect(), i: 0 }
    }

    fn peek(&self) -> Option<&'a str> {
        self.all.get(self.i).copied()
    }

    fn next(&mut self) -> Option<&'a str> {
        let l = self.peek();
        self.i += (l.is_some()) as usize;
        l
    }

    fn is_eof(&self) -> bool {
        self.i >= self.all.len()
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn skip_blank_lines(ls: &mut Lines<'_>) {
    while let Some(l) = ls.peek() {
        if is_blank(l) {
            ls.next();
        } else {
            break;
        }
    }
}

/// Collect trimmed lines up to the next blank line.
fn take_block(ls: &mut Lines<'_>) -> Option<String> {
    let mut lines = Vec::new();
    while let Some(l) = ls.peek() {
        if is_blank(l) {
            break;
        }
        lines.push(ls.next()?.trim());
    }
    if lines.is_empty() { None } else { Some(lines.join("\n")) }
}

/// Split a document into blocks separated by one or more blank lines.
///
/// Every line of a block is trimmed on both sides and the lines are joined with `\n`.
/// Whitespace-only lines count as blank, so an all-blank document yields no blocks.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let mut ls = Lines::new(markdown);
    let mut blocks = Vec::new();

    while !ls.is_eof() {
        skip_blank_lines(&mut ls);
        if let Some(block) = take_block(&mut ls) {
            blocks.push(block);
        }
    }
    blocks
}

/// `#` through `######` followed by a space.
fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && line[hashes..].starts_with(' ') { Some(hashes as u8) } else { None }
}

fn is_code_block(block: &str) -> bool {
    let first = block.lines().next().unwrap_or_default();
    let last = block.lines().next_back().unwrap_or_default();
    first.starts_with(FENCE) && last.ends_with(FENCE)
}

fn is_quote(block: &str) -> bool {
    block.lines().all(|l| l.starts_with('>'))
}

/// Classify a trimmed block. The first matching rule wins: code fence, heading, quote,
/// unordered list, ordered list, and paragraph as the fallback.
///
/// Blocks from [`split_blocks`] are never empty; an empty string is a paragraph.
pub fn block_type(block: &str) -> BlockType {
    if block.is_empty() {
        return BlockType::Paragraph;
    }
    if is_code_block(block) {
        return BlockType::Code;
    }
    if let Some(level) = block.lines().next().and_then(heading_level) {
        return BlockType::Heading(level);
    }
    if is_quote(block) {
        BlockType::Quote
    } else if ast::is_unordered_list(block) {
        BlockType::UnorderedList
    } else if ast::is_ordered_list(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

fn inline_children(text: &str) -> Vec<HtmlNode> {
    parse_inlines(text).into_iter().map(HtmlNode::from).collect()
}

fn heading_node(block: &str, level: u8) -> Result<HtmlNode, String> {
    if heading_level(block) != Some(level) {
        return Err(format!("missing `{}` heading marker", "#".repeat(level as usize)));
    }
    let text = &block[level as usize + 1..];
    Ok(HtmlNode::parent(BlockType::Heading(level).tag(), inline_children(text)))
}

/// `pre > code` with the fences removed. The content stays literal; only a newline
/// right after a bare opening fence is dropped.
fn code_node(block: &str) -> Result<HtmlNode, String> {
    let body = block.strip_prefix(FENCE).ok_or("missing opening fence")?;
    let body = body.strip_suffix(FENCE).unwrap_or(body);
    let text = body.strip_prefix('\n').unwrap_or(body);

    let code = HtmlNode::parent("code", vec![HtmlNode::text(text)]);
    Ok(HtmlNode::parent(BlockType::Code.tag(), vec![code]))
}

fn quote_node(block: &str) -> Result<HtmlNode, String> {
    let lines = block
        .lines()
        .map(|l| l.strip_prefix('>').map(str::trim_start).ok_or_else(|| format!("quote line without `>`: {l:?}")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(BlockType::Quote.tag(), inline_children(&lines.join("\n"))))
}

fn list_node(block: &str, kind: BlockType, strip: fn(&str) -> Option<&str>) -> Result<HtmlNode, String> {
    let items = block
        .lines()
        .map(|l| {
            strip(l)
                .map(|item| HtmlNode::parent("li", inline_children(item)))
                .ok_or_else(|| format!("list line without marker: {l:?}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(kind.tag(), items))
}

fn assemble(block: &str, kind: BlockType) -> Result<HtmlNode, String> {
    match kind {
        BlockType::Heading(level) => heading_node(block, level),
        BlockType::Code => code_node(block),
        BlockType::Quote => quote_node(block),
        BlockType::UnorderedList => list_node(block, kind, ast::strip_bullet),
        BlockType::OrderedList => list_node(block, kind, ast::strip_ordered_bullet),
        BlockType::Paragraph => Ok(HtmlNode::parent(kind.tag(), inline_children(block))),
    }
}

fn numbered_block_to_node(index: usize, block: &str) -> Result<HtmlNode, ParseError> {
    let kind = block_type(block);
    log::trace!("block {index} classified as {kind:?}");
    assemble(block, kind).map_err(|msg| ParseError::Invalid { block: index, msg })
}

/// Classify one block and build its HTML subtree.
///
/// Errors only when the block's markup cannot be stripped the way its classification
/// promises, which indicates a bug rather than bad input.
pub fn block_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    numbered_block_to_node(1, block)
}

/// Parse a markdown document into a `<div>` holding one node per block, in document order.
pub fn parse_document(markdown: &str) -> Result<HtmlNode, ParseError> {
    let blocks = split_blocks(markdown);
    log::debug!("parsing document with {} blocks", blocks.len());

    let children = blocks
        .iter()
        .enumerate()
        .map(|(i, block)| numbered_block_to_node(i + 1, block))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(ROOT_TAG, children))
}

/// Parse `markdown` and serialize it to an HTML string.
pub fn html_of(markdown: &str) -> Result<String, Error> {
    Ok(parse_document(markdown)?.to_html()?)
}
