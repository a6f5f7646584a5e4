use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{Delimiter, TextSpan};

/// `![alt](url)`, whitespace tolerated around the label, the url, and between them
static IMAGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[\s*([^\[\]]*?)\s*\]\s*\(\s*([^()]*?)\s*\)").unwrap());

/// `[text](url)`; callers reject matches preceded by `!`
static LINK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\s*([^\[\]]*?)\s*\]\s*\(\s*([^()]*?)\s*\)").unwrap());

struct Match {
    range: Range<usize>,
    label: String,
    url: String,
}

impl Match {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Match {
            range: whole.range(),
            label: caps.get(1).map_or("", |m| m.as_str()).trim().to_string(),
            url: caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
        })
    }
}

fn image_matches(text: &str) -> Vec<Match> {
    IMAGE_REGEX.captures_iter(text).filter_map(|c| Match::from_captures(&c)).collect()
}

fn link_matches(text: &str) -> Vec<Match> {
    LINK_REGEX
        .captures_iter(text)
        .filter_map(|c| Match::from_captures(&c))
        .filter(|m| !text[..m.range.start].ends_with('!'))
        .collect()
}

/// Every `![alt](url)` in `text` as `(alt, url)` pairs, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    image_matches(text).into_iter().map(|m| (m.label, m.url)).collect()
}

/// Every `[text](url)` in `text` that is not an image, as `(text, url)` pairs.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    link_matches(text).into_iter().map(|m| (m.label, m.url)).collect()
}

fn push_plain(out: &mut Vec<TextSpan>, text: &str) {
    if !text.is_empty() {
        out.push(TextSpan::Plain(text.to_string()));
    }
}

/// Split plain spans on `delimiter`, turning every other piece into the delimiter's style.
///
/// An even number of pieces means an unmatched delimiter; such spans are kept as they are.
/// Empty pieces are dropped. Non-plain spans pass through untouched.
pub fn split_delimiter(spans: Vec<TextSpan>, delimiter: Delimiter) -> Vec<TextSpan> {
    let marker = delimiter.marker();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let pieces: Vec<&str> = text.split(marker).collect();
        if pieces.len() % 2 == 0 {
            out.push(TextSpan::Plain(text));
            continue;
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(piece));
            } else {
                out.push(delimiter.wrap(piece));
            }
        }
    }
    out
}

fn split_matches(
    spans: Vec<TextSpan>, find: fn(&str) -> Vec<Match>, build: fn(String, String) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let matches = find(&text);
        if matches.is_empty() {
            out.push(TextSpan::Plain(text));
            continue;
        }

        let mut cursor = 0;
        for m in matches {
            push_plain(&mut out, &text[cursor..m.range.start]);
            out.push(build(m.label, m.url));
            cursor = m.range.end;
        }
        push_plain(&mut out, &text[cursor..]);
    }
    out
}

/// Replace `![alt](url)` occurrences inside plain spans with [`TextSpan::Image`].
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, image_matches, |alt, url| TextSpan::Image { alt, url })
}

/// Replace `[text](url)` occurrences inside plain spans with [`TextSpan::Link`].
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, link_matches, |text, url| TextSpan::Link { text, url })
}

/// Parse the inline markup of one block's text into a flat list of spans.
///
/// Delimiters are applied in a fixed order (bold, italic, code) followed by images and
/// links. Spans do not nest, and malformed markup stays literal text.
pub fn parse_inlines(text: &str) -> Vec<TextSpan> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut spans = vec![TextSpan::plain(text)];
    for delimiter in [Delimiter::Bold, Delimiter::Italic, Delimiter::Code] {
        spans = split_delimiter(spans, delimiter);
    }
    split_links(split_images(spans))
}
