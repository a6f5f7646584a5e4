//! Page assembly: fill an HTML template with a rendered markdown document.
//!
//! The template understands three placeholders:
//!
//! - `{{ Title }}` — the document's first `# ` heading, see [`extract_title`]
//! - `{{ Content }}` — the rendered document, see [`crate::html_of`]
//! - `{{ BasePath }}` — [`PageOptions::base_path`] without its trailing `/`
//!
//! Root-relative `href="/` and `src="/` attributes are rewritten to live under the base path,
//! so a site can be served from a sub-directory.

use crate::{Error, html_of};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";
pub const BASE_PATH_PLACEHOLDER: &str = "{{ BasePath }}";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageOptions {
    /// URL prefix the site is served under, `/` for the domain root.
    pub base_path: String,
}

impl PageOptions {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self { base_path: base_path.into() }
    }

    fn base_prefix(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self { base_path: "/".to_string() }
    }
}

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    /// The document HTML on its own, before template substitution.
    pub content: String,
    /// The filled template.
    pub html: String,
}

/// Return the text of the first line starting with `# `, trimmed.
///
/// Lines are trimmed before matching, so an indented heading still counts. `## Sub` does not.
pub fn extract_title(markdown: &str) -> Result<String, Error> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::MissingTitle)
}

/// Render `markdown` into `template`.
///
/// Fails when the document has no title heading or cannot be rendered; nothing is
/// shared between calls, so a failing page does not affect others.
pub fn render_page(markdown: &str, template: &str, options: &PageOptions) -> Result<Page, Error> {
    let content = html_of(markdown)?;
    let title = extract_title(markdown).inspect_err(|_| log::debug!("document has no title heading"))?;
    let base = options.base_prefix();

    log::debug!("rendering page {title:?} under base path {:?}", options.base_path);

    // rebase before substituting {{ BasePath }}, or its expansion would be prefixed twice
    let html = rebase_urls(template, base)
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &rebase_urls(&content, base))
        .replace(BASE_PATH_PLACEHOLDER, base);

    Ok(Page { title, content, html })
}

fn rebase_urls(html: &str, base: &str) -> String {
    if base.is_empty() {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{base}/")).replace("src=\"/", &format!("src=\"{base}/"))
}
