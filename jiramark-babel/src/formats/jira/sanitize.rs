//! Raw HTML handling for Jira output.
//!
//! Jira wiki markup has no use for HTML, but issue bodies written on GitHub are
//! full of it (templates leave `<!-- ... -->` hints behind). Comments are always
//! removed; everything else passes through the [`TagFilter`] policy.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use tracing::trace;

/// Emitted instead of any raw HTML when safe mode is on.
pub const RAW_HTML_PLACEHOLDER: &str = "<!-- raw HTML omitted -->";

static HTML_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

/// Removes every HTML comment from `html`.
///
/// Removal is repeated until no comment is left, so `<!<!-- a -->-- b -->`
/// does not leave a freshly joined comment behind and a second call is always
/// a no-op.
pub fn strip_comments(html: &str) -> Cow<'_, str> {
    if !HTML_COMMENT.is_match(html) {
        return Cow::Borrowed(html);
    }
    let mut stripped = HTML_COMMENT.replace_all(html, "").into_owned();
    while HTML_COMMENT.is_match(&stripped) {
        stripped = HTML_COMMENT.replace_all(&stripped, "").into_owned();
    }
    Cow::Owned(stripped)
}

/// Policy applied to raw HTML tags that survive comment stripping.
pub trait TagFilter: Send + Sync {
    fn filter<'a>(&self, html: &'a str) -> Cow<'a, str>;
}

/// Keeps every tag as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl TagFilter for PassThrough {
    fn filter<'a>(&self, html: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(html)
    }
}

/// Applies the raw HTML policy to block and inline HTML content.
pub struct HtmlSanitizer {
    safe: bool,
    tag_filter: Box<dyn TagFilter>,
}

impl HtmlSanitizer {
    pub fn new(safe: bool) -> Self {
        Self::with_tag_filter(safe, PassThrough)
    }

    pub fn with_tag_filter<F: TagFilter + 'static>(safe: bool, tag_filter: F) -> Self {
        Self {
            safe,
            tag_filter: Box::new(tag_filter),
        }
    }

    pub fn is_safe(&self) -> bool {
        self.safe
    }

    /// Returns the text to emit for a raw HTML node.
    pub fn sanitize<'a>(&self, html: &'a str) -> Cow<'a, str> {
        if self.safe {
            trace!(bytes = html.len(), "raw HTML omitted in safe mode");
            return Cow::Borrowed(RAW_HTML_PLACEHOLDER);
        }
        match self.tag_filter.filter(html) {
            Cow::Borrowed(filtered) => strip_comments(filtered),
            Cow::Owned(filtered) => Cow::Owned(strip_comments(&filtered).into_owned()),
        }
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new(false)
    }
}
