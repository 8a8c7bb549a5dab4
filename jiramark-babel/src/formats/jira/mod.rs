//! Jira wiki markup format implementation
//!
//! This module renders document trees as Jira wiki markup, the syntax accepted
//! by Jira issue descriptions and comments. Jira is a target-only format: there
//! is no parser.
//!
//! # Element Mapping Table
//!
//! | Node kind          | Jira markup                       | Notes                                  |
//! |--------------------|-----------------------------------|----------------------------------------|
//! | Header             | `hN. text`                        | Own line                               |
//! | Paragraph          | text + blank line                 | Inline inside lists                    |
//! | Blockquote         | `{quote}` ... `{quote}`           |                                        |
//! | HorizontalRule     | `----`                            |                                        |
//! | LineBreak          | `\` + newline                     |                                        |
//! | Emphasis           | `_text_`                          |                                        |
//! | Strong             | `*text*`                          |                                        |
//! | Strikethrough      | `-text-`                          |                                        |
//! | Link               | `[text\|url]` or `[url]`          | Title dropped                          |
//! | Image              | `!url!`                           | Alt text and title dropped             |
//! | InlineCode         | `{{code}}`                        |                                        |
//! | CodeBlock          | `{code:lang}` ... `{code}`        | Unsupported languages become `none`    |
//! | List / ListItem    | `*`, `**`, ... per depth          | Ordered lists also use `*`             |
//! | TableHeader cells  | `\|\|a\|\|b\|\|`                  |                                        |
//! | TableRow cells     | `\|a\|b\|`                        |                                        |
//! | HtmlBlock / Inline | HTML without comments             | Placeholder in safe mode               |
//! | Footnotes          | (nothing)                         |                                        |
//!
//! Text is emitted verbatim. Characters that mean something in Jira markup
//! (`*`, `_`, `{`, `|`) are not escaped.
//!
//! # Options
//!
//! - `safe`: replace raw HTML with `<!-- raw HTML omitted -->`
//! - `max-length`: truncate the output to this many characters, `0` for no limit

pub mod buffer;
pub mod language;
pub mod limit;
pub mod renderer;
pub mod sanitize;

use crate::ast::Node;
use crate::error::FormatError;
use crate::format::Format;
use renderer::JiraRenderer;
use std::borrow::Cow;
use std::collections::HashMap;

/// Rendering options for Jira output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JiraOptions {
    /// Replace raw HTML with a placeholder.
    pub safe: bool,
    /// Maximum output length in characters, `0` for unlimited.
    pub max_length: usize,
}

impl JiraOptions {
    /// Applies `key=value` serialization parameters on top of `self`.
    pub fn with_overrides(
        mut self,
        options: &HashMap<String, String>,
    ) -> Result<Self, FormatError> {
        for (key, value) in options {
            match key.as_str() {
                "safe" => {
                    self.safe = value.parse().map_err(|_| FormatError::InvalidOption {
                        key: key.clone(),
                        reason: format!("expected a boolean, got '{value}'"),
                    })?;
                }
                "max-length" => {
                    self.max_length = value.parse().map_err(|_| FormatError::InvalidOption {
                        key: key.clone(),
                        reason: format!("expected a non-negative integer, got '{value}'"),
                    })?;
                }
                _ => {
                    return Err(FormatError::InvalidOption {
                        key: key.clone(),
                        reason: "unknown option for format 'jira'".to_string(),
                    })
                }
            }
        }
        Ok(self)
    }
}

/// Renders `doc` with `options`, applying the length limit.
pub fn render_to_jira(doc: &Node, options: &JiraOptions) -> String {
    let rendered = JiraRenderer::new(options).render(doc);
    let truncated = match limit::truncate(&rendered, options.max_length) {
        Cow::Owned(truncated) => Some(truncated),
        Cow::Borrowed(_) => None,
    };
    truncated.unwrap_or(rendered)
}

/// Format implementation for Jira wiki markup
#[derive(Debug, Default)]
pub struct JiraFormat {
    options: JiraOptions,
}

impl JiraFormat {
    pub fn new(options: JiraOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &JiraOptions {
        &self.options
    }
}

impl Format for JiraFormat {
    fn name(&self) -> &str {
        "jira"
    }

    fn description(&self) -> &str {
        "Jira wiki markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["jira", "wiki"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        Ok(render_to_jira(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Node,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options.with_overrides(options)?;
        Ok(render_to_jira(doc, &options))
    }
}
