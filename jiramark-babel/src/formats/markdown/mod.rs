//! Markdown format implementation
//!
//! This module implements Markdown import into the document tree. Markdown is a
//! source-only format here: there is no serializer back to Markdown.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing. This choice is based on:
//! - CommonMark compliance with the GitHub-flavoured extensions we need
//!   (strikethrough and tables)
//! - An arena AST that maps one-to-one onto the node kinds the renderers handle
//! - Robust and well-maintained
//!
//! Only the strikethrough and table extensions are enabled, so footnote syntax,
//! task lists and autolinks stay plain text.
//!
//! # Node Mapping Table
//!
//! | Comrak node          | Node kind            | Notes                                  |
//! |----------------------|----------------------|----------------------------------------|
//! | Heading              | Header               | Level 1-6                              |
//! | BlockQuote           | Blockquote           |                                        |
//! | ThematicBreak        | HorizontalRule       |                                        |
//! | Emph / Strong        | Emphasis / Strong    |                                        |
//! | Code                 | InlineCode           |                                        |
//! | CodeBlock            | CodeBlock            | Empty info string → no fence info      |
//! | List / Item          | List / ListItem      | Ordered/bullet and tightness preserved |
//! | TableRow(true)       | TableHeader          | The header row                         |
//! | TableRow(false)      | TableRow             |                                        |
//! | HtmlInline           | InlineHtml           |                                        |
//! | FrontMatter          | (dropped)            |                                        |
//! | anything else        | (unwrapped)          | Children are spliced into the parent   |

pub mod parser;

use crate::ast::Node;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown with strikethrough and tables"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        Ok(parser::parse_from_markdown(source))
    }
}
