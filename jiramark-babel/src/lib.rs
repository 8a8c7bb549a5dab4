//! Markdown to Jira wiki markup conversion
//!
//!     This crate converts CommonMark Markdown (with GitHub-style strikethrough and tables) into
//!     the wiki markup Jira accepts in issue descriptions and comments.
//!
//!     This is a pure lib, that is, it powers jiramark-cli but is shell agnostic: no code here
//!     prints to std streams or reads env vars. Diagnostics go through `tracing`.
//!
//!     The file structure :
//!     .
//!     ├── ast.rs                  # Owned document tree shared by all formats
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── markdown            # comrak → tree adapter (source only)
//!     │   └── jira                # tree → Jira markup renderer (target only)
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs includes them.
//!
//! Core Algorithm
//!
//!     Conversion is two steps. The Markdown adapter walks comrak's arena AST once and builds an
//!     owned [`Node`] tree. The Jira renderer then walks that tree depth-first, emitting a fixed
//!     piece of markup per node kind into a line-aware buffer. The only positional state, list
//!     depth, tightness and table header mode, travels down the recursion as a copied value.
//!
//! Library Choices
//!
//!     Parsing is left to `comrak`; we only adapt its AST. Raw HTML handling uses `regex`.

pub mod ast;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use ast::{ListType, Node, NodeKind};
pub use error::FormatError;
pub use format::Format;
pub use formats::{JiraFormat, JiraOptions, MarkdownFormat};
pub use registry::FormatRegistry;

/// Converts Markdown source straight to Jira wiki markup.
pub fn markdown_to_jira(source: &str, options: &JiraOptions) -> String {
    let doc = formats::markdown::parser::parse_from_markdown(source);
    formats::jira::render_to_jira(&doc, options)
}
