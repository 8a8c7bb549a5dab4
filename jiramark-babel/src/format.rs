//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! Source formats turn text into a [`Node`] tree, target formats turn a tree back into text.

use crate::ast::Node;
use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for document formats
///
/// Formats can support parsing, serialization, or both. Markdown only parses and
/// Jira only serializes, but the registry treats them uniformly.
///
/// # Examples
///
/// ```ignore
/// struct Plain;
///
/// impl Format for Plain {
///     fn name(&self) -> &str {
///         "plain"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "jira")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Node)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Node → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a document tree
    fn parse(&self, _source: &str) -> Result<Node, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a document tree into text
    fn serialize(&self, _doc: &Node) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a document tree using extra `key=value` parameters.
    ///
    /// The default implementation accepts no parameters and delegates to
    /// [`Format::serialize`].
    fn serialize_with_options(
        &self,
        doc: &Node,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
