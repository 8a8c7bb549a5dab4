//! Format implementations
//!
//! Markdown is the source format, Jira wiki markup the target.

pub mod jira;
pub mod markdown;

pub use jira::{JiraFormat, JiraOptions};
pub use markdown::MarkdownFormat;
