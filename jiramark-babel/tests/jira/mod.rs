//! Jira format tests
//!
//! End-to-end Markdown → Jira conversion and renderer properties.

mod export;
mod properties;
