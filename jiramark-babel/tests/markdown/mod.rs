//! Markdown format tests
//!
//! Tests for Markdown → Node tree import.

mod import;
