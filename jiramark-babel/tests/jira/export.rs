//! Export tests for the Jira format (Markdown → Jira)
//!
//! These tests run the full pipeline: comrak parsing, the Node adapter and the
//! Jira renderer.

use insta::assert_snapshot;
use jiramark_babel::format::Format;
use jiramark_babel::formats::jira::JiraFormat;
use jiramark_babel::{markdown_to_jira, FormatRegistry, JiraOptions};
use std::collections::HashMap;

fn convert(md: &str) -> String {
    markdown_to_jira(md, &JiraOptions::default())
}

#[test]
fn test_heading() {
    assert_eq!(convert("# Hello\n"), "h1. Hello\n");
    assert_eq!(convert("###### Six\n"), "h6. Six\n");
}

#[test]
fn test_heading_is_directly_followed_by_content() {
    assert_eq!(convert("# Title\n\nBody\n"), "h1. Title\nBody\n\n");
}

#[test]
fn test_inline_formatting() {
    assert_eq!(
        convert("Some *em*, **strong**, ~~gone~~ and `x < 1`.\n"),
        "Some _em_, *strong*, -gone- and {{x < 1}}.\n\n"
    );
}

#[test]
fn test_links_and_images() {
    assert_eq!(
        convert("[site](http://x.io) ![logo](a.png)\n"),
        "[site|http://x.io] !a.png!\n\n"
    );
}

#[test]
fn test_autolink_repeats_url() {
    assert_eq!(
        convert("<http://y.io>\n"),
        "[http://y.io|http://y.io]\n\n"
    );
}

#[test]
fn test_line_breaks() {
    assert_eq!(convert("a  \nb\n"), "a\\\nb\n\n");
    assert_eq!(convert("a\nb\n"), "a\nb\n\n");
}

#[test]
fn test_horizontal_rule() {
    assert_eq!(
        convert("above\n\n---\n\nbelow\n"),
        "above\n\n----\nbelow\n\n"
    );
}

#[test]
fn test_code_block_language() {
    assert_eq!(
        convert("```python\nprint(1)\n```\n"),
        "{code:python}\nprint(1)\n{code}\n"
    );
    assert_eq!(
        convert("```brainfuck\n+++\n```\n"),
        "{code:none}\n+++\n{code}\n"
    );
    assert_eq!(
        convert("```\nplain\n```\n"),
        "{code:none}\nplain\n{code}\n"
    );
}

#[test]
fn test_code_block_language_uses_first_word() {
    assert_eq!(
        convert("```ruby linenos\nputs 1\n```\n"),
        "{code:ruby}\nputs 1\n{code}\n"
    );
}

#[test]
fn test_ordered_list_renders_as_bullets() {
    assert_eq!(
        convert("1. one\n2. two\n   - nested\n"),
        "* one\n* two\n** nested\n\n"
    );
}

#[test]
fn test_loose_list_renders_tight() {
    assert_eq!(convert("- a\n\n- b\n"), "* a\n* b\n\n");
}

#[test]
fn test_sibling_list_after_deep_nesting() {
    let md = "- a\n  - b\n    - c\n\ntext\n\n- d\n";
    assert_eq!(convert(md), "* a\n** b\n*** c\n\ntext\n\n* d\n\n");
}

#[test]
fn test_table() {
    let md = "| A | B |\n|---|---|\n| 1 | 2 |\n";
    assert_eq!(convert(md), "||A||B||\n|1|2|\n\n");
}

#[test]
fn test_blockquote() {
    assert_eq!(convert("> quoted\n"), "{quote}\nquoted\n\n{quote}\n");
}

#[test]
fn test_html_comments_are_stripped() {
    assert_eq!(convert("<!-- hidden -->\n\nText\n"), "\nText\n\n");
    assert_eq!(
        convert("<div><!-- note -->kept</div>\n"),
        "<div>kept</div>\n"
    );
}

#[test]
fn test_safe_mode_replaces_raw_html() {
    let options = JiraOptions {
        safe: true,
        ..JiraOptions::default()
    };
    assert_eq!(
        markdown_to_jira("<div>x</div>\n\ntext <b>bold</b>\n", &options),
        "<!-- raw HTML omitted -->\ntext <!-- raw HTML omitted -->bold<!-- raw HTML omitted -->\n\n"
    );
}

#[test]
fn test_text_is_not_escaped() {
    assert_eq!(convert("a {b} | c\n"), "a {b} | c\n\n");
}

#[test]
fn test_max_length_truncates() {
    let options = JiraOptions {
        max_length: 5,
        ..JiraOptions::default()
    };
    assert_eq!(
        markdown_to_jira("# Heading\n", &options),
        "h1. H\n\nNotice: The entered text is too long. It exceeds the allowed limit of 5 characters."
    );
}

#[test]
fn test_registry_pipeline_with_options() {
    let registry = FormatRegistry::default();
    let doc = registry.parse("<b>x</b>\n", "markdown").unwrap();

    let mut options = HashMap::new();
    options.insert("safe".to_string(), "true".to_string());
    let output = registry
        .serialize_with_options(&doc, "jira", &options)
        .unwrap();

    assert!(!output.contains("<b>"));
    assert_eq!(output.matches("<!-- raw HTML omitted -->").count(), 2);
}

#[test]
fn test_format_object_matches_convenience_function() {
    let md = "# A\n\n- b\n";
    let doc = registry_parse(md);
    assert_eq!(JiraFormat::default().serialize(&doc).unwrap(), convert(md));
}

fn registry_parse(md: &str) -> jiramark_babel::Node {
    FormatRegistry::default().parse(md, "markdown").unwrap()
}

#[test]
fn test_kitchensink() {
    let md = r#"# Release notes

Intro with *emphasis*, **strong**, ~~old~~ and `code`.

## Changes

1. First
2. Second
   - detail

> Quoted text

```bash
make install
```

| Name | Value |
|------|-------|
| a    | 1     |

See [the docs](https://example.com/docs).
"#;

    let jira = convert(md);
    assert_snapshot!(jira.trim_end(), @r"
    h1. Release notes
    Intro with _emphasis_, *strong*, -old- and {{code}}.

    h2. Changes
    * First
    * Second
    ** detail

    {quote}
    Quoted text

    {quote}
    {code:bash}
    make install
    {code}
    ||Name||Value||
    |a|1|

    See [the docs|https://example.com/docs].
    ");
}
