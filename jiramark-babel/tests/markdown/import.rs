//! Import tests for the Markdown format (Markdown → Node tree)

use jiramark_babel::format::Format;
use jiramark_babel::formats::markdown::MarkdownFormat;
use jiramark_babel::{ListType, Node, NodeKind};
use serde_json::json;

fn parse(md: &str) -> Node {
    MarkdownFormat.parse(md).unwrap()
}

fn kinds(node: &Node) -> Vec<&'static str> {
    let mut names = vec![node.kind_name()];
    for child in &node.children {
        names.extend(kinds(child));
    }
    names
}

#[test]
fn test_tree_serializes_as_tagged_json() {
    let doc = parse("# Hi\n");
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "document",
            "children": [{
                "type": "header",
                "level": 1,
                "children": [{ "type": "text", "content": "Hi" }]
            }]
        })
    );
}

#[test]
fn test_code_block_json_fields() {
    let doc = parse("```sh\nls\n```\n");
    let value = serde_json::to_value(&doc.children[0]).unwrap();
    assert_eq!(
        value,
        json!({ "type": "code_block", "fence_info": "sh", "content": "ls\n" })
    );
}

#[test]
fn test_nested_lists_keep_declared_type() {
    let doc = parse("1. a\n   - b\n");
    let outer = &doc.children[0];
    assert_eq!(
        outer.kind,
        NodeKind::List {
            list_type: ListType::Ordered,
            tight: true
        }
    );
    let inner = &outer.children[0].children[1];
    assert!(matches!(
        inner.kind,
        NodeKind::List {
            list_type: ListType::Unordered,
            ..
        }
    ));
}

#[test]
fn test_footnote_syntax_stays_text() {
    let doc = parse("see[^1]\n\n[^1]: note\n");
    assert!(!kinds(&doc)
        .iter()
        .any(|kind| kind.starts_with("footnote")));
}

#[test]
fn test_task_list_syntax_stays_text() {
    let doc = parse("- [ ] todo\n");
    let item = &doc.children[0].children[0];
    let para = &item.children[0];
    let text: String = para
        .children
        .iter()
        .filter_map(|node| match &node.kind {
            NodeKind::Text { content } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(text, "[ ] todo");
}

#[test]
fn test_kitchensink_node_kinds() {
    let md = "# T\n\n> q\n\n---\n\n- a\n\n| x |\n|---|\n| y |\n\n<p>raw</p>\n";
    assert_eq!(
        kinds(&parse(md)),
        vec![
            "document",
            "header",
            "text",
            "blockquote",
            "paragraph",
            "text",
            "hrule",
            "list",
            "list_item",
            "paragraph",
            "text",
            "table",
            "table_header",
            "table_cell",
            "text",
            "table_row",
            "table_cell",
            "text",
            "html",
        ]
    );
}
