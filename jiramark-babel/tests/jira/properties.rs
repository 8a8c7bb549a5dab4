//! Property tests for the Jira renderer

use jiramark_babel::formats::jira::renderer::JiraRenderer;
use jiramark_babel::formats::jira::sanitize::strip_comments;
use jiramark_babel::{markdown_to_jira, JiraOptions, ListType, Node, NodeKind};
use proptest::prelude::*;

fn render(node: &Node) -> String {
    JiraRenderer::default().render(node)
}

/// Nests one list per entry of `ordered`, each item holding a label and the
/// next list down.
fn nested_lists(ordered: &[bool], depth: usize) -> Node {
    let list_type = if ordered[0] {
        ListType::Ordered
    } else {
        ListType::Unordered
    };
    let mut item = vec![Node::paragraph(vec![Node::text(format!("level{depth}"))])];
    if ordered.len() > 1 {
        item.push(nested_lists(&ordered[1..], depth + 1));
    }
    Node::list(list_type, vec![Node::list_item(item)])
}

proptest! {
    #[test]
    fn comment_stripping_is_idempotent(html in "[a-z<>!\\- ]{0,60}") {
        let once = strip_comments(&html).into_owned();
        let twice = strip_comments(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn text_is_emitted_verbatim(content in "\\PC*") {
        prop_assert_eq!(render(&Node::text(content.clone())), content);
    }

    #[test]
    fn list_markers_follow_depth_never_hash(ordered in prop::collection::vec(any::<bool>(), 1..6)) {
        let output = render(&nested_lists(&ordered, 1));

        let mut expected = String::new();
        for depth in 1..=ordered.len() {
            expected.push_str(&"*".repeat(depth));
            expected.push_str(&format!(" level{depth}\n"));
        }
        expected.push('\n');

        prop_assert!(!output.contains('#'));
        prop_assert_eq!(output, expected);
    }

    #[test]
    fn footnotes_contribute_nothing(text in "[a-z ]{1,20}", label in "[a-z0-9]{1,5}") {
        let plain = Node::paragraph(vec![Node::text(text.clone())]);
        let with_footnote = Node::document(vec![
            Node::paragraph(vec![
                Node::text(text),
                Node::leaf(NodeKind::FootnoteReference { label: label.clone() }),
            ]),
            Node::new(
                NodeKind::FootnoteDefinition { label },
                vec![Node::paragraph(vec![Node::text("note")])],
            ),
        ]);
        prop_assert_eq!(render(&with_footnote), render(&plain));
    }

    #[test]
    fn truncated_output_never_exceeds_limit(md in "[a-zé# \n]{0,80}", limit in 1usize..40) {
        let options = JiraOptions { max_length: limit, ..JiraOptions::default() };
        let full = markdown_to_jira(&md, &JiraOptions::default());
        let output = markdown_to_jira(&md, &options);

        if full.chars().count() > limit {
            let notice = output.find("\n\nNotice:");
            prop_assert!(notice.is_some());
            prop_assert_eq!(output[..notice.unwrap_or(0)].chars().count(), limit);
        } else {
            prop_assert_eq!(output, full);
        }
    }
}
