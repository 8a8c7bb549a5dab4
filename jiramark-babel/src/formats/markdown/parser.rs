//! Markdown parsing (Markdown → Node tree)
//!
//! Pipeline: Markdown string → Comrak AST → owned Node tree

use crate::ast::{ListType, Node, NodeKind};
use comrak::nodes::{AstNode, ListType as ComrakListType, NodeValue};
use comrak::{parse_document, Arena, Options};
use tracing::debug;

/// Parse a Markdown string into a document tree
pub fn parse_from_markdown(source: &str) -> Node {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    let children = collect_children(root);
    let doc = Node::document(children);
    debug!(
        bytes = source.len(),
        nodes = doc.count(),
        "parsed markdown document"
    );
    doc
}

/// Strikethrough and tables on top of CommonMark, nothing else.
fn default_comrak_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options
}

fn collect_children<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    let mut children = Vec::new();
    for child in node.children() {
        children.extend(convert_node(child));
    }
    children
}

/// Convert one comrak node. Kinds without a counterpart are unwrapped, so this
/// returns the converted node or the spliced-in children of the dropped one.
fn convert_node<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    let kind = match &node.data.borrow().value {
        NodeValue::Document => NodeKind::Document,
        NodeValue::Text(text) => NodeKind::Text {
            content: text.clone(),
        },
        NodeValue::Paragraph => NodeKind::Paragraph,
        NodeValue::Heading(heading) => NodeKind::Header {
            level: heading.level,
        },
        NodeValue::BlockQuote => NodeKind::Blockquote,
        NodeValue::ThematicBreak => NodeKind::HorizontalRule,
        NodeValue::LineBreak => NodeKind::LineBreak,
        NodeValue::SoftBreak => NodeKind::SoftBreak,
        NodeValue::Emph => NodeKind::Emphasis,
        NodeValue::Strong => NodeKind::Strong,
        NodeValue::Strikethrough => NodeKind::Strikethrough,
        NodeValue::Link(link) => NodeKind::Link {
            url: link.url.clone(),
            title: link.title.clone(),
        },
        NodeValue::Image(link) => NodeKind::Image {
            url: link.url.clone(),
            title: link.title.clone(),
        },
        NodeValue::Code(code) => NodeKind::InlineCode {
            content: code.literal.clone(),
        },
        NodeValue::CodeBlock(code_block) => NodeKind::CodeBlock {
            fence_info: if code_block.info.is_empty() {
                None
            } else {
                Some(code_block.info.clone())
            },
            content: code_block.literal.clone(),
        },
        NodeValue::List(list) => NodeKind::List {
            list_type: match list.list_type {
                ComrakListType::Ordered => ListType::Ordered,
                ComrakListType::Bullet => ListType::Unordered,
            },
            tight: list.tight,
        },
        NodeValue::Item(_) => NodeKind::ListItem,
        NodeValue::Table(_) => NodeKind::Table,
        NodeValue::TableRow(true) => NodeKind::TableHeader,
        NodeValue::TableRow(false) => NodeKind::TableRow,
        NodeValue::TableCell => NodeKind::TableCell,
        NodeValue::HtmlBlock(html) => NodeKind::HtmlBlock {
            content: html.literal.clone(),
        },
        NodeValue::HtmlInline(html) => NodeKind::InlineHtml {
            content: html.clone(),
        },
        NodeValue::FootnoteReference(reference) => NodeKind::FootnoteReference {
            label: reference.name.clone(),
        },
        NodeValue::FootnoteDefinition(definition) => NodeKind::FootnoteDefinition {
            label: definition.name.clone(),
        },
        NodeValue::FrontMatter(_) => return Vec::new(),
        other => {
            debug!(node = ?other, "unwrapping markdown node without jira counterpart");
            return collect_children(node);
        }
    };

    vec![Node::new(kind, collect_children(node))]
}
