//! Owned document tree consumed by the renderers.
//!
//! The Markdown adapter builds this tree from comrak's arena AST so that
//! renderers work on plain owned values: every node owns its children, and
//! sibling position is just the index within the parent's `children`.

use serde::Serialize;

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// The closed set of node kinds produced by the Markdown adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    Text { content: String },
    Paragraph,
    Header { level: u8 },
    Blockquote,
    HorizontalRule,
    LineBreak,
    SoftBreak,
    Emphasis,
    Strong,
    Strikethrough,
    Link { url: String, title: String },
    Image { url: String, title: String },
    InlineCode { content: String },
    CodeBlock {
        fence_info: Option<String>,
        content: String,
    },
    List { list_type: ListType, tight: bool },
    ListItem,
    Table,
    TableHeader,
    TableRow,
    TableCell,
    HtmlBlock { content: String },
    InlineHtml { content: String },
    FootnoteReference { label: String },
    FootnoteDefinition { label: String },
}

/// Declared marker style of a list in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListType {
    Ordered,
    Unordered,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Node { kind, children }
    }

    /// A node without children.
    pub fn leaf(kind: NodeKind) -> Self {
        Node::new(kind, Vec::new())
    }

    pub fn document(children: Vec<Node>) -> Self {
        Node::new(NodeKind::Document, children)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::leaf(NodeKind::Text {
            content: content.into(),
        })
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::new(NodeKind::Paragraph, children)
    }

    pub fn header(level: u8, children: Vec<Node>) -> Self {
        Node::new(NodeKind::Header { level }, children)
    }

    pub fn list(list_type: ListType, items: Vec<Node>) -> Self {
        Node::new(
            NodeKind::List {
                list_type,
                tight: true,
            },
            items,
        )
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Node::new(NodeKind::ListItem, children)
    }

    pub fn code_block(fence_info: Option<&str>, content: impl Into<String>) -> Self {
        Node::leaf(NodeKind::CodeBlock {
            fence_info: fence_info.map(str::to_string),
            content: content.into(),
        })
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::new(
            NodeKind::Link {
                url: url.into(),
                title: String::new(),
            },
            children,
        )
    }

    /// Human readable kind name, used in logs and the `inspect` output.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Document => "document",
            NodeKind::Text { .. } => "text",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Header { .. } => "header",
            NodeKind::Blockquote => "blockquote",
            NodeKind::HorizontalRule => "hrule",
            NodeKind::LineBreak => "linebreak",
            NodeKind::SoftBreak => "softbreak",
            NodeKind::Emphasis => "emph",
            NodeKind::Strong => "strong",
            NodeKind::Strikethrough => "strikethrough",
            NodeKind::Link { .. } => "link",
            NodeKind::Image { .. } => "image",
            NodeKind::InlineCode { .. } => "code",
            NodeKind::CodeBlock { .. } => "code_block",
            NodeKind::List { .. } => "list",
            NodeKind::ListItem => "list_item",
            NodeKind::Table => "table",
            NodeKind::TableHeader => "table_header",
            NodeKind::TableRow => "table_row",
            NodeKind::TableCell => "table_cell",
            NodeKind::HtmlBlock { .. } => "html",
            NodeKind::InlineHtml { .. } => "inline_html",
            NodeKind::FootnoteReference { .. } => "footnote_reference",
            NodeKind::FootnoteDefinition { .. } => "footnote_definition",
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}
