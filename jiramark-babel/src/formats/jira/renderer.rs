//! Jira wiki markup rendering (Node tree → Jira markup)
//!
//! A depth-first walk over the tree. Each node kind maps to a fixed piece of
//! markup; the only state that depends on where a node sits is carried in a
//! [`Context`] value that is copied down the recursion. Lists and table headers
//! hand a modified copy to their children, so leaving them needs no cleanup.

use super::buffer::BlockBuffer;
use super::language;
use super::sanitize::HtmlSanitizer;
use super::JiraOptions;
use crate::ast::{Node, NodeKind};
use tracing::{debug, trace};

/// Position-dependent rendering state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Context {
    /// Paragraphs render inline instead of as separated blocks.
    tight: bool,
    /// Nesting depth of the enclosing lists, 0 outside any list.
    list_level: usize,
    /// Items use `#` markers instead of `*`.
    list_ordered: bool,
    /// Cells are header cells (`||`).
    table_header: bool,
}

/// Renders document trees as Jira wiki markup.
///
/// Holds only configuration; every [`JiraRenderer::render`] call starts from a
/// fresh context and buffer.
pub struct JiraRenderer {
    sanitizer: HtmlSanitizer,
}

impl JiraRenderer {
    pub fn new(options: &JiraOptions) -> Self {
        Self::with_sanitizer(HtmlSanitizer::new(options.safe))
    }

    pub fn with_sanitizer(sanitizer: HtmlSanitizer) -> Self {
        Self { sanitizer }
    }

    /// Renders `root` and everything below it.
    ///
    /// Any node can be the root; a [`NodeKind::Document`] just renders its
    /// children.
    pub fn render(&self, root: &Node) -> String {
        let mut out = BlockBuffer::new();
        self.render_node(root, Context::default(), true, &mut out);
        debug!(
            nodes = root.count(),
            bytes = out.len(),
            safe = self.sanitizer.is_safe(),
            "rendered jira markup"
        );
        out.into_string()
    }

    fn render_children(&self, node: &Node, ctx: Context, out: &mut BlockBuffer) {
        let count = node.children.len();
        for (index, child) in node.children.iter().enumerate() {
            self.render_node(child, ctx, index + 1 == count, out);
        }
    }

    fn wrap(&self, node: &Node, ctx: Context, delimiter: &str, out: &mut BlockBuffer) {
        out.push(delimiter);
        self.render_children(node, ctx, out);
        out.push(delimiter);
    }

    fn render_node(&self, node: &Node, ctx: Context, is_last: bool, out: &mut BlockBuffer) {
        match &node.kind {
            NodeKind::Document => self.render_children(node, ctx, out),

            NodeKind::Text { content } => out.push(content),

            NodeKind::Paragraph => {
                if ctx.tight {
                    self.render_children(node, ctx, out);
                } else {
                    out.block(|out| self.render_children(node, ctx, out));
                    out.blocksep();
                }
            }

            NodeKind::Header { level } => out.block(|out| {
                out.push(&format!("h{level}. "));
                self.render_children(node, ctx, out);
            }),

            NodeKind::Blockquote => out.block(|out| {
                out.container("{quote}\n", "{quote}", |out| {
                    self.render_children(node, ctx, out)
                })
            }),

            NodeKind::HorizontalRule => out.block(|out| out.push("----")),

            NodeKind::LineBreak => out.push("\\\n"),

            NodeKind::SoftBreak => out.push("\n"),

            NodeKind::Emphasis => self.wrap(node, ctx, "_", out),

            NodeKind::Strong => self.wrap(node, ctx, "*", out),

            NodeKind::Strikethrough => self.wrap(node, ctx, "-", out),

            NodeKind::Link { url, .. } => {
                out.push("[");
                self.render_children(node, ctx, out);
                if !node.children.is_empty() {
                    out.push("|");
                }
                out.push(url);
                out.push("]");
            }

            NodeKind::Image { url, .. } => {
                out.push("!");
                out.push(url);
                out.push("!");
            }

            NodeKind::InlineCode { content } => {
                out.push("{{");
                out.push(content);
                out.push("}}");
            }

            NodeKind::CodeBlock {
                fence_info,
                content,
            } => {
                let language = language::code_language(fence_info.as_deref());
                out.block(|out| {
                    out.push("{code:");
                    out.push(language);
                    out.push("}");
                    out.block(|out| out.push(content));
                    out.push("{code}");
                });
            }

            NodeKind::List { list_type, tight } => {
                let inner = Context {
                    // Loose lists are rendered tight as well.
                    tight: true,
                    list_level: ctx.list_level + 1,
                    // Jira breaks `#` lists as soon as they nest, so ordered
                    // lists get `*` markers too.
                    list_ordered: false,
                    ..ctx
                };
                trace!(
                    declared = ?list_type,
                    source_tight = tight,
                    level = inner.list_level,
                    "rendering list"
                );
                out.block(|out| self.render_children(node, inner, out));
                if ctx.list_level == 0 {
                    out.blocksep();
                }
            }

            NodeKind::ListItem => {
                let marker = if ctx.list_ordered { "#" } else { "*" };
                let prefix = format!("{} ", marker.repeat(ctx.list_level));
                out.block(|out| {
                    out.container(&prefix, "", |out| self.render_children(node, ctx, out))
                });
            }

            NodeKind::Table => {
                out.block(|out| self.render_children(node, ctx, out));
                out.blocksep();
            }

            NodeKind::TableHeader => {
                let inner = Context {
                    table_header: true,
                    ..ctx
                };
                out.block(|out| self.render_children(node, inner, out));
            }

            NodeKind::TableRow => out.block(|out| self.render_children(node, ctx, out)),

            NodeKind::TableCell => {
                let delimiter = if ctx.table_header { "||" } else { "|" };
                out.push(delimiter);
                self.render_children(node, ctx, out);
                if is_last {
                    out.push(delimiter);
                }
            }

            NodeKind::HtmlBlock { content } => {
                out.block(|out| out.push(&self.sanitizer.sanitize(content)))
            }

            NodeKind::InlineHtml { content } => out.push(&self.sanitizer.sanitize(content)),

            // Footnotes have no Jira rendering; they are dropped with their content.
            NodeKind::FootnoteReference { label } | NodeKind::FootnoteDefinition { label } => {
                trace!(kind = node.kind_name(), label = %label, "skipping footnote");
            }
        }
    }
}

impl Default for JiraRenderer {
    fn default() -> Self {
        Self::new(&JiraOptions::default())
    }
}
