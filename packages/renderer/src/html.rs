//! HTML output: virtual document → markup string.

use crate::layout::PRESET_STYLESHEET;
use blocksmith_common::vdom::{VDocument, VNode};

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Emit a full standalone document (doctype, head with the preset
    /// stylesheet, body). When false, only the nodes themselves.
    pub standalone: bool,
    /// Document title (standalone only)
    pub title: String,
    /// Pretty print
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: true,
            title: "Untitled page".to_string(),
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: HtmlOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            for _ in 0..self.depth {
                self.buffer.push_str(&self.options.indent.clone());
            }
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Elements that never take a closing tag.
fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Compile a composed document to HTML.
pub fn compile_document(document: &VDocument, options: HtmlOptions) -> String {
    let mut ctx = Context::new(options);

    if ctx.options.standalone {
        ctx.add_line("<!DOCTYPE html>");
        ctx.add_line("<html>");
        ctx.indent();
        compile_head(&mut ctx);
        ctx.add_line("<body>");
        ctx.indent();
    }

    for node in &document.nodes {
        write_node(node, &mut ctx);
    }

    if ctx.options.standalone {
        ctx.dedent();
        ctx.add_line("</body>");
        ctx.dedent();
        ctx.add_line("</html>");
    }

    ctx.get_output()
}

/// Compile a single node to HTML (no document shell).
pub fn compile_node(node: &VNode, options: HtmlOptions) -> String {
    let mut ctx = Context::new(HtmlOptions {
        standalone: false,
        ..options
    });
    write_node(node, &mut ctx);
    ctx.get_output()
}

fn compile_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = format!("<title>{}</title>", escape_html(&ctx.options.title));
    ctx.add_line(&title);
    ctx.add_line("<style>");
    ctx.indent();
    for line in PRESET_STYLESHEET.lines() {
        ctx.add_line(line);
    }
    ctx.dedent();
    ctx.add_line("</style>");
    ctx.dedent();
    ctx.add_line("</head>");
}

fn write_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Text { content } => {
            ctx.add_line(&escape_html(content));
        }
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => {
            let mut open = format!("<{}", tag);
            for (name, value) in attributes {
                open.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
            }
            if !styles.is_empty() {
                let inline = styles
                    .iter()
                    .map(|(name, value)| format!("{}: {}", name, value))
                    .collect::<Vec<_>>()
                    .join("; ");
                open.push_str(&format!(" style=\"{}\"", escape_html(&inline)));
            }
            open.push('>');

            if is_void_tag(tag) {
                ctx.add_line(&open);
                return;
            }

            if children.is_empty() {
                ctx.add_line(&format!("{}</{}>", open, tag));
                return;
            }

            ctx.add_line(&open);
            ctx.indent();
            for child in children {
                write_node(child, ctx);
            }
            ctx.dedent();
            ctx.add_line(&format!("</{}>", tag));
        }
    }
}
