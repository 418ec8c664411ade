use crate::block::{Block, Span};
use crate::config::Config;
use crate::highlight::Highlighter;
use crate::inline::parse_inline;
use crate::node::{Element, Node};
use crate::parser;

/// Literal code of one rendered code block, addressed by its `data-copy-id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockHandle {
    pub id: usize,
    pub language: String,
    pub code: String,
}

/// The presentation tree for one message plus its copyable code blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedMessage {
    pub nodes: Vec<Node>,
    pub code_blocks: Vec<CodeBlockHandle>,
}

impl RenderedMessage {
    pub fn to_html(&self) -> String {
        let parts: Vec<String> = self.nodes.iter().map(Node::to_html).collect();
        parts.join("\n")
    }

    /// The original, unhighlighted code behind a copy button.
    pub fn copy_text(&self, id: usize) -> Option<&str> {
        self.code_blocks
            .iter()
            .find(|block| block.id == id)
            .map(|block| block.code.as_str())
    }
}

/// Consecutive list items of one kind, waiting to become a single list.
struct ListGroup {
    ordered: bool,
    items: Vec<Node>,
}

impl ListGroup {
    fn into_node(self) -> Node {
        let tag = if self.ordered { "ol" } else { "ul" };
        Element::new(tag).children(self.items).into()
    }
}

pub struct Renderer<'a> {
    config: &'a Config,
    highlighter: Highlighter,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            highlighter: Highlighter::new(&config.highlight.theme),
        }
    }

    /// Parse and render a whole message. Each call starts from scratch.
    pub fn render(&self, content: &str) -> RenderedMessage {
        let blocks = parser::parse(content);
        self.render_blocks(&blocks)
    }

    pub fn render_blocks(&self, blocks: &[Block]) -> RenderedMessage {
        let mut message = RenderedMessage::default();
        let mut group: Option<ListGroup> = None;

        for block in blocks {
            match block {
                Block::ListItem { ordered, text } => {
                    let continues = group.as_ref().is_some_and(|g| g.ordered == *ordered);
                    if !continues {
                        flush_group(&mut group, &mut message.nodes);
                        group = Some(ListGroup {
                            ordered: *ordered,
                            items: Vec::new(),
                        });
                    }
                    if let Some(g) = group.as_mut() {
                        let item = Element::new("li").children(spans_to_nodes(&parse_inline(text)));
                        g.items.push(item.into());
                    }
                }
                Block::Heading { level, text } => {
                    flush_group(&mut group, &mut message.nodes);
                    message.nodes.push(self.heading(*level, text));
                }
                Block::Paragraph { text } => {
                    flush_group(&mut group, &mut message.nodes);
                    let paragraph = Element::new("p").children(spans_to_nodes(&parse_inline(text)));
                    message.nodes.push(paragraph.into());
                }
                Block::CodeBlock { language, code } => {
                    flush_group(&mut group, &mut message.nodes);
                    let id = message.code_blocks.len();
                    message.nodes.push(self.code_block(id, language, code));
                    message.code_blocks.push(CodeBlockHandle {
                        id,
                        language: language.clone(),
                        code: code.clone(),
                    });
                }
            }
        }
        flush_group(&mut group, &mut message.nodes);

        tracing::debug!(
            blocks = blocks.len(),
            nodes = message.nodes.len(),
            code_blocks = message.code_blocks.len(),
            "rendered message"
        );
        message
    }

    fn heading(&self, level: u8, text: &str) -> Node {
        let tag = match level {
            1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        };
        let size = self.config.headings.size_for(level);
        Element::new(tag)
            .attr("style", format!("font-size: {size}"))
            .child(Node::text(text))
            .into()
    }

    fn code_block(&self, id: usize, language: &str, code: &str) -> Node {
        let mut header = Element::new("div").attr("class", "code-header");
        if self.config.code.show_language {
            header = header.child(
                Element::new("span")
                    .attr("class", "code-language")
                    .child(Node::text(language)),
            );
        }
        header = header.child(
            Element::new("button")
                .attr("type", "button")
                .attr("class", "copy-code")
                .attr("data-copy-id", id.to_string())
                .child(Node::text(self.config.code.copy_label.as_str())),
        );

        let body = Element::new("pre").child(
            Element::new("code")
                .attr("class", format!("language-{language}"))
                .child(Node::Markup(self.highlighter.highlight(code, language))),
        );

        Element::new("div")
            .attr("class", "code-block")
            .attr("data-copy-id", id.to_string())
            .child(header)
            .child(body)
            .into()
    }
}

fn flush_group(group: &mut Option<ListGroup>, nodes: &mut Vec<Node>) {
    if let Some(done) = group.take() {
        nodes.push(done.into_node());
    }
}

/// Map inline spans to nodes; emphasis renders its children recursively.
pub fn spans_to_nodes(spans: &[Span]) -> Vec<Node> {
    spans.iter().map(span_to_node).collect()
}

fn span_to_node(span: &Span) -> Node {
    match span {
        Span::Text { content } => Node::text(content.as_str()),
        Span::Bold { children, .. } => Element::new("strong").children(spans_to_nodes(children)).into(),
        Span::Italic { children, .. } => Element::new("em").children(spans_to_nodes(children)).into(),
        Span::Code { content } => Element::new("code").child(Node::text(content.as_str())).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(content: &str) -> RenderedMessage {
        let config = Config::default();
        Renderer::new(&config).render(content)
    }

    fn html(content: &str) -> String {
        render(content).to_html()
    }

    fn tags(message: &RenderedMessage) -> Vec<&'static str> {
        message
            .nodes
            .iter()
            .filter_map(|node| node.as_element().map(|e| e.tag))
            .collect()
    }

    #[test]
    fn empty_message_renders_nothing() {
        assert!(render("").nodes.is_empty());
        assert_eq!(html("  \n\n"), "");
    }

    #[test]
    fn heading() {
        assert_eq!(html("# Hello"), "<h1 style=\"font-size: 2em\">Hello</h1>");
        assert_eq!(
            html("### *Literal*"),
            "<h3 style=\"font-size: 1.25em\">*Literal*</h3>"
        );
    }

    #[test]
    fn paragraph_with_inline_formatting() {
        assert_eq!(
            html("a **b *c* d** `d<e>`"),
            "<p>a <strong>b <em>c</em> d</strong> <code>d&lt;e&gt;</code></p>"
        );
    }

    #[test]
    fn list_kind_change_splits_groups() {
        let message = render("- a\n- b\n1. c");
        assert_eq!(tags(&message), vec!["ul", "ol"]);
        assert_eq!(
            message.to_html(),
            "<ul><li>a</li><li>b</li></ul>\n<ol><li>c</li></ol>"
        );
    }

    #[test]
    fn paragraph_between_items_splits_groups() {
        let message = render("- a\ntext\n- b");
        assert_eq!(tags(&message), vec!["ul", "p", "ul"]);
    }

    #[test]
    fn blank_lines_do_not_split_groups() {
        let message = render("1. a\n\n2. b\n3. c");
        assert_eq!(tags(&message), vec!["ol"]);
        assert_eq!(message.nodes[0].as_element().unwrap().children.len(), 3);
    }

    #[test]
    fn list_items_get_inline_formatting() {
        assert_eq!(
            html("* **bold** item"),
            "<ul><li><strong>bold</strong> item</li></ul>"
        );
    }

    #[test]
    fn trailing_group_is_flushed() {
        let message = render("intro\n- a");
        assert_eq!(tags(&message), vec!["p", "ul"]);
    }

    #[test]
    fn unknown_language_code_block() {
        assert_eq!(
            html("```nope\n<tag> & stuff\n```"),
            "<div class=\"code-block\" data-copy-id=\"0\">\
             <div class=\"code-header\"><span class=\"code-language\">nope</span>\
             <button type=\"button\" class=\"copy-code\" data-copy-id=\"0\">Copy code</button></div>\
             <pre><code class=\"language-nope\">&lt;tag&gt; &amp; stuff</code></pre></div>"
        );
    }

    #[test]
    fn code_block_header_can_hide_language() {
        let mut config = Config::default();
        config.code.show_language = false;
        let out = Renderer::new(&config).render("```\nx\n```").to_html();
        assert!(!out.contains("code-language"));
        assert!(out.contains("language-text"));
    }

    #[test]
    fn copy_text_is_unhighlighted_source() {
        let message = render("```rust\nfn a() {}\n```\n\n```js\nlet b = 1 < 2;");
        assert_eq!(message.code_blocks.len(), 2);
        assert_eq!(message.copy_text(0), Some("fn a() {}"));
        assert_eq!(message.copy_text(1), Some("let b = 1 < 2;"));
        assert_eq!(message.copy_text(2), None);
        assert_eq!(message.code_blocks[1].language, "js");
    }

    #[test]
    fn code_block_closes_open_list() {
        let message = render("- a\n```\nb\n```\n- c");
        assert_eq!(tags(&message), vec!["ul", "div", "ul"]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let input = "# T\n- a\n1. b\n```rust\nlet x = 1;\n```\n**p** *q* `r`";
        assert_eq!(render(input), render(input));
    }

    #[test]
    fn malformed_markdown_still_renders() {
        let input = "**\n*\n```\n` ` `\n#\n- \n1.";
        let message = render(input);
        assert_eq!(message.code_blocks.len(), 1);
        assert_eq!(message.copy_text(0), Some("` ` `\n#\n- \n1."));
    }
}
