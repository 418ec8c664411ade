//! Chat-message Markdown rendering.
//!
//! Messages are split into blocks line by line, paragraph and list text is
//! parsed for inline emphasis and code, and the result is rendered to HTML
//! with highlighted code blocks. Every input renders; malformed Markdown
//! degrades to literal text.

mod block;
mod config;
mod copy;
mod error;
mod highlight;
mod inline;
mod node;
mod parser;
mod render;

pub use block::{Block, PLAIN_TEXT_LANGUAGE, Span};
pub use config::{CodeConfig, Config, HeadingConfig, HighlightConfig};
pub use copy::{Clipboard, CopyButton};
pub use error::{ClipboardError, Error};
pub use highlight::{Highlighter, escape_html};
pub use inline::parse_inline;
pub use node::{Element, Node};
pub use render::{CodeBlockHandle, RenderedMessage, Renderer, spans_to_nodes};

/// Parse message text into a vector of blocks.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    parser::parse(text)
}

/// Render a message using the bundled config.
pub fn render_message(content: &str) -> RenderedMessage {
    render_message_with_config(content, &Config::compiled_default())
}

/// Render a message with a custom config.
pub fn render_message_with_config(content: &str, config: &Config) -> RenderedMessage {
    Renderer::new(config).render(content)
}

/// Convert a message to HTML using the bundled config.
pub fn markdown_to_html(content: &str) -> String {
    render_message(content).to_html()
}

/// Convert a message to HTML with a custom config.
pub fn markdown_to_html_with_config(content: &str, config: &Config) -> String {
    render_message_with_config(content, config).to_html()
}
