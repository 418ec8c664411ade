use serde::Serialize;

/// Language tag given to fenced code blocks that carry no annotation.
pub const PLAIN_TEXT_LANGUAGE: &str = "text";

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Span {
    Text { content: String },
    Bold { content: String, children: Vec<Span> },
    Italic { content: String, children: Vec<Span> },
    Code { content: String },
}

impl Span {
    pub fn text(content: impl Into<String>) -> Self {
        Span::Text {
            content: content.into(),
        }
    }

    pub fn code(content: impl Into<String>) -> Self {
        Span::Code {
            content: content.into(),
        }
    }

    /// The raw inner text, without delimiters.
    pub fn content(&self) -> &str {
        match self {
            Span::Text { content }
            | Span::Bold { content, .. }
            | Span::Italic { content, .. }
            | Span::Code { content } => content,
        }
    }

    /// Recursively parsed children of an emphasis span; empty for text and code.
    pub fn children(&self) -> &[Span] {
        match self {
            Span::Bold { children, .. } | Span::Italic { children, .. } => children,
            Span::Text { .. } | Span::Code { .. } => &[],
        }
    }

    /// Visible text with all formatting removed.
    pub fn plain_text(&self) -> String {
        match self {
            Span::Text { content } | Span::Code { content } => content.clone(),
            Span::Bold { children, .. } | Span::Italic { children, .. } => {
                children.iter().map(Span::plain_text).collect()
            }
        }
    }
}

/// Block-level elements parsed from a chat message.
///
/// Marker characters (`#`, `- `, `1. `, fences) are never part of `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    Heading { level: u8, text: String },
    ListItem { ordered: bool, text: String },
    CodeBlock { language: String, code: String },
}

impl Block {
    /// Whether the block's text goes through the inline parser.
    pub fn has_inline_content(&self) -> bool {
        matches!(self, Block::Paragraph { .. } | Block::ListItem { .. })
    }

    /// The textual payload of the block.
    pub fn text(&self) -> &str {
        match self {
            Block::Paragraph { text } | Block::Heading { text, .. } | Block::ListItem { text, .. } => {
                text
            }
            Block::CodeBlock { code, .. } => code,
        }
    }
}
