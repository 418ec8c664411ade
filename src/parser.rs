use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, PLAIN_TEXT_LANGUAGE};

const FENCE: &str = "```";

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern"));
static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*-]\s+(.+)$").expect("unordered item pattern"));
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+)$").expect("ordered item pattern"));

/// Parse message text into a list of blocks, top to bottom.
///
/// Every line is classified on its own, in priority order: code fence,
/// heading, bullet item, numbered item, blank, paragraph. Never fails.
pub fn parse(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut lines = text.split('\n');

    while let Some(line) = lines.next() {
        let trimmed = line.trim();

        if let Some(tag) = trimmed.strip_prefix(FENCE) {
            blocks.push(parse_code_block(tag, &mut lines));
        } else if let Some(caps) = HEADING.captures(trimmed) {
            blocks.push(Block::Heading {
                level: caps[1].len() as u8,
                text: caps[2].to_string(),
            });
        } else if let Some(caps) = UNORDERED_ITEM.captures(trimmed) {
            blocks.push(Block::ListItem {
                ordered: false,
                text: caps[1].to_string(),
            });
        } else if let Some(caps) = ORDERED_ITEM.captures(trimmed) {
            blocks.push(Block::ListItem {
                ordered: true,
                text: caps[1].to_string(),
            });
        } else if trimmed.is_empty() {
            continue;
        } else {
            blocks.push(Block::Paragraph {
                text: line.to_string(),
            });
        }
    }

    tracing::trace!(blocks = blocks.len(), "parsed message blocks");
    blocks
}

/// Collect code lines verbatim up to the closing fence, or to end of input
/// when the fence is never closed.
fn parse_code_block<'a>(tag: &str, lines: &mut impl Iterator<Item = &'a str>) -> Block {
    let tag = tag.trim();
    let language = if tag.is_empty() {
        PLAIN_TEXT_LANGUAGE.to_string()
    } else {
        tag.to_string()
    };

    let mut body = Vec::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim().starts_with(FENCE) {
            closed = true;
            break;
        }
        body.push(line);
    }
    if !closed {
        tracing::debug!(%language, "unterminated code fence runs to end of message");
    }

    Block::CodeBlock {
        language,
        code: body.join("\n"),
    }
}
