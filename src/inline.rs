//! Inline parsing for bold, italic and code spans.

use crate::block::Span;

/// Parse paragraph or list-item text into inline spans.
///
/// A single left-to-right scan. Inline code wins over emphasis, bold over
/// italic. Delimiters without a valid partner are kept as plain text, so
/// any input produces some sequence of spans.
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while let Some(c) = text[i..].chars().next() {
        let rest = &text[i..];

        if c == '`' {
            if let Some(end) = rest[1..].find('`') {
                flush(&mut plain, &mut spans);
                spans.push(Span::code(&rest[1..1 + end]));
                i += end + 2;
                continue;
            }
        } else if rest.starts_with("**") {
            if let Some(end) = rest[2..].find("**") {
                let content = &rest[2..2 + end];
                if !content.trim().is_empty() {
                    flush(&mut plain, &mut spans);
                    spans.push(Span::Bold {
                        content: content.to_string(),
                        children: parse_inline(content),
                    });
                    i += end + 4;
                    continue;
                }
            }
        } else if c == '*' {
            if let Some(end) = rest[1..].find('*') {
                let content = &rest[1..1 + end];
                if is_italic_content(content) {
                    flush(&mut plain, &mut spans);
                    spans.push(Span::Italic {
                        content: content.to_string(),
                        children: parse_inline(content),
                    });
                    i += end + 2;
                    continue;
                }
            }
        }

        plain.push(c);
        i += c.len_utf8();
    }

    flush(&mut plain, &mut spans);
    spans
}

/// Italic content must be non-blank and hug both delimiters.
fn is_italic_content(content: &str) -> bool {
    let starts_tight = content.chars().next().is_some_and(|c| !c.is_whitespace());
    let ends_tight = content.chars().next_back().is_some_and(|c| !c.is_whitespace());
    starts_tight && ends_tight && !content.trim().is_empty()
}

fn flush(plain: &mut String, spans: &mut Vec<Span>) {
    if !plain.is_empty() {
        spans.push(Span::text(std::mem::take(plain)));
    }
}

#[cfg(test)]
mod tests {
    use super::parse_inline;
    use crate::block::Span;

    fn italic(content: &str, children: Vec<Span>) -> Span {
        Span::Italic {
            content: content.to_string(),
            children,
        }
    }

    fn bold(content: &str, children: Vec<Span>) -> Span {
        Span::Bold {
            content: content.to_string(),
            children,
        }
    }

    #[test]
    fn plain_text_is_one_span() {
        let input = "Nothing special here.";
        assert_eq!(parse_inline(input), vec![Span::text(input)]);
    }

    #[test]
    fn empty_input_has_no_spans() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn nested_emphasis() {
        assert_eq!(
            parse_inline("**bold *and italic* text**"),
            vec![bold(
                "bold *and italic* text",
                vec![
                    Span::text("bold "),
                    italic("and italic", vec![Span::text("and italic")]),
                    Span::text(" text"),
                ]
            )]
        );
    }

    #[test]
    fn inline_code_is_not_parsed() {
        assert_eq!(parse_inline("`*not bold*`"), vec![Span::code("*not bold*")]);
    }

    #[test]
    fn code_inside_bold() {
        assert_eq!(
            parse_inline("**use `x`**"),
            vec![bold("use `x`", vec![Span::text("use "), Span::code("x")])]
        );
    }

    #[test]
    fn unmatched_backtick_is_text() {
        assert_eq!(parse_inline("a ` b"), vec![Span::text("a ` b")]);
    }

    #[test]
    fn adjacent_backticks_make_empty_code() {
        assert_eq!(
            parse_inline("x``y"),
            vec![Span::text("x"), Span::code(""), Span::text("y")]
        );
    }

    #[test]
    fn empty_bold_degrades_to_text() {
        assert_eq!(parse_inline("** **"), vec![Span::text("** **")]);
        assert_eq!(parse_inline("****"), vec![Span::text("****")]);
    }

    #[test]
    fn unmatched_bold_is_text() {
        assert_eq!(parse_inline("**open"), vec![Span::text("**open")]);
    }

    #[test]
    fn italic_needs_tight_delimiters() {
        assert_eq!(parse_inline("a * b * c"), vec![Span::text("a * b * c")]);
        assert_eq!(parse_inline("*a *"), vec![Span::text("*a *")]);
        assert_eq!(parse_inline("* a*"), vec![Span::text("* a*")]);
    }

    #[test]
    fn stray_asterisk_stays_literal() {
        assert_eq!(parse_inline("2 * 3 = 6"), vec![Span::text("2 * 3 = 6")]);
    }

    #[test]
    fn text_around_spans_is_preserved() {
        assert_eq!(
            parse_inline("say *hi* and **bye** with `code`!"),
            vec![
                Span::text("say "),
                italic("hi", vec![Span::text("hi")]),
                Span::text(" and "),
                bold("bye", vec![Span::text("bye")]),
                Span::text(" with "),
                Span::code("code"),
                Span::text("!"),
            ]
        );
    }

    #[test]
    fn multibyte_text_is_kept_intact() {
        assert_eq!(
            parse_inline("héllo *wörld* ✓"),
            vec![
                Span::text("héllo "),
                italic("wörld", vec![Span::text("wörld")]),
                Span::text(" ✓"),
            ]
        );
    }

    #[test]
    fn parsing_is_idempotent() {
        let input = "**a *b* `c`** *d* ` e";
        assert_eq!(parse_inline(input), parse_inline(input));
    }
}
