use std::collections::HashMap;
use std::sync::LazyLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

// Syntax highlighting resources (loaded once)
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Fence tag -> syntect grammar name. Tags are matched exactly as written.
static GRAMMARS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    const TABLE: &[(&[&str], &str)] = &[
        (&["js", "javascript", "jsx", "mjs", "cjs"], "JavaScript"),
        // No dedicated TypeScript grammar ships with syntect's defaults.
        (&["ts", "typescript", "tsx"], "JavaScript"),
        (&["py", "python", "python3"], "Python"),
        (&["java"], "Java"),
        (&["c", "h"], "C"),
        (&["cpp", "c++", "cc", "cxx", "hpp"], "C++"),
        (&["cs", "csharp", "c#"], "C#"),
        (&["go", "golang"], "Go"),
        (&["rs", "rust"], "Rust"),
        (&["sql"], "SQL"),
        (&["json"], "JSON"),
        (&["yaml", "yml"], "YAML"),
        (
            &["sh", "bash", "shell", "zsh", "console"],
            "Bourne Again Shell (bash)",
        ),
        (&["css"], "CSS"),
        (&["html", "htm"], "HTML"),
        (&["xml", "markup", "svg"], "XML"),
        (&["rb", "ruby"], "Ruby"),
        (&["php"], "PHP"),
        (&["md", "markdown"], "Markdown"),
        (&["lua"], "Lua"),
        (&["diff", "patch"], "Diff"),
    ];

    TABLE
        .iter()
        .flat_map(|(tags, grammar)| tags.iter().map(move |tag| (*tag, *grammar)))
        .collect()
});

/// Turns code into inline-styled HTML for a given fence language.
///
/// Unknown languages, unknown themes and grammar errors all degrade to
/// escaped plain text.
pub struct Highlighter {
    theme: Option<&'static Theme>,
}

impl Highlighter {
    pub fn new(theme_name: &str) -> Self {
        let theme = THEME_SET.themes.get(theme_name);
        if theme.is_none() {
            tracing::warn!(theme = theme_name, "unknown highlight theme, code will be unstyled");
        }
        Self { theme }
    }

    /// Grammar name registered for a fence tag, if any.
    pub fn grammar_for(tag: &str) -> Option<&'static str> {
        GRAMMARS.get(tag).copied()
    }

    pub fn highlight(&self, code: &str, language: &str) -> String {
        let Some(theme) = self.theme else {
            return escape_html(code);
        };
        let Some(syntax) = find_syntax(language) else {
            tracing::debug!(language, "no grammar for language, rendering plain text");
            return escape_html(code);
        };

        match highlight_with(code, syntax, theme) {
            Ok(html) => html,
            Err(e) => {
                tracing::debug!(language, error = %e, "highlighting failed, rendering plain text");
                escape_html(code)
            }
        }
    }
}

fn find_syntax(language: &str) -> Option<&'static SyntaxReference> {
    let grammar = Highlighter::grammar_for(language)?;
    SYNTAX_SET.find_syntax_by_name(grammar)
}

fn highlight_with(
    code: &str,
    syntax: &SyntaxReference,
    theme: &Theme,
) -> Result<String, syntect::Error> {
    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut out = String::with_capacity(code.len() * 2);

    for line in LinesWithEndings::from(code) {
        let regions = highlighter.highlight_line(line, &SYNTAX_SET)?;
        out.push_str(&styled_line_to_highlighted_html(
            &regions,
            IncludeBackground::No,
        )?);
    }

    Ok(out)
}

/// Escape text for embedding in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
