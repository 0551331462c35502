//! Terminal syntax highlighting for the annotated source.

use anyhow::Result;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};

/// Highlight `code` as JavaScript with 24-bit ANSI escapes.
///
/// Fragments the grammar cannot place (markers land mid-token) pass
/// through unstyled instead of aborting the render.
pub(crate) fn highlight_js(code: &str) -> Result<String> {
    let syntaxes = SyntaxSet::load_defaults_newlines();
    let themes = ThemeSet::load_defaults();
    let syntax = syntaxes
        .find_syntax_by_token("js")
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text());
    let mut highlighter = HighlightLines::new(syntax, &themes.themes["base16-ocean.dark"]);

    let mut out = String::with_capacity(code.len());
    for line in LinesWithEndings::from(code) {
        let regions = highlighter.highlight_line(line, &syntaxes)?;
        out.push_str(&as_24_bit_terminal_escaped(&regions, false));
    }
    out.push_str("\x1b[0m");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::highlight_js;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for d in chars.by_ref() {
                    if d == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_highlight_emits_ansi_and_keeps_text() {
        let out = highlight_js("let x = 1;\n").unwrap();
        assert!(out.contains('\u{1b}'));
        assert!(out.ends_with("\x1b[0m"));
        assert_eq!(strip_ansi(&out), "let x = 1;\n");
    }

    #[test]
    fn test_highlight_tolerates_markers_mid_token() {
        let out = highlight_js("fo/*c*/o();\n").unwrap();
        assert_eq!(strip_ansi(&out), "fo/*c*/o();\n");
    }
}
