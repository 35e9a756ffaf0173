//! Rewrites for Go literal forms the Rust tokenizer cannot read
//!
//! Backtick raw strings become Rust raw strings and floats written with a
//! leading dot gain a `0`. Every other piece of the source is copied
//! through unchanged, so line numbers in parse errors still match the
//! input.

use std::borrow::Cow;

use logos::Logos;

/// Coarse Go lexemes: just enough to find raw strings and leading-dot
/// floats without looking inside strings or comments.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    /// `` `raw text` ``
    #[regex(r"`[^`]*`", allow_greedy = true)]
    RawString,

    /// `.5`, `.25e3`
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?")]
    LeadingDotFloat,

    /// Any other number, so its own `.` is never read as a leading dot
    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9A-Za-z_]*)?([eEpP][+-][0-9_]+)?")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#, allow_greedy = true)]
    Str,

    #[regex(r"'([^'\\\n]|\\.)*'", allow_greedy = true)]
    Rune,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", allow_greedy = true)]
    BlockComment,

    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Ident,

    #[regex(r"\s+")]
    Whitespace,

    #[regex(r#"[^`"'\p{L}\p{N}_\s]"#)]
    Punct,
}

/// Rewrite `source` so that `proc-macro2` can tokenize it.
///
/// Text that is not a Go lexeme (an unterminated raw string, say) is kept
/// as written and left for the tokenizer to reject.
pub(super) fn normalize(source: &str) -> Cow<'_, str> {
    if !source.contains('`') && !source.contains('.') {
        return Cow::Borrowed(source);
    }

    let mut out = String::with_capacity(source.len());
    for (piece, span) in Piece::lexer(source).spanned() {
        let text = &source[span];
        match piece {
            Ok(Piece::RawString) => out.push_str(&raw_string(&text[1..text.len() - 1])),
            Ok(Piece::LeadingDotFloat) => {
                out.push('0');
                out.push_str(text);
            }
            _ => out.push_str(text),
        }
    }
    Cow::Owned(out)
}

/// A Rust raw string literal fenced with enough `#`s to hold `body`.
/// Carriage returns are dropped, as Go drops them from raw strings.
fn raw_string(body: &str) -> String {
    let body = body.replace('\r', "");
    let mut fence = String::from("#");
    while body.contains(&format!("\"{}", fence)) {
        fence.push('#');
    }
    format!("r{fence}\"{body}\"{fence}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_untouched_source_is_borrowed() {
        assert!(matches!(normalize("var a = 1 + 2"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_raw_string_becomes_rust_raw_string() {
        assert_eq!(normalize(r"var s = `a\nb`"), r##"var s = r#"a\nb"#"##);
    }

    #[test]
    fn test_raw_string_fence_grows_with_body() {
        assert_eq!(raw_string(r##"say "#hi""##), r###"r##"say "#hi""##"###);
    }

    #[test]
    fn test_raw_string_keeps_lines() {
        let out = normalize("var s = `one\ntwo`\nvar t = 1");
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_raw_string_drops_carriage_returns() {
        assert_eq!(normalize("`a\r\nb`"), "r#\"a\nb\"#");
    }

    #[test]
    fn test_leading_dot_float() {
        assert_eq!(normalize("var a, b = .5, -.25e1"), "var a, b = 0.5, -0.25e1");
    }

    #[test]
    fn test_numbers_and_selectors_are_unchanged() {
        let src = "var a, b, c = 1.5, 2., t.Seconds";
        assert_eq!(normalize(src), src);
    }

    #[test]
    fn test_strings_and_comments_are_unchanged() {
        let src = "var s = \"`.5`\" // `.5`\nvar r = '`' /* .5 */";
        assert_eq!(normalize(src), src);
    }

    #[test]
    fn test_unterminated_raw_string_is_kept() {
        assert_eq!(normalize("var s = `open"), "var s = `open");
    }
}
