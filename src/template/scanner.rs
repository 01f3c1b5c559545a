//! Scanner for the backtick template mini-language using logos

use logos::Logos;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    // Longest match wins, so a backslash directly before a backtick is
    // consumed as an escape and never as a lone backslash.
    #[token("\\`")]
    EscapedBacktick,

    #[token("`")]
    Backtick,

    #[token("\\")]
    Backslash,

    #[regex(r"[^`\\]+")]
    Text,
}

/// A piece of a scanned template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, emitted as-is
    Literal(String),
    /// A placeholder name captured between unescaped backticks
    Placeholder(String),
}

/// Lex a template into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

/// Scan a template into an ordered list of segments.
///
/// Unescaped backticks toggle between literal and placeholder mode; `\``
/// collapses to a literal backtick in either mode. A backtick at position 0
/// has no preceding character and is always a delimiter.
///
/// An unterminated placeholder (odd number of unescaped backticks) is
/// dropped: everything after the last opening backtick never reaches the
/// output. Compatibility quirk carried over from the legacy scanner.
pub fn scan(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut buf = String::new();
    let mut in_placeholder = false;

    for (token, span) in lex(template) {
        match token {
            Token::EscapedBacktick => buf.push('`'),
            Token::Backslash => buf.push('\\'),
            Token::Text => buf.push_str(&template[span]),
            Token::Backtick => {
                let finished = std::mem::take(&mut buf);
                if in_placeholder {
                    segments.push(Segment::Placeholder(finished));
                } else {
                    segments.push(Segment::Literal(finished));
                }
                in_placeholder = !in_placeholder;
            }
        }
    }

    if !in_placeholder {
        segments.push(Segment::Literal(buf));
    }

    segments
}
