//! Lexer for ferrite source text.
//!
//! A logos-derived raw lexer does the maximal-munch work; a post-processing
//! pass attaches positions, classifies number-like runs (integer bases and
//! the malformed forms the language reserves as errors), and appends exactly
//! one EOF token.
//!
//! ## Error handling
//!
//! The lexer never fails. Unrecognized bytes and malformed literals surface
//! as `Error` tokens and are rejected by the parser when it sees them.

use logos::Logos;

use crate::pos::{LineIndex, Pos};

/// Reserved words of the language.
pub const KEYWORDS: &[&str] = &[
    "let", "mut", "if", "else", "while", "return", "fn", "i32", "for", "in", "loop", "break",
    "continue",
];

/// Token classification, as exposed to the parser and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Keyword,
    Number,
    Op,
    Delim,
    Eof,
    Error,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Ident => "IDENT",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Number => "NUMBER",
            TokenKind::Op => "OP",
            TokenKind::Delim => "DELIM",
            TokenKind::Eof => "EOF",
            TokenKind::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// A token: kind, source slice, and position of its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub text: &'s str,
    pub pos: Pos,
}

impl Token<'_> {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({})@{}:{}",
            self.kind, self.text, self.pos.line, self.pos.col
        )
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\x0b\x0c]+")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
#[logos(skip r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
enum RawToken {
    #[token("let")]
    #[token("mut")]
    #[token("if")]
    #[token("else")]
    #[token("while")]
    #[token("return")]
    #[token("fn")]
    #[token("i32")]
    #[token("for")]
    #[token("in")]
    #[token("loop")]
    #[token("break")]
    #[token("continue")]
    Keyword,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // A maximal digit-led alphanumeric run; split_number_run decides which
    // parts are numbers, identifiers, or errors.
    #[regex(r"[0-9][0-9a-zA-Z_]*")]
    NumberLike,

    #[token("==")]
    #[token("!=")]
    #[token(">=")]
    #[token("<=")]
    #[token("->")]
    #[token("..")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token(">")]
    #[token("<")]
    #[token("=")]
    #[token(".")]
    #[token("&")]
    Op,

    #[token(";")]
    #[token(",")]
    #[token(":")]
    #[token("(")]
    #[token(")")]
    #[token("{")]
    #[token("}")]
    #[token("[")]
    #[token("]")]
    Delim,
}

/// Tokenizes `source`, ending with exactly one EOF token.
pub fn lex(source: &str) -> Vec<Token<'_>> {
    let index = LineIndex::new(source);
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(RawToken::NumberLike) => {
                split_number_run(source, span.start, span.end, &index, &mut tokens);
            }
            Ok(raw) => {
                let kind = match raw {
                    RawToken::Keyword => TokenKind::Keyword,
                    RawToken::Ident => TokenKind::Ident,
                    RawToken::Op => TokenKind::Op,
                    RawToken::Delim => TokenKind::Delim,
                    RawToken::NumberLike => TokenKind::Number,
                };
                tokens.push(Token {
                    kind,
                    text: &source[span.clone()],
                    pos: index.pos(span.start as u32),
                });
            }
            Err(()) => {
                tokens.push(Token {
                    kind: TokenKind::Error,
                    text: &source[span.clone()],
                    pos: index.pos(span.start as u32),
                });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        text: "",
        pos: index.pos(source.len() as u32),
    });
    tokens
}

/// Splits a digit-led alphanumeric run into number, identifier, and error
/// tokens.
///
/// Rules, applied left to right over the run:
/// - `0b`/`0o`/`0x` (case-insensitive) followed by at least one digit of the
///   base is a number covering the prefix and those digits;
/// - such a prefix with no valid digit is an error covering the two prefix
///   bytes;
/// - `0` followed by any other letter is an error covering the two bytes;
/// - a decimal digit run that ends the run is a number; one followed by more
///   alphanumerics is an error covering the combined run;
/// - a remainder starting with a letter or `_` is an identifier (or keyword).
fn split_number_run<'s>(
    source: &'s str,
    mut start: usize,
    end: usize,
    index: &LineIndex,
    out: &mut Vec<Token<'s>>,
) {
    while start < end {
        let text = &source[start..end];
        let bytes = text.as_bytes();
        let pos = index.pos(start as u32);

        if !bytes[0].is_ascii_digit() {
            let kind = if KEYWORDS.contains(&text) {
                TokenKind::Keyword
            } else {
                TokenKind::Ident
            };
            out.push(Token { kind, text, pos });
            return;
        }

        if bytes[0] == b'0' && bytes.len() >= 2 {
            let digit_class: Option<fn(u8) -> bool> = match bytes[1] {
                b'b' | b'B' => Some(|b: u8| b == b'0' || b == b'1'),
                b'o' | b'O' => Some(|b: u8| (b'0'..=b'7').contains(&b)),
                b'x' | b'X' => Some(|b: u8| b.is_ascii_hexdigit()),
                _ => None,
            };

            if let Some(is_digit) = digit_class {
                let mut i = 2;
                while i < bytes.len() && is_digit(bytes[i]) {
                    i += 1;
                }
                let kind = if i == 2 {
                    TokenKind::Error
                } else {
                    TokenKind::Number
                };
                let cut = i.max(2);
                out.push(Token {
                    kind,
                    text: &text[..cut],
                    pos,
                });
                start += cut;
                continue;
            }

            if bytes[1].is_ascii_alphabetic() {
                out.push(Token {
                    kind: TokenKind::Error,
                    text: &text[..2],
                    pos,
                });
                start += 2;
                continue;
            }
        }

        let mut i = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let kind = if i == bytes.len() {
            TokenKind::Number
        } else {
            // A digit-prefixed identifier like `12abc`.
            TokenKind::Error
        };
        out.push(Token { kind, text, pos });
        return;
    }
}

/// Parses an integer literal produced by [`lex`], honouring base prefixes.
pub fn parse_int(text: &str) -> Option<i64> {
    let lower = text.as_bytes();
    if lower.len() >= 2 && lower[0] == b'0' {
        let radix = match lower[1] {
            b'b' | b'B' => Some(2),
            b'o' | b'O' => Some(8),
            b'x' | b'X' => Some(16),
            _ => None,
        };
        if let Some(radix) = radix {
            return i64::from_str_radix(&text[2..], radix).ok();
        }
    }
    text.parse::<i64>().ok()
}
