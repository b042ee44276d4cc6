//! FHEVM Scan - Shallow lexical scan of contract source
//!
//! This is not a parser. It tokenizes with logos and pattern-matches a few
//! declaration shapes, which is enough for generating demonstration tooling:
//! - `function name(params) modifiers {` declarations
//! - `contract Name is ...` / `contract Name {` declarations
//! - NatSpec-style `@title`, `@notice`, `@dev` tags
//!
//! Every entry point is a pure function over text.

mod doc_tags;
mod signature;
mod span;
mod token;

pub use doc_tags::*;
pub use signature::*;
pub use span::Span;
pub use token::*;

use logos::Logos;

/// Tokenize a source string into a vector of tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::new(lexer.span().start, lexer.span().end);
        let kind = match result {
            Ok(kind) => kind,
            Err(_) => TokenKind::Error,
        };
        tokens.push(Token { kind, span });
    }

    // Add EOF token
    let end = source.len();
    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::new(end, end),
    });

    tokens
}

/// A token with its span
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.end]
    }
}
