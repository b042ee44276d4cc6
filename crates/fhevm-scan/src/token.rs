//! Token definitions for contract source

use logos::{Lexer, Logos};

/// Just enough of the contract language to find declarations.
///
/// Comments and string literals are real tokens so that a `function` inside
/// them is never mistaken for a declaration. Every operator collapses into
/// [`TokenKind::Punct`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")] // Skip whitespace
pub enum TokenKind {
    // === Keywords ===
    #[token("function")]
    Function,
    #[token("contract")]
    Contract,
    #[token("is")]
    Is,

    // === Comments ===
    #[regex(r"//[^\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // === Punctuation ===
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[regex(r"[=!<>+\-*/%&|^~?:.@\[\]]")]
    Punct,

    // === Literals ===
    #[regex(r"[0-9][0-9a-fA-FxX_]*(\.[0-9]+)?")]
    Number,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    String,

    // === Identifiers ===
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    // === Special ===
    Error,
    Eof,
}

/// Consume through the closing `*/`; an unterminated comment is an error
fn block_comment(lex: &mut Lexer<TokenKind>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

impl TokenKind {
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}
