//! Function and contract declaration scanning
//!
//! Known limitations, all acceptable for demonstration tooling:
//! - The parameter list ends at the first `)`, so parameter types with nested
//!   parentheses (function-typed parameters) mis-extract.
//! - A parameter's display name is its last whitespace-separated word. An
//!   unnamed parameter (`function f(uint256)`) therefore reports its type
//!   (`uint256`) as its name.
//! - Modifier checks are substring tests: `returns (uint internalCount)`
//!   counts as `internal`.

use serde::Serialize;

use crate::{tokenize, Token, TokenKind};

/// Extracted summary of one function declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDescriptor {
    pub name: String,
    pub parameter_names: Vec<String>,
    pub is_payable: bool,
    pub is_view_or_pure: bool,
}

impl FunctionDescriptor {
    /// `name(a, b)` form used in listings
    pub fn display_signature(&self) -> String {
        format!("{}({})", self.name, self.parameter_names.join(", "))
    }
}

/// One `function name(...) ...` occurrence before any filtering
struct Declaration<'a> {
    name: &'a str,
    params: &'a str,
    /// Tokens between `)` and the body or terminator, comments dropped
    modifiers: Vec<&'a str>,
    has_body: bool,
}

impl Declaration<'_> {
    fn modifiers_contain(&self, needle: &str) -> bool {
        self.modifiers.iter().any(|m| m.contains(needle))
    }
}

/// Extract callable function descriptors in declaration order.
///
/// Skips constructors, declarations without a body, and any declaration whose
/// modifier region mentions `internal` or `private`.
pub fn extract_functions(source: &str) -> Vec<FunctionDescriptor> {
    scan_declarations(source)
        .into_iter()
        .filter(|decl| decl.has_body)
        .filter(|decl| decl.name != "constructor")
        .filter(|decl| !decl.modifiers_contain("internal") && !decl.modifiers_contain("private"))
        .map(|decl| FunctionDescriptor {
            name: decl.name.to_string(),
            parameter_names: parameter_names(decl.params),
            is_payable: decl.modifiers_contain("payable"),
            is_view_or_pure: decl.modifiers_contain("view") || decl.modifiers_contain("pure"),
        })
        .collect()
}

/// Names of functions declared with explicit `external` or `public`
/// visibility directly after the parameter list.
///
/// This is deliberately narrower than [`extract_functions`]: `function f()
/// view public` is not listed here, while body-less interface declarations
/// are. Names starting with `_` are dropped.
pub fn exported_function_names(source: &str) -> Vec<String> {
    scan_declarations(source)
        .into_iter()
        .filter(|decl| matches!(decl.modifiers.first(), Some(&"external") | Some(&"public")))
        .filter(|decl| !decl.name.starts_with('_'))
        .map(|decl| decl.name.to_string())
        .collect()
}

/// Name of the first concrete `contract Name is ...` or `contract Name {`
/// declaration. `abstract contract` declarations are skipped.
pub fn contract_name(source: &str) -> Option<String> {
    let tokens = code_tokens(source);
    tokens.windows(3).enumerate().find_map(|(i, w)| {
        let shape = (w[0].kind, w[1].kind, w[2].kind);
        match shape {
            (TokenKind::Contract, TokenKind::Ident, TokenKind::Is | TokenKind::LBrace)
                if !is_abstract(&tokens, i, source) =>
            {
                Some(w[1].text(source).to_string())
            }
            _ => None,
        }
    })
}

fn is_abstract(tokens: &[Token], contract_at: usize, source: &str) -> bool {
    contract_at
        .checked_sub(1)
        .map(|prev| &tokens[prev])
        .map_or(false, |t| t.kind == TokenKind::Ident && t.text(source) == "abstract")
}

/// Split a raw parameter list into display names
fn parameter_names(params: &str) -> Vec<String> {
    params
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .filter_map(|p| p.split_whitespace().last())
        .map(str::to_string)
        .collect()
}

fn code_tokens(source: &str) -> Vec<Token> {
    tokenize(source)
        .into_iter()
        .filter(|t| !t.kind.is_comment())
        .collect()
}

fn scan_declarations(source: &str) -> Vec<Declaration<'_>> {
    let tokens = code_tokens(source);
    let mut decls = Vec::new();
    let mut i = 0;

    while i + 2 < tokens.len() {
        let is_header = tokens[i].kind == TokenKind::Function
            && tokens[i + 1].kind == TokenKind::Ident
            && tokens[i + 2].kind == TokenKind::LParen;
        if !is_header {
            i += 1;
            continue;
        }

        let open = i + 2;
        let Some(close) = find_from(&tokens, open + 1, |k| k == TokenKind::RParen) else {
            break;
        };

        // Modifier region runs to the body, a terminator, or the next declaration
        let mut end = close + 1;
        while end < tokens.len()
            && !matches!(
                tokens[end].kind,
                TokenKind::LBrace | TokenKind::Semicolon | TokenKind::Function | TokenKind::Eof
            )
        {
            end += 1;
        }
        let stop = tokens.get(end).map(|t| t.kind).unwrap_or(TokenKind::Eof);

        let params_span = tokens[open].span.between(tokens[close].span);
        decls.push(Declaration {
            name: tokens[i + 1].text(source),
            params: &source[params_span.start..params_span.end],
            modifiers: tokens[close + 1..end].iter().map(|t| t.text(source)).collect(),
            has_body: stop == TokenKind::LBrace,
        });

        i = match stop {
            TokenKind::LBrace | TokenKind::Semicolon => end + 1,
            _ => end,
        };
    }

    decls
}

fn find_from(tokens: &[Token], start: usize, pred: impl Fn(TokenKind) -> bool) -> Option<usize> {
    tokens
        .iter()
        .skip(start)
        .position(|t| pred(t.kind))
        .map(|offset| start + offset)
}
