/// Tokenizer for raw mount patterns
///
/// Splits a pattern into delimiter tokens (`/`, `(`, `)`) and the runs of
/// text between them. Every character lands in exactly one token.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^/()]+|[/()]").expect("token regex is valid"));

/// One lexical unit of a pattern, borrowing from the raw string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// `/`
    Slash,
    /// `(`
    Open,
    /// `)`
    Close,
    /// `:name`, stored without the colon
    Variable(&'a str),
    /// Any other run of text
    Static(&'a str),
}

/// A token plus its byte offset in the raw pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub position: usize,
}

/// Classifies a single matched run (pure function)
fn classify(text: &str, position: usize) -> Result<TokenKind<'_>, ParseError> {
    match text {
        "/" => Ok(TokenKind::Slash),
        "(" => Ok(TokenKind::Open),
        ")" => Ok(TokenKind::Close),
        ":" => Err(ParseError::EmptyVariableName { position }),
        _ => Ok(text
            .strip_prefix(':')
            .map(TokenKind::Variable)
            .unwrap_or(TokenKind::Static(text))),
    }
}

/// Splits a raw pattern into tokens
///
/// # Examples
///
/// ```
/// use rhtmx_mount::route::token::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("/foo(/:bar)")
///     .unwrap()
///     .into_iter()
///     .map(|t| t.kind)
///     .collect();
///
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Slash,
///         TokenKind::Static("foo"),
///         TokenKind::Open,
///         TokenKind::Slash,
///         TokenKind::Variable("bar"),
///         TokenKind::Close,
///     ]
/// );
/// ```
pub fn tokenize(raw: &str) -> Result<Vec<Token<'_>>, ParseError> {
    TOKEN_RE
        .find_iter(raw)
        .map(|m| {
            classify(m.as_str(), m.start()).map(|kind| Token {
                kind,
                position: m.start(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(raw: &str) -> Vec<TokenKind<'_>> {
        tokenize(raw).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_static() {
        assert_eq!(
            kinds("/foo/bar"),
            vec![
                TokenKind::Slash,
                TokenKind::Static("foo"),
                TokenKind::Slash,
                TokenKind::Static("bar"),
            ]
        );
    }

    #[test]
    fn test_tokenize_adjacent_delimiters() {
        assert_eq!(
            kinds("//()"),
            vec![
                TokenKind::Slash,
                TokenKind::Slash,
                TokenKind::Open,
                TokenKind::Close,
            ]
        );
    }

    #[test]
    fn test_colon_inside_text_is_static() {
        assert_eq!(kinds("a:b"), vec![TokenKind::Static("a:b")]);
        assert_eq!(kinds(".:format"), vec![TokenKind::Static(".:format")]);
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("/ab/:cd").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_empty_variable_name() {
        assert_eq!(
            tokenize("/foo/:"),
            Err(ParseError::EmptyVariableName { position: 5 })
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
    }
}
