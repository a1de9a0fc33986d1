//! Token types

use crate::util::span::{Position, Span};
use serde::Serialize;
use std::fmt;

/// Lexer error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Unterminated string starting at {position}")]
    UnterminatedString { position: Position },
    #[error("Unrecognized character '{ch}' at {position}")]
    UnrecognizedCharacter { ch: char, position: Position },
}

impl LexError {
    /// Position the error points at
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedString { position }
            | LexError::UnrecognizedCharacter { position, .. } => *position,
        }
    }
}

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Run of decimal digits
    Number,
    /// Double-quoted text, quotes excluded
    String,
    /// Run of letters
    Name,
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Name => write!(f, "name"),
        }
    }
}

/// Token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        span: Span,
    ) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    #[inline]
    pub fn is(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.kind == kind
    }
}
