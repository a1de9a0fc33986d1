//! Parser state and error handling

use crate::frontend::core::lexer::tokens::*;
use crate::util::span::{Position, Span};

/// Deepest call nesting the parser accepts
///
/// Every later stage recurses once per nesting level, so this bound also
/// caps their stack use.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// `(` followed by something other than a name
    #[error("Expected callee name after '(', found {found} at {}", .span.start)]
    ExpectedCalleeName { found: TokenKind, span: Span },
    /// `)` where an expression should start
    #[error("Unmatched ')' at {}", .span.start)]
    UnmatchedParen { span: Span },
    /// Tokens ran out inside an expression
    #[error("Unexpected end of input at {}", .span.start)]
    UnexpectedEndOfInput { span: Span },
    /// Token that cannot start an expression
    #[error("Unexpected token {found} at {}", .span.start)]
    UnexpectedToken { found: TokenKind, span: Span },
    /// Call opened deeper than [`MAX_NESTING_DEPTH`]
    #[error("Calls nested deeper than {max} levels at {}", .span.start)]
    NestingTooDeep { max: usize, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::ExpectedCalleeName { span, .. }
            | ParseError::UnmatchedParen { span }
            | ParseError::UnexpectedEndOfInput { span }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::NestingTooDeep { span, .. } => *span,
        }
    }
}

/// Cursor over the token stream
pub struct ParserState<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Calls currently open
    depth: usize,
}

impl<'a> ParserState<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Span of the current token, or a point just past the last token
    pub fn span(&self) -> Span {
        match self.current() {
            Some(token) => token.span,
            None => self.end_span(),
        }
    }

    pub fn end_span(&self) -> Span {
        self.tokens
            .last()
            .map(|t| Span::point(t.span.end))
            .unwrap_or_else(|| Span::point(Position::start()))
    }

    pub fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Number of calls currently open
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Open one more call level, failing past [`MAX_NESTING_DEPTH`]
    pub fn enter_call(
        &mut self,
        span: Span,
    ) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                max: MAX_NESTING_DEPTH,
                span,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub fn exit_call(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consume the current token, failing at end of input
    pub fn expect_any(&mut self) -> Result<&'a Token, ParseError> {
        let span = self.span();
        self.bump()
            .ok_or(ParseError::UnexpectedEndOfInput { span })
    }
}
