//! Recursive-descent expression parsing

use super::ast::*;
use super::parser_state::{ParseError, ParserState};
use crate::frontend::core::lexer::tokens::{Token, TokenKind};

impl ParserState<'_> {
    /// Parse one expression starting at the cursor
    ///
    /// Literals consume a single token; `(` starts a call. Nothing is ever
    /// un-consumed, so an error leaves the cursor where it was detected.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.current() else {
            return Err(ParseError::UnexpectedEndOfInput {
                span: self.end_span(),
            });
        };

        match token.kind {
            TokenKind::Number => {
                self.bump();
                Ok(Expr::Number(NumberLiteral {
                    text: token.text.clone(),
                    span: token.span,
                }))
            }
            TokenKind::String => {
                self.bump();
                Ok(Expr::String(StringLiteral {
                    text: token.text.clone(),
                    span: token.span,
                }))
            }
            TokenKind::LParen => self.parse_call().map(Expr::Call),
            TokenKind::RParen => Err(ParseError::UnmatchedParen { span: token.span }),
            TokenKind::Name => Err(ParseError::UnexpectedToken {
                found: token.kind,
                span: token.span,
            }),
        }
    }

    /// Parse `( name expr* )`
    fn parse_call(&mut self) -> Result<CallExpression, ParseError> {
        let open = self.expect_any()?;
        debug_assert!(open.is(TokenKind::LParen));

        self.enter_call(open.span)?;
        let result = self.parse_call_body(open);
        self.exit_call();
        result
    }

    /// Callee and arguments of a call whose `(` is already consumed
    fn parse_call_body(
        &mut self,
        open: &Token,
    ) -> Result<CallExpression, ParseError> {
        let callee = self.expect_any()?;
        if !callee.is(TokenKind::Name) {
            return Err(ParseError::ExpectedCalleeName {
                found: callee.kind,
                span: callee.span,
            });
        }

        let mut arguments = Vec::new();
        loop {
            match self.current() {
                None => {
                    return Err(ParseError::UnexpectedEndOfInput {
                        span: self.end_span(),
                    })
                }
                Some(token) if token.is(TokenKind::RParen) => {
                    self.bump();
                    return Ok(CallExpression {
                        callee: callee.text.clone(),
                        arguments,
                        span: open.span.to(token.span),
                    });
                }
                Some(_) => arguments.push(self.parse_expression()?),
            }
        }
    }
}
