//! Parser module
//!
//! Recursive-descent parser for the call-expression language.
//! This module provides the main entry points for parsing tokens into AST.

pub mod ast;
pub mod expressions;
pub mod parser_state;
#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use ast::*;
pub use parser_state::{ParseError, ParserState, MAX_NESTING_DEPTH};

// Re-export lexer tokens
pub use crate::frontend::core::lexer::tokens::*;
pub use crate::util::span::Span;

/// Parse tokens into a program
///
/// # Arguments
/// * `tokens` - Token stream from the lexer
///
/// # Returns
/// Parsed program or first parse error
///
/// # Example
/// ```text
/// (add 2 (subtract 4 2))
/// "hello"
/// ```
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    tracing::debug!("Parsing {} tokens", tokens.len());
    let mut state = ParserState::new(tokens);
    let mut statements = Vec::new();

    while !state.at_end() {
        statements.push(state.parse_expression()?);
    }

    let span = match (statements.first(), statements.last()) {
        (Some(first), Some(last)) => first.span().to(last.span()),
        _ => state.end_span(),
    };

    tracing::debug!("Parsing complete, {} statements", statements.len());
    Ok(Program { statements, span })
}
