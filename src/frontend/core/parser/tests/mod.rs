//! Parser tests module
//!
//! - calls: call expressions and top-level statements
//! - errors: malformed input classification
//! - state: ParserState cursor behaviour


use crate::frontend::core::lexer::tokenize;
use crate::frontend::core::parser::{parse, ParseError, Program};

/// Lex and parse, panicking on lexical errors
pub(super) fn parse_source(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source).expect("test source should lex");
    parse(&tokens)
}
