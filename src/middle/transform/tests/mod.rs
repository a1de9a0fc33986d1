//! Transformer tests module
//!
//! - visitor: TransformerVisitor driven by the traverser
//! - strategies: visitor and recursive strategies agree


use crate::frontend::core::lexer::tokenize;
use crate::frontend::core::parser::{ast, parse};

pub(super) fn parse_source(source: &str) -> ast::Program {
    parse(&tokenize(source).unwrap()).unwrap()
}
