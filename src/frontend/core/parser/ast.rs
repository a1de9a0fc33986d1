//! Abstract Syntax Tree types (source side)
//!
//! The tree mirrors the call-expression language one to one: every call
//! comes from a `(name ...)` form and every literal from a single token.

use crate::util::span::Span;
use serde::Serialize;

/// Root node, one per compilation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub statements: Vec<Expr>,
    pub span: Span,
}

/// Expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    Call(CallExpression),
    Number(NumberLiteral),
    String(StringLiteral),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Call(call) => call.span,
            Expr::Number(lit) => lit.span,
            Expr::String(lit) => lit.span,
        }
    }
}

/// `(callee arg...)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallExpression {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// Integer literal, kept as source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberLiteral {
    pub text: String,
    pub span: Span,
}

/// String literal, quotes stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringLiteral {
    pub text: String,
    pub span: Span,
}
