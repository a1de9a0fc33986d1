//! Target AST: C-style calls with explicit identifiers and statements
//!
//! Top-level calls are wrapped in [`ExpressionStatement`]; calls in argument
//! position are not. `Stmt` and `Expr` are separate types so the tree cannot
//! express a wrapped argument or an unwrapped top-level call.

use serde::Serialize;

/// Root of the generated tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// Top-level statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Stmt {
    Expression(ExpressionStatement),
    Number(NumberLiteral),
    String(StringLiteral),
}

/// Call used as a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionStatement {
    pub expression: CallExpression,
}

/// Argument expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    Call(CallExpression),
    Number(NumberLiteral),
    String(StringLiteral),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberLiteral {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringLiteral {
    pub text: String,
}

impl CallExpression {
    pub fn new(callee: impl Into<String>) -> Self {
        Self {
            callee: Identifier {
                name: callee.into(),
            },
            arguments: Vec::new(),
        }
    }

    pub fn with_arg(
        mut self,
        arg: Expr,
    ) -> Self {
        self.arguments.push(arg);
        self
    }
}

impl Expr {
    pub fn number(text: impl Into<String>) -> Self {
        Expr::Number(NumberLiteral { text: text.into() })
    }

    pub fn string(text: impl Into<String>) -> Self {
        Expr::String(StringLiteral { text: text.into() })
    }
}

impl From<CallExpression> for Stmt {
    fn from(expression: CallExpression) -> Self {
        Stmt::Expression(ExpressionStatement { expression })
    }
}
