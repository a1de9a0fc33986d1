//! Direct recursive transformer
//!
//! Each call returns its finished node to the caller, which decides whether
//! it becomes a statement or an argument.

use super::ast::*;
use crate::frontend::core::parser::ast as source;

pub fn transform_program(program: &source::Program) -> Program {
    Program {
        statements: program.statements.iter().map(transform_stmt).collect(),
    }
}

fn transform_stmt(expr: &source::Expr) -> Stmt {
    match transform_expr(expr) {
        Expr::Call(call) => Stmt::from(call),
        Expr::Number(lit) => Stmt::Number(lit),
        Expr::String(lit) => Stmt::String(lit),
    }
}

fn transform_expr(expr: &source::Expr) -> Expr {
    match expr {
        source::Expr::Call(call) => Expr::Call(CallExpression {
            callee: Identifier {
                name: call.callee.clone(),
            },
            arguments: call.arguments.iter().map(transform_expr).collect(),
        }),
        source::Expr::Number(lit) => Expr::number(lit.text.as_str()),
        source::Expr::String(lit) => Expr::string(lit.text.as_str()),
    }
}
