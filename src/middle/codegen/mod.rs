//! Code generator
//!
//! Prints the target AST as C-style call syntax. Output is a pure function
//! of the tree: statements joined by newlines, calls as `f(a, b)`, numbers
//! verbatim, strings in one pair of double quotes with no escaping.

use crate::frontend::core::lexer::tokenizer::{is_digit, is_name_char};
use crate::middle::transform::ast::*;
use thiserror::Error;

/// Code generation errors
///
/// These flag hand-built trees that no lexer output could produce; the
/// transformer never emits them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeGenError {
    #[error("Invalid identifier `{name}`: callee names must be a non-empty run of letters")]
    InvalidIdentifier { name: String },
    #[error("Invalid number literal `{text}`: expected a non-empty run of digits")]
    InvalidNumber { text: String },
}

/// Generate source text for a whole program
pub fn generate(program: &Program) -> Result<String, CodeGenError> {
    tracing::debug!("Generating code for {} statements", program.statements.len());
    let lines = program
        .statements
        .iter()
        .map(generate_stmt)
        .collect::<Result<Vec<_>, _>>()?;
    let output = lines.join("\n");
    tracing::debug!("Code generation complete ({} bytes)", output.len());
    Ok(output)
}

pub fn generate_stmt(stmt: &Stmt) -> Result<String, CodeGenError> {
    match stmt {
        Stmt::Expression(ExpressionStatement { expression }) => generate_call(expression),
        Stmt::Number(lit) => generate_number(lit),
        Stmt::String(lit) => Ok(generate_string(lit)),
    }
}

pub fn generate_expr(expr: &Expr) -> Result<String, CodeGenError> {
    match expr {
        Expr::Call(call) => generate_call(call),
        Expr::Number(lit) => generate_number(lit),
        Expr::String(lit) => Ok(generate_string(lit)),
    }
}

pub fn generate_call(call: &CallExpression) -> Result<String, CodeGenError> {
    let callee = generate_identifier(&call.callee)?;
    let arguments = call
        .arguments
        .iter()
        .map(generate_expr)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("{}({})", callee, arguments.join(", ")))
}

pub fn generate_identifier(ident: &Identifier) -> Result<String, CodeGenError> {
    if ident.name.is_empty() || !ident.name.chars().all(is_name_char) {
        return Err(CodeGenError::InvalidIdentifier {
            name: ident.name.clone(),
        });
    }
    Ok(ident.name.clone())
}

fn generate_number(lit: &NumberLiteral) -> Result<String, CodeGenError> {
    if lit.text.is_empty() || !lit.text.chars().all(is_digit) {
        return Err(CodeGenError::InvalidNumber {
            text: lit.text.clone(),
        });
    }
    Ok(lit.text.clone())
}

fn generate_string(lit: &StringLiteral) -> String {
    format!("\"{}\"", lit.text)
}
