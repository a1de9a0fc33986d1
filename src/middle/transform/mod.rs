//! Source AST to target AST rewriting

pub mod ast;
pub mod recursive;
pub mod visitor;
#[cfg(test)]
mod tests;

pub use ast::Program;
pub use visitor::TransformerVisitor;

use crate::frontend::config::TransformStrategy;
use crate::frontend::core::parser::ast as source;
use crate::middle::traverse::traverse;

/// Rewrite a parsed program with the chosen strategy
///
/// Both strategies produce the same tree.
pub fn transform(
    program: &source::Program,
    strategy: TransformStrategy,
) -> Program {
    tracing::debug!(
        "Transforming {} statements ({} strategy)",
        program.statements.len(),
        strategy
    );
    match strategy {
        TransformStrategy::Visitor => {
            let mut visitor = TransformerVisitor::new();
            traverse(program, &mut visitor);
            visitor.into_program()
        }
        TransformStrategy::Recursive => recursive::transform_program(program),
    }
}
