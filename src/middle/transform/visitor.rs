//! Visitor-driven transformer
//!
//! Builds the target tree while the traverser walks the source tree. Calls
//! being built live on a frame stack; their argument lists grow in place, so
//! a finished call only has to be attached once, on exit.

use super::ast::*;
use crate::middle::traverse::{NodeRef, Visitor};

/// Builds a target `Program` from traversal events
#[derive(Debug, Default)]
pub struct TransformerVisitor {
    /// Calls entered but not yet exited, innermost last
    frames: Vec<CallExpression>,
    /// Finished top-level statements, in source order
    statements: Vec<Stmt>,
}

impl TransformerVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The transformed tree
    ///
    /// Only meaningful after a complete traversal, when every entered call
    /// has been exited and the frame stack is empty.
    pub fn into_program(self) -> Program {
        debug_assert!(self.frames.is_empty(), "unbalanced traversal");
        Program {
            statements: self.statements,
        }
    }

    /// Attach an argument-position node to the innermost call, or record a
    /// top-level literal when no call is open
    fn attach(
        &mut self,
        expr: Expr,
    ) {
        match self.frames.last_mut() {
            Some(frame) => frame.arguments.push(expr),
            None => self.statements.push(match expr {
                Expr::Call(call) => Stmt::from(call),
                Expr::Number(lit) => Stmt::Number(lit),
                Expr::String(lit) => Stmt::String(lit),
            }),
        }
    }
}

impl Visitor for TransformerVisitor {
    fn enter(
        &mut self,
        node: NodeRef<'_>,
        _parent: Option<NodeRef<'_>>,
    ) {
        match node {
            NodeRef::Number(lit) => self.attach(Expr::number(lit.text.as_str())),
            NodeRef::String(lit) => self.attach(Expr::string(lit.text.as_str())),
            NodeRef::Call(call) => self.frames.push(CallExpression::new(call.callee.as_str())),
            NodeRef::Program(_) => {}
        }
    }

    fn exit(
        &mut self,
        node: NodeRef<'_>,
        parent: Option<NodeRef<'_>>,
    ) {
        if !node.is_call() {
            return;
        }
        let Some(finished) = self.frames.pop() else {
            tracing::warn!("exit {} without a matching enter", node);
            return;
        };

        if parent.map(|p| p.is_call()).unwrap_or(false) {
            self.attach(Expr::Call(finished));
        } else {
            self.statements.push(Stmt::from(finished));
        }
    }
}
