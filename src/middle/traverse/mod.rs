//! Generic depth-first traversal of the source AST
//!
//! The traverser knows only the shape of the source tree. What happens at
//! each node is up to the [`Visitor`] passed in: the transformer builds the
//! target AST from these events, [`TraceVisitor`] only logs them.

pub mod trace;

pub use trace::TraceVisitor;

use crate::frontend::core::parser::ast::{
    CallExpression, Expr, NumberLiteral, Program, StringLiteral,
};
use std::fmt;

/// Borrowed view of any source AST node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    Call(&'a CallExpression),
    Number(&'a NumberLiteral),
    String(&'a StringLiteral),
}

impl<'a> NodeRef<'a> {
    /// Node kind name
    pub fn kind(&self) -> &'static str {
        match self {
            NodeRef::Program(_) => "Program",
            NodeRef::Call(_) => "CallExpression",
            NodeRef::Number(_) => "NumberLiteral",
            NodeRef::String(_) => "StringLiteral",
        }
    }

    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, NodeRef::Call(_))
    }

    /// Children in visiting order
    pub fn children(&self) -> &'a [Expr] {
        match *self {
            NodeRef::Program(program) => &program.statements,
            NodeRef::Call(call) => &call.arguments,
            NodeRef::Number(_) | NodeRef::String(_) => &[],
        }
    }
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Call(call) => NodeRef::Call(call),
            Expr::Number(lit) => NodeRef::Number(lit),
            Expr::String(lit) => NodeRef::String(lit),
        }
    }
}

impl<'a> From<&'a Program> for NodeRef<'a> {
    fn from(program: &'a Program) -> Self {
        NodeRef::Program(program)
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            NodeRef::Program(program) => write!(f, "Program[{}]", program.statements.len()),
            NodeRef::Call(call) => write!(f, "CallExpression({})", call.callee),
            NodeRef::Number(lit) => write!(f, "NumberLiteral({})", lit.text),
            NodeRef::String(lit) => write!(f, "StringLiteral({:?})", lit.text),
        }
    }
}

/// Enter/exit callbacks invoked by [`traverse`]
///
/// `parent` is `None` only for the root `Program`.
pub trait Visitor {
    fn enter(
        &mut self,
        _node: NodeRef<'_>,
        _parent: Option<NodeRef<'_>>,
    ) {
    }

    fn exit(
        &mut self,
        _node: NodeRef<'_>,
        _parent: Option<NodeRef<'_>>,
    ) {
    }
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn enter(
        &mut self,
        node: NodeRef<'_>,
        parent: Option<NodeRef<'_>>,
    ) {
        (**self).enter(node, parent)
    }

    fn exit(
        &mut self,
        node: NodeRef<'_>,
        parent: Option<NodeRef<'_>>,
    ) {
        (**self).exit(node, parent)
    }
}

/// Walk `program` depth first, calling `enter` before a node's children
/// and `exit` after them
pub fn traverse<V: Visitor + ?Sized>(
    program: &Program,
    visitor: &mut V,
) {
    traverse_node(NodeRef::Program(program), None, visitor);
}

fn traverse_node<V: Visitor + ?Sized>(
    node: NodeRef<'_>,
    parent: Option<NodeRef<'_>>,
    visitor: &mut V,
) {
    visitor.enter(node, parent);
    for child in node.children() {
        traverse_node(NodeRef::from(child), Some(node), visitor);
    }
    visitor.exit(node, parent);
}
