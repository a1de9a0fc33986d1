//! Diagnostic visitor that logs traversal events

use super::{NodeRef, Visitor};

/// Logs every enter/exit at TRACE level, indented by depth
#[derive(Debug, Default)]
pub struct TraceVisitor {
    depth: usize,
    visited: usize,
}

impl TraceVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes entered so far
    pub fn visited(&self) -> usize {
        self.visited
    }

    fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

impl Visitor for TraceVisitor {
    fn enter(
        &mut self,
        node: NodeRef<'_>,
        parent: Option<NodeRef<'_>>,
    ) {
        let parent = parent.map(|p| p.kind()).unwrap_or("none");
        tracing::trace!("{}enter {} (parent: {})", self.indent(), node, parent);
        self.depth += 1;
        self.visited += 1;
    }

    fn exit(
        &mut self,
        node: NodeRef<'_>,
        _parent: Option<NodeRef<'_>>,
    ) {
        self.depth = self.depth.saturating_sub(1);
        tracing::trace!("{}exit {}", self.indent(), node);
    }
}
