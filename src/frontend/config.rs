//! Compile configuration
//!
//! Options that select how the pipeline runs. None of them change the
//! generated text; they pick the transform strategy and diagnostics.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the source AST is rewritten into the target AST
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransformStrategy {
    /// Traverser drives `TransformerVisitor` with enter/exit events
    #[default]
    Visitor,
    /// Direct bottom-up recursion over the source tree
    Recursive,
}

impl std::fmt::Display for TransformStrategy {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            TransformStrategy::Visitor => write!(f, "visitor"),
            TransformStrategy::Recursive => write!(f, "recursive"),
        }
    }
}

impl FromStr for TransformStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "visitor" => Ok(TransformStrategy::Visitor),
            "recursive" => Ok(TransformStrategy::Recursive),
            other => Err(format!(
                "unknown transform strategy `{}` (expected `visitor` or `recursive`)",
                other
            )),
        }
    }
}

/// Compile configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompileConfig {
    /// Transform strategy
    #[serde(default)]
    pub transform: TransformStrategy,

    /// Walk the source AST with `TraceVisitor` before transforming
    #[serde(default)]
    pub trace_traversal: bool,
}

impl CompileConfig {
    /// Create default configuration
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set transform strategy
    #[inline]
    pub fn with_transform(
        mut self,
        strategy: TransformStrategy,
    ) -> Self {
        self.transform = strategy;
        self
    }

    /// Enable/disable traversal tracing
    #[inline]
    pub fn with_trace_traversal(
        mut self,
        enabled: bool,
    ) -> Self {
        self.trace_traversal = enabled;
        self
    }
}
