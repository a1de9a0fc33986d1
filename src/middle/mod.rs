//! Traversal, transformation and code generation
//!
//! This module takes the source AST produced by the frontend, rewrites it
//! into the target AST and prints it.

pub mod codegen;
pub mod transform;
pub mod traverse;

pub use codegen::{generate, CodeGenError};
pub use transform::{transform, TransformerVisitor};
pub use traverse::{traverse, NodeRef, TraceVisitor, Visitor};
