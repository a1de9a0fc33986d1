//! Frontend compilation pipeline
//!
//! This module contains the lexer, the parser, the compile configuration
//! and the [`Compiler`] facade that chains them with the middle stages.

pub mod compiler;
pub mod config;
pub mod core;

pub use compiler::{CompilationPhase, CompileError, Compiler};
pub use config::{CompileConfig, TransformStrategy};
