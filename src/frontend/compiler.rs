//! Compiler facade
//!
//! Runs the whole pipeline, or any single stage of it, under a
//! [`CompileConfig`].

use crate::middle::codegen::{self, CodeGenError};
use crate::middle::transform::{self, ast as target};
use crate::middle::traverse::{traverse, TraceVisitor};
use thiserror::Error;
use tracing::debug;

use super::config::CompileConfig;
use super::core::lexer::{self, LexError, Token};
use super::core::parser::{self, ast as source, ParseError};

/// Compiler
///
/// Holds no state between calls; every `compile` builds its trees from
/// scratch and drops them before returning.
///
/// # Example
///
/// ```
/// use supertiny::frontend::Compiler;
///
/// let compiler = Compiler::new();
/// let output = compiler.compile("(add 2 (subtract 4 2))").unwrap();
/// assert_eq!(output, "add(2, subtract(4, 2))");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    /// Compile configuration
    config: CompileConfig,
}

impl Compiler {
    /// Create a compiler with the default configuration
    #[inline]
    pub fn new() -> Self {
        Self::with_config(CompileConfig::new())
    }

    /// Create a compiler with the given configuration
    #[inline]
    pub fn with_config(config: CompileConfig) -> Self {
        Self { config }
    }

    /// Get compile configuration
    #[inline]
    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Compile source text to C-style call syntax
    pub fn compile(
        &self,
        source: &str,
    ) -> Result<String, CompileError> {
        debug!("Compiling source ({} bytes)", source.len());

        let tokens = self.lex(source)?;
        let ast = self.parse(&tokens)?;
        let target = self.transform(&ast);
        let output = self.generate(&target)?;

        debug!("Compilation successful ({} bytes out)", output.len());
        Ok(output)
    }

    /// Lexical analysis only
    pub fn lex(
        &self,
        source: &str,
    ) -> Result<Vec<Token>, CompileError> {
        Ok(lexer::tokenize(source)?)
    }

    /// Parse a token list into the source AST
    pub fn parse(
        &self,
        tokens: &[Token],
    ) -> Result<source::Program, CompileError> {
        Ok(parser::parse(tokens)?)
    }

    /// Rewrite the source AST into the target AST
    pub fn transform(
        &self,
        ast: &source::Program,
    ) -> target::Program {
        if self.config.trace_traversal {
            let mut tracer = TraceVisitor::new();
            traverse(ast, &mut tracer);
            debug!("Traversal visited {} nodes", tracer.visited());
        }
        transform::transform(ast, self.config.transform)
    }

    /// Print the target AST
    pub fn generate(
        &self,
        ast: &target::Program,
    ) -> Result<String, CompileError> {
        Ok(codegen::generate(ast)?)
    }
}

/// Pipeline stage an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilationPhase {
    Lexing,
    Parsing,
    CodeGeneration,
}

impl std::fmt::Display for CompilationPhase {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            CompilationPhase::Lexing => write!(f, "lexing"),
            CompilationPhase::Parsing => write!(f, "parsing"),
            CompilationPhase::CodeGeneration => write!(f, "code generation"),
        }
    }
}

/// Compilation errors
///
/// Exactly one classified error per failed compilation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Lexical error
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Code generation error
    #[error("Code generation error: {0}")]
    CodeGen(#[from] CodeGenError),
}

impl CompileError {
    /// Stage that failed
    pub fn phase(&self) -> CompilationPhase {
        match self {
            CompileError::Lex(_) => CompilationPhase::Lexing,
            CompileError::Parse(_) => CompilationPhase::Parsing,
            CompileError::CodeGen(_) => CompilationPhase::CodeGeneration,
        }
    }
}
