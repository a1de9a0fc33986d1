//! supertiny - a super tiny compiler
//!
//! Translates Lisp-style call expressions into C-style function calls.
//!
//! # Example
//!
//! ```
//! let output = supertiny::compile("(add 2 (subtract 4 2))").unwrap();
//! assert_eq!(output, "add(2, subtract(4, 2))");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! source -> lexer -> tokens -> parser -> source AST
//!        -> traverser + transformer -> target AST -> code generator -> text
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod middle;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::{CompilationPhase, CompileConfig, CompileError, Compiler, TransformStrategy};

use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "supertiny";

/// Compile source text with the default configuration
///
/// Returns the generated text, or the first error any stage reported.
pub fn compile(source: &str) -> ::std::result::Result<String, CompileError> {
    Compiler::new().compile(source)
}

use ::std::fs;
use ::std::path::Path;

/// Compile a source file with the given configuration
pub fn compile_file(
    path: &Path,
    config: CompileConfig,
) -> Result<String> {
    debug!("Compiling file {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let output = Compiler::with_config(config).compile(&source)?;
    Ok(output)
}
