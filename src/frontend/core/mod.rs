//! Core algorithm layer
//! Lexer and parser for the call-expression language

pub mod lexer;
pub mod parser;

// Re-export commonly used items
pub use lexer::tokenize;
pub use parser::parse;
