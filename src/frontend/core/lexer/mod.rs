//! Lexer module
//!
//! Turns source text into a flat token stream: parens, numbers, strings
//! and names. Scanning is a single left-to-right pass with maximal munch.

pub mod tokenizer;
pub mod tokens;

// Re-export types
pub use tokenizer::Lexer;
pub use tokens::{LexError, Token, TokenKind};

/// Tokenize source code
///
/// Stops at the first lexical error; no partial token list is returned.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tracing::debug!("Lexing source ({} bytes)", source.len());

    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        log_token(&token);
        tokens.push(token);
    }

    tracing::debug!("Lexing complete, {} tokens", tokens.len());
    Ok(tokens)
}

/// Log a token for debugging
fn log_token(token: &Token) {
    match token.kind {
        TokenKind::LParen | TokenKind::RParen => {
            tracing::trace!("punctuation {} at {}", token.text, token.span.start)
        }
        TokenKind::Number => tracing::trace!("number {} at {}", token.text, token.span.start),
        TokenKind::String => tracing::trace!(
            "string {:?} at {} ({} bytes with quotes)",
            token.text,
            token.span.start,
            token.span.len()
        ),
        TokenKind::Name => tracing::trace!("name {} at {}", token.text, token.span.start),
    }
}
